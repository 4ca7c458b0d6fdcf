//! # Localization Module
//!
//! Bot messages live in a Fluent resource compiled into the binary. Only the
//! Russian catalog ships; the bundle is shared read-only across handlers.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::sync::LazyLock;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

const DEFAULT_LOCALE: LanguageIdentifier = langid!("ru");
const RU_RESOURCE: &str = include_str!("../locales/ru/main.ftl");

/// Message catalog for the rice bot
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Build the manager from the embedded Russian resource
    ///
    /// Syntax errors in the resource are logged; every entry that did parse
    /// stays usable.
    pub fn new() -> Self {
        Self::from_source(RU_RESOURCE.to_string())
    }

    /// Build the manager from an arbitrary Fluent source
    pub fn from_source(source: String) -> Self {
        let mut bundle = FluentBundle::new_concurrent(vec![DEFAULT_LOCALE]);
        // Isolation marks around placeables would break plain-text numbers
        bundle.set_use_isolating(false);

        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!(error_count = errors.len(), "Fluent resource has syntax errors");
                resource
            }
        };

        if let Err(errors) = bundle.add_resource(resource) {
            warn!(error_count = errors.len(), "Failed to add some Fluent messages");
        }

        Self { bundle }
    }

    /// Get a localized message, substituting `args` into its placeables
    pub fn get_message(&self, key: &str, args: Option<&[(&str, &str)]>) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = self
            .bundle
            .format_pattern(pattern, fluent_args.as_ref(), &mut errors)
            .into_owned();

        if !errors.is_empty() {
            debug!(key, error_count = errors.len(), "Message formatted with errors");
        }

        value
    }

    /// Check whether the catalog defines `key`
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }
}

impl Default for LocalizationManager {
    fn default() -> Self {
        Self::new()
    }
}

static LOCALIZATION_MANAGER: LazyLock<LocalizationManager> =
    LazyLock::new(LocalizationManager::new);

/// Force the catalog to load so resource problems surface at startup
pub fn init_localization() {
    LazyLock::force(&LOCALIZATION_MANAGER);
}

/// Get the global localization manager
pub fn get_localization_manager() -> &'static LocalizationManager {
    &LOCALIZATION_MANAGER
}

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    get_localization_manager().get_message(key, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    get_localization_manager().get_message(key, Some(args))
}
