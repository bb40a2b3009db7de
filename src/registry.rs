//! Notifier type registry.
//!
//! Maps a notifier type name to its plugin descriptor. The registry is an
//! explicit object: it is built once during process initialization and then
//! shared immutably with the evaluation pipeline, so registration order is
//! testable and no ambient global state is involved. Registration must
//! complete before concurrent use begins; the registry takes no locks.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::NotificationChannel;
use crate::dispatch::WebhookDispatcher;
use crate::notifiers::{self, Notifier, NotifierError, NotifierPlugin};

#[derive(Debug, Default)]
pub struct NotifierRegistry {
    plugins: HashMap<String, NotifierPlugin>,
}

impl NotifierRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Registry pre-populated with every built-in notifier type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for plugin in notifiers::builtin_plugins() {
            registry
                .register(plugin)
                .expect("built-in notifier kinds are unique");
        }
        registry
    }

    /// Registers a notifier type.
    ///
    /// Fails if the type name is already present; the registry never
    /// silently overwrites an existing registration.
    pub fn register(&mut self, plugin: NotifierPlugin) -> Result<(), NotifierError> {
        if self.plugins.contains_key(plugin.kind) {
            return Err(NotifierError::DuplicateKind(plugin.kind.to_string()));
        }
        info!(kind = plugin.kind, "Registered notifier type");
        self.plugins.insert(plugin.kind.to_string(), plugin);
        Ok(())
    }

    /// Looks up the plugin registered under `kind`.
    pub fn get(&self, kind: &str) -> Option<&NotifierPlugin> {
        self.plugins.get(kind)
    }

    /// All registered type names.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Constructs a notifier for one channel definition.
    ///
    /// Factory validation errors are propagated unchanged.
    pub fn create_notifier(
        &self,
        channel: &NotificationChannel,
        dispatcher: Arc<dyn WebhookDispatcher>,
    ) -> Result<Arc<dyn Notifier>, NotifierError> {
        let plugin = self
            .plugins
            .get(&channel.kind)
            .ok_or_else(|| NotifierError::UnknownKind(channel.kind.clone()))?;
        (plugin.factory)(channel, dispatcher)
    }

    /// Constructs notifiers for every enabled channel.
    ///
    /// A channel that fails validation is reported in the failure list and
    /// does not stop the remaining channels from being constructed.
    /// Disabled channels are skipped.
    pub fn build_notifiers(
        &self,
        channels: &[NotificationChannel],
        dispatcher: Arc<dyn WebhookDispatcher>,
    ) -> (Vec<Arc<dyn Notifier>>, Vec<NotifierError>) {
        let mut built = Vec::new();
        let mut failures = Vec::new();

        for channel in channels {
            if !channel.enabled {
                info!(channel = %channel.name, "Skipping disabled notification channel");
                continue;
            }
            match self.create_notifier(channel, dispatcher.clone()) {
                Ok(notifier) => {
                    info!(
                        channel = %channel.name,
                        kind = %channel.kind,
                        "Constructed notifier"
                    );
                    built.push(notifier);
                }
                Err(err) => {
                    warn!(
                        channel = %channel.name,
                        error = %err,
                        "Failed to construct notifier"
                    );
                    failures.push(err);
                }
            }
        }

        (built, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelSettings;
    use crate::notifiers::hangouts_chat;
    use async_trait::async_trait;
    use tokio::sync::watch;

    struct NullDispatcher;

    #[async_trait]
    impl WebhookDispatcher for NullDispatcher {
        async fn send(
            &self,
            _cmd: crate::dispatch::WebhookCommand,
            _cancel: watch::Receiver<()>,
        ) -> Result<(), crate::dispatch::DispatchError> {
            Ok(())
        }
    }

    fn channel(name: &str, kind: &str, settings_json: &str) -> NotificationChannel {
        NotificationChannel {
            name: name.to_string(),
            kind: kind.to_string(),
            enabled: true,
            disable_resolve_message: false,
            settings: ChannelSettings::from_json(settings_json).unwrap(),
        }
    }

    #[test]
    fn builtins_include_hangouts_chat() {
        let registry = NotifierRegistry::with_builtins();
        let plugin = registry.get("hangoutschat").expect("registered");
        assert_eq!(plugin.name, "Hangouts Chat");
        assert!(!plugin.options_schema.is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = NotifierRegistry::with_builtins();
        let err = registry.register(hangouts_chat::plugin()).unwrap_err();
        assert!(matches!(err, NotifierError::DuplicateKind(kind) if kind == "hangoutschat"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_kind_is_reported() {
        let registry = NotifierRegistry::with_builtins();
        let ch = channel("ops", "carrierpigeon", "{}");
        let err = registry
            .create_notifier(&ch, Arc::new(NullDispatcher))
            .unwrap_err();
        assert!(matches!(err, NotifierError::UnknownKind(kind) if kind == "carrierpigeon"));
    }

    #[test]
    fn create_notifier_propagates_validation_error() {
        let registry = NotifierRegistry::with_builtins();
        let ch = channel("ops", "hangoutschat", "{}");
        let err = registry
            .create_notifier(&ch, Arc::new(NullDispatcher))
            .unwrap_err();
        assert!(matches!(err, NotifierError::InvalidConfiguration { .. }));
    }

    #[test]
    fn build_notifiers_skips_disabled_and_collects_failures() {
        let registry = NotifierRegistry::with_builtins();

        let good = channel("ops", "hangoutschat", r#"{"url": "http://google.com"}"#);
        let bad = channel("broken", "hangoutschat", "{}");
        let mut disabled = channel("muted", "hangoutschat", r#"{"url": "http://google.com"}"#);
        disabled.enabled = false;

        let (built, failures) =
            registry.build_notifiers(&[good, bad, disabled], Arc::new(NullDispatcher));

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].name(), "ops");
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            NotifierError::InvalidConfiguration { .. }
        ));
    }
}
