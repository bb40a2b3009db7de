//! AlertRelay - notification channel core for an alert evaluation pipeline
//!
//! This library turns alert evaluation results into outbound webhook
//! notifications. It provides the notifier type registry, the `Notifier`
//! trait, and the built-in channel implementations. The evaluation pipeline,
//! the rule engine, and the HTTP delivery subsystem are external
//! collaborators consumed through the narrow interfaces defined here.
pub mod cli;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod notifiers;
pub mod registry;

// Re-export the types the evaluation pipeline works with directly.
pub use config::{ChannelSettings, Config, NotificationChannel};
pub use context::{AlertRule, EvalContext};
pub use dispatch::{DispatchError, HttpMethod, WebhookCommand, WebhookDispatcher};
pub use notifiers::{Notifier, NotifierBase, NotifierError, NotifierPlugin};
pub use registry::NotifierRegistry;
