//! Core traits and types for notification channels.
//!
//! This module defines the contract every notifier implementation
//! satisfies, the base metadata shared by all instances, and the plugin
//! descriptor under which a notifier type registers itself. The registry
//! that holds the descriptors lives in `crate::registry`.

pub mod hangouts_chat;

use crate::config::NotificationChannel;
use crate::context::EvalContext;
use crate::dispatch::{DispatchError, WebhookDispatcher};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    /// Required settings were missing or malformed at construction time.
    /// Fatal to that one channel; other channels are unaffected.
    #[error("invalid settings for channel '{channel}': {reason}")]
    InvalidConfiguration { channel: String, reason: String },

    #[error("unknown notifier type '{0}'")]
    UnknownKind(String),

    #[error("notifier type '{0}' already registered")]
    DuplicateKind(String),

    #[error("failed to encode notification payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Turns alert evaluation results into outbound notifications for one
/// configured channel.
///
/// Implementations hold no mutable state after construction, so `notify`
/// is safe to call concurrently across instances and evaluations.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name this instance is bound to (e.g. "ops").
    fn name(&self) -> &str;

    /// Notifier type handling the channel (e.g. "hangoutschat").
    fn kind(&self) -> &str;

    /// Delivers one evaluation result through this channel.
    ///
    /// A single best-effort attempt: delivery failures are returned to the
    /// caller, never retried here.
    async fn notify(&self, ctx: &EvalContext) -> Result<(), NotifierError>;
}

impl std::fmt::Debug for dyn Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Fields shared by all notifier instances, copied from the channel
/// definition at construction time and immutable afterwards.
#[derive(Debug, Clone)]
pub struct NotifierBase {
    pub name: String,
    pub kind: String,
    pub enabled: bool,
    pub disable_resolve_message: bool,
}

impl NotifierBase {
    pub fn from_channel(channel: &NotificationChannel) -> Self {
        Self {
            name: channel.name.clone(),
            kind: channel.kind.clone(),
            enabled: channel.enabled,
            disable_resolve_message: channel.disable_resolve_message,
        }
    }
}

/// Constructor for one notifier type.
///
/// Pure validation plus assembly; no I/O happens here. The dispatcher is
/// handed through so the constructed instance can deliver later.
pub type NotifierFactory = fn(
    &NotificationChannel,
    Arc<dyn WebhookDispatcher>,
) -> Result<Arc<dyn Notifier>, NotifierError>;

/// Descriptor under which a notifier type is registered.
#[derive(Debug, Clone)]
pub struct NotifierPlugin {
    /// Unique type name, the registry key (e.g. "hangoutschat").
    pub kind: &'static str,
    /// Human-readable name shown in channel configuration UIs.
    pub name: &'static str,
    pub description: &'static str,
    /// Options form schema, opaque to the core.
    pub options_schema: &'static str,
    pub factory: NotifierFactory,
}

/// All notifier types shipped with this crate.
pub fn builtin_plugins() -> Vec<NotifierPlugin> {
    vec![hangouts_chat::plugin()]
}
