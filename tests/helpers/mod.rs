//! Shared test doubles and builders for the integration suites.

use alertrelay::config::{ChannelSettings, NotificationChannel};
use alertrelay::context::{AlertRule, EvalContext};
use alertrelay::dispatch::{DispatchError, WebhookCommand, WebhookDispatcher};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Records every command it is asked to deliver.
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    pub sent: Arc<Mutex<Vec<WebhookCommand>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_commands(&self) -> Vec<WebhookCommand> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookDispatcher for RecordingDispatcher {
    async fn send(
        &self,
        cmd: WebhookCommand,
        _cancel: watch::Receiver<()>,
    ) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(cmd);
        Ok(())
    }
}

/// Fails every delivery with the configured message.
pub struct FailingDispatcher {
    pub message: String,
}

#[async_trait]
impl WebhookDispatcher for FailingDispatcher {
    async fn send(
        &self,
        _cmd: WebhookCommand,
        _cancel: watch::Receiver<()>,
    ) -> Result<(), DispatchError> {
        Err(DispatchError::Delivery(self.message.clone()))
    }
}

/// Blocks until the cancellation signal fires, then reports `Cancelled`.
pub struct BlockingDispatcher;

#[async_trait]
impl WebhookDispatcher for BlockingDispatcher {
    async fn send(
        &self,
        _cmd: WebhookCommand,
        mut cancel: watch::Receiver<()>,
    ) -> Result<(), DispatchError> {
        let _ = cancel.changed().await;
        Err(DispatchError::Cancelled)
    }
}

/// Builds a channel definition with settings parsed from raw JSON.
pub fn channel(name: &str, kind: &str, settings_json: &str) -> NotificationChannel {
    NotificationChannel {
        name: name.to_string(),
        kind: kind.to_string(),
        enabled: true,
        disable_resolve_message: false,
        settings: ChannelSettings::from_json(settings_json).expect("valid settings JSON"),
    }
}

/// Builds an evaluation context; the returned sender is the cancellation
/// scope and must be kept alive for the duration of the test.
pub fn eval_context(rule_name: &str, message: &str) -> (watch::Sender<()>, EvalContext) {
    let (tx, rx) = watch::channel(());
    let ctx = EvalContext::new(
        AlertRule {
            name: rule_name.to_string(),
            message: message.to_string(),
        },
        rx,
    );
    (tx, ctx)
}
