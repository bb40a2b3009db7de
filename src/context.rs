//! The evaluation context handed to notifiers.
//!
//! One `EvalContext` is produced per alert evaluation cycle by the
//! enclosing pipeline. It is read-only to notifiers and carries the
//! cancellation scope that bounds any delivery started from it.

use tokio::sync::watch;

/// Metadata of the alert rule that produced an evaluation result.
#[derive(Debug, Clone, Default)]
pub struct AlertRule {
    /// Rule name, used for logging.
    pub name: String,
    /// Operator-supplied notification message.
    pub message: String,
}

/// The outcome of one alert evaluation cycle, as seen by notifiers.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// The rule whose evaluation triggered this notification.
    pub rule: AlertRule,
    /// Publicly reachable URL of the rendered alert graph, if one was uploaded.
    pub image_public_url: Option<String>,
    shutdown: watch::Receiver<()>,
}

impl EvalContext {
    pub fn new(rule: AlertRule, shutdown: watch::Receiver<()>) -> Self {
        Self {
            rule,
            image_public_url: None,
            shutdown,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_public_url = Some(url.into());
        self
    }

    /// Cancellation scope for deliveries started from this evaluation.
    ///
    /// Dispatchers select against this receiver so a cancelled evaluation
    /// does not leave a delivery blocking indefinitely.
    pub fn cancellation(&self) -> watch::Receiver<()> {
        self.shutdown.clone()
    }
}
