//! Delivery command types and the dispatcher seam.
//!
//! Notifiers never talk to the network themselves. They assemble a
//! `WebhookCommand` and hand it to an injected `WebhookDispatcher`; the
//! delivery subsystem of the enclosing pipeline owns the transport.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Error, Debug, Clone)]
pub enum DispatchError {
    #[error("webhook delivery failed: {0}")]
    Delivery(String),

    #[error("webhook delivery cancelled due to shutdown")]
    Cancelled,
}

/// HTTP method carried by a delivery command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Put => f.write_str("PUT"),
        }
    }
}

/// A fully assembled outbound webhook request.
///
/// Built fresh for every notification; never reused across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookCommand {
    pub url: String,
    pub body: String,
    pub http_method: HttpMethod,
}

/// Transmits webhook commands to their destination.
///
/// One best-effort attempt per call; retry policy belongs to the caller.
/// Implementations must honour the cancellation receiver so a shutdown
/// does not leave a delivery blocking indefinitely.
#[async_trait]
pub trait WebhookDispatcher: Send + Sync {
    async fn send(
        &self,
        cmd: WebhookCommand,
        cancel: watch::Receiver<()>,
    ) -> Result<(), DispatchError>;
}
