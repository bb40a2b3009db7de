//! Hangouts Chat webhook notifier.
//!
//! Posts alert messages to a Hangouts Chat incoming webhook URL. The only
//! required channel setting is `url`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::NotificationChannel;
use crate::context::EvalContext;
use crate::dispatch::{HttpMethod, WebhookCommand, WebhookDispatcher};
use crate::notifiers::{Notifier, NotifierBase, NotifierError, NotifierPlugin};

// Options form schema for this channel type; opaque to the core.
const OPTIONS_SCHEMA: &str =
    r#"{"fields":[{"key":"url","label":"Url","type":"text","required":true}]}"#;

/// Returns the plugin descriptor for this notifier type.
pub fn plugin() -> NotifierPlugin {
    NotifierPlugin {
        kind: "hangoutschat",
        name: "Hangouts Chat",
        description: "Sends a Hangouts Chat message to a webhook URL",
        options_schema: OPTIONS_SCHEMA,
        factory: HangoutsChatNotifier::from_channel,
    }
}

/// Wire payload for a Hangouts Chat message.
///
/// Absent fields are omitted from the JSON document, never emitted as null.
#[derive(Debug, Default, Serialize)]
struct ChatMessage {
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Sends alert notifications to a Hangouts Chat incoming webhook.
pub struct HangoutsChatNotifier {
    base: NotifierBase,
    url: String,
    dispatcher: Arc<dyn WebhookDispatcher>,
}

impl std::fmt::Debug for HangoutsChatNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HangoutsChatNotifier")
            .field("base", &self.base)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl HangoutsChatNotifier {
    /// Builds a notifier from a channel definition.
    ///
    /// Construction is validation plus assembly and performs no I/O.
    pub fn new(
        channel: &NotificationChannel,
        dispatcher: Arc<dyn WebhookDispatcher>,
    ) -> Result<Self, NotifierError> {
        let url = match channel.settings.get_str("url") {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                return Err(NotifierError::InvalidConfiguration {
                    channel: channel.name.clone(),
                    reason: "could not find url property in settings".to_string(),
                })
            }
        };

        Ok(Self {
            base: NotifierBase::from_channel(channel),
            url,
            dispatcher,
        })
    }

    /// Factory registered under the "hangoutschat" kind.
    pub fn from_channel(
        channel: &NotificationChannel,
        dispatcher: Arc<dyn WebhookDispatcher>,
    ) -> Result<Arc<dyn Notifier>, NotifierError> {
        Ok(Arc::new(Self::new(channel, dispatcher)?))
    }

    /// The validated destination URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_message(&self, ctx: &EvalContext) -> ChatMessage {
        let mut message = ChatMessage::default();
        if let Some(image_url) = ctx.image_public_url.as_deref() {
            if !image_url.is_empty() {
                message.image_url = Some(image_url.to_string());
            }
        }
        if !ctx.rule.message.is_empty() {
            message.text = Some(ctx.rule.message.clone());
        }
        message
    }
}

#[async_trait]
impl Notifier for HangoutsChatNotifier {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn kind(&self) -> &str {
        &self.base.kind
    }

    async fn notify(&self, ctx: &EvalContext) -> Result<(), NotifierError> {
        debug!(channel = %self.base.name, "Sending Hangouts Chat notification");

        let body = serde_json::to_string(&self.build_message(ctx))?;

        let cmd = WebhookCommand {
            url: self.url.clone(),
            body,
            http_method: HttpMethod::Post,
        };

        if let Err(err) = self.dispatcher.send(cmd, ctx.cancellation()).await {
            error!(
                channel = %self.base.name,
                error = %err,
                "Failed to send Hangouts Chat notification"
            );
            metrics::counter!(
                "notifications_failed_total",
                "kind" => "hangoutschat",
                "channel" => self.base.name.clone()
            )
            .increment(1);
            return Err(err.into());
        }

        metrics::counter!(
            "notifications_sent_total",
            "kind" => "hangoutschat",
            "channel" => self.base.name.clone()
        )
        .increment(1);
        Ok(())
    }
}
