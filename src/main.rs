//! AlertRelay - notification channel validation front-end
//!
//! Loads the persisted channel configuration, constructs every configured
//! notifier against a no-op dispatcher and reports per-channel validation
//! results. The evaluation pipeline consumes the library API directly; this
//! binary exists so operators can check a channel file before deploying it.

use alertrelay::{
    cli::Cli,
    config::Config,
    dispatch::{DispatchError, WebhookCommand, WebhookDispatcher},
    registry::NotifierRegistry,
};
use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Dispatcher used during validation runs. Nothing is delivered.
struct NoopDispatcher;

#[async_trait]
impl WebhookDispatcher for NoopDispatcher {
    async fn send(
        &self,
        _cmd: WebhookCommand,
        _cancel: watch::Receiver<()>,
    ) -> Result<(), DispatchError> {
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging is up; a broken file is fatal.
    let config = Config::load(&cli.config).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("AlertRelay starting up...");
    info!("Configured channels: {}", config.channels.len());

    let registry = NotifierRegistry::with_builtins();
    let (built, failures) = registry.build_notifiers(&config.channels, Arc::new(NoopDispatcher));

    for notifier in &built {
        info!(
            channel = notifier.name(),
            kind = notifier.kind(),
            "Channel configuration OK"
        );
    }
    for failure in &failures {
        error!(error = %failure, "Channel failed validation");
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} channels failed validation",
            failures.len(),
            config.channels.len()
        );
    }

    info!("All channels validated.");
    Ok(())
}
