//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the channel
//! validation front-end using the `clap` crate.

use clap::Parser;
use std::path::PathBuf;

/// Validates alert notification channel configuration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "alertrelay.toml")]
    pub config: PathBuf,
}
