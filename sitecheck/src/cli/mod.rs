//! CLI module for sitecheck
//!
//! Provides the command-line interface for running endpoint checks.

pub mod check;

use clap::{Parser, Subcommand};

/// Black-box verification of a deployed HTTP endpoint
#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SITECHECK_URL            Target URL (same as the positional URL argument)
    SITECHECK_EXPECTED_TEXT  Expected body fragment (default: "hello world")
    SITECHECK_TIMEOUT_SECS   Per-request timeout; unset keeps transport defaults
    SITECHECK_LOG            Log filter (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all checks against the target URL
    Check(check::CheckArgs),
}
