//! check サブコマンド
//!
//! 対象URLに対して全チェックを実行し、結果レポートを出力する。

use crate::checks;
use crate::config::CheckConfig;
use clap::Args;
use tracing::info;

/// Arguments for the check subcommand
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Target URL (e.g. https://example.com/)
    #[arg(env = "SITECHECK_URL")]
    pub url: Option<String>,

    /// Expected body fragment (case-sensitive substring)
    #[arg(long, env = "SITECHECK_EXPECTED_TEXT", default_value = "hello world")]
    pub expect: String,

    /// Per-request timeout in seconds (unset keeps transport defaults)
    #[arg(long, env = "SITECHECK_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Emit the report as JSON instead of the text table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Execute the check command.
///
/// Returns whether every check passed. Configuration and transport-level
/// failures of the shared GET surface as errors; the caller maps them to
/// exit codes.
pub async fn execute(args: &CheckArgs) -> Result<bool, anyhow::Error> {
    let config = CheckConfig::resolve(args)?;
    info!(url = %config.url, expected_text = %config.expected_text, "Starting endpoint checks");

    let client = config.build_client()?;
    let report = checks::run_all(&client, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_table());
    }

    Ok(report.all_passed())
}
