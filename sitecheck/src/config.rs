//! Configuration resolution
//!
//! Resolves exactly one target URL (plus optional tuning parameters) from
//! the CLI arguments before any check runs. A missing URL aborts the run.

use crate::cli::check::CheckArgs;
use crate::error::{CheckError, CheckResult};
use reqwest::Client;
use std::time::Duration;

/// 1回のチェック実行に必要な設定
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Target URL under test
    pub url: String,
    /// Expected body fragment (case-sensitive)
    pub expected_text: String,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl CheckConfig {
    /// Resolve the configuration from CLI arguments.
    ///
    /// The target URL is required and has no default; resolution fails
    /// before any network call when it is absent.
    pub fn resolve(args: &CheckArgs) -> CheckResult<Self> {
        let url = args.url.clone().ok_or_else(|| {
            CheckError::Config(
                "Please provide URL in format https://site-domain/site-path to test".to_string(),
            )
        })?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CheckError::Config(format!(
                "URL must start with http:// or https://: {}",
                url
            )));
        }

        Ok(Self {
            url,
            expected_text: args.expect.clone(),
            timeout: args.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Build the HTTP client shared by all checks in this run.
    pub fn build_client(&self) -> CheckResult<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
