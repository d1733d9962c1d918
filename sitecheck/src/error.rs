//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// sitecheck error type
///
/// Assertion failures are not errors: they are recorded as failed check
/// outcomes in the report. This type covers only conditions that prevent
/// a check from producing an outcome at all.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration error (missing or malformed target URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure (DNS, connection, TLS, timeout)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for check operations
pub type CheckResult<T> = Result<T, CheckError>;
