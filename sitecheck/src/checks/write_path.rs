//! 書き込み系チェック
//!
//! PUT/POSTがHTTP 403で拒否されることを検証する。
//! 読み取り系と異なり、メソッドごとに独立したリクエストを発行する。

use crate::report::CheckOutcome;
use reqwest::{Client, Method, StatusCode};
use tracing::debug;

/// Check that the given write method is rejected with exactly HTTP 403.
///
/// Sends the method with an empty body. A success response means the write
/// was unexpectedly permitted; any rejection code other than 403 is also a
/// failure. A transport failure is reported as an error outcome, distinct
/// from an assertion failure.
pub async fn check_write_rejected(client: &Client, url: &str, method: Method) -> CheckOutcome {
    let name = check_name(&method);

    let response = match client.request(method.clone(), url).body("").send().await {
        Ok(response) => response,
        Err(e) => {
            debug!(method = %method, error = %e, "Write check could not reach the endpoint");
            return CheckOutcome::error(name, format!("transport failure: {}", e));
        }
    };

    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        CheckOutcome::pass(name, "HTTP 403")
    } else if status.is_success() {
        CheckOutcome::fail(
            name,
            format!("write unexpectedly permitted: HTTP {}", status.as_u16()),
        )
    } else {
        CheckOutcome::fail(
            name,
            format!("expected HTTP 403, got HTTP {}", status.as_u16()),
        )
    }
}

fn check_name(method: &Method) -> String {
    format!("write_rejected_{}", method.as_str().to_ascii_lowercase())
}
