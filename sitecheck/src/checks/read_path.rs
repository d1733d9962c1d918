//! 読み取り系チェック
//!
//! 共有されたGETレスポンスに対するアサーション群。ネットワークには触れない。

use super::FetchedResponse;
use crate::report::CheckOutcome;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Check that the GET returned HTTP 200.
pub fn check_status_200(response: &FetchedResponse) -> CheckOutcome {
    if response.status == StatusCode::OK {
        CheckOutcome::pass("get_status_200", "HTTP 200")
    } else {
        CheckOutcome::fail(
            "get_status_200",
            format!("expected HTTP 200, got HTTP {}", response.status.as_u16()),
        )
    }
}

/// Check that the `Content-Type` header contains the substring `html`.
pub fn check_content_type_html(response: &FetchedResponse) -> CheckOutcome {
    let content_type = response
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.contains("html") {
        CheckOutcome::pass(
            "content_type_html",
            format!("Content-Type: {}", content_type),
        )
    } else if content_type.is_empty() {
        CheckOutcome::fail("content_type_html", "Content-Type header missing")
    } else {
        CheckOutcome::fail(
            "content_type_html",
            format!("Content-Type does not contain \"html\": {}", content_type),
        )
    }
}

/// Check that the decoded body contains the expected fragment.
///
/// 大文字小文字は区別する。本文はUTF-8として損失許容で復号する。
pub fn check_body_contains(response: &FetchedResponse, needle: &str) -> CheckOutcome {
    let body = String::from_utf8_lossy(&response.body);
    if body.contains(needle) {
        CheckOutcome::pass("body_contains", format!("body contains {:?}", needle))
    } else {
        CheckOutcome::fail("body_contains", format!("body does not contain {:?}", needle))
    }
}
