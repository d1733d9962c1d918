//! エンドポイントチェック
//!
//! 単一のデプロイ済みエンドポイントをブラックボックスで検証する。
//! GETレスポンスは1回だけ取得し、読み取り系チェック全体で共有する。
//! 書き込み系チェックはメソッドごとに個別のリクエストを発行する。

pub mod read_path;
pub mod write_path;

use crate::config::CheckConfig;
use crate::error::CheckResult;
use crate::report::CheckReport;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use std::time::Instant;
use tracing::debug;

/// 取得済みGETレスポンスのスナップショット
///
/// HTTPエラーステータスも失敗として伝播させず、そのまま保持して
/// 各チェックから検査できるようにする。
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Issue a single GET and capture the full response.
///
/// Non-2xx statuses are captured as the result rather than propagated, so
/// that unexpected statuses remain inspectable by the assertions. Only
/// transport-level failures (DNS, connection, TLS, timeout) return an error.
pub async fn fetch_get(client: &Client, url: &str) -> CheckResult<FetchedResponse> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?.to_vec();

    Ok(FetchedResponse {
        status,
        headers,
        body,
    })
}

/// Run every check against the target URL and collect a report.
///
/// A transport failure of the shared GET aborts the run: every read-path
/// check depends on that response. Write-path transport failures are
/// recorded per check instead.
pub async fn run_all(client: &Client, config: &CheckConfig) -> CheckResult<CheckReport> {
    let mut report = CheckReport::new(&config.url);

    // 読み取り系: GETは1回だけ発行して共有する
    let start = Instant::now();
    let response = fetch_get(client, &config.url).await?;
    report.get_latency_ms = Some(start.elapsed().as_millis() as u32);
    debug!(
        status = %response.status,
        body_len = response.body.len(),
        latency_ms = report.get_latency_ms,
        "GET response captured"
    );

    report.push(read_path::check_status_200(&response));
    report.push(read_path::check_content_type_html(&response));
    report.push(read_path::check_body_contains(
        &response,
        &config.expected_text,
    ));

    // 書き込み系: メソッドごとに個別リクエスト
    for method in [Method::PUT, Method::POST] {
        let outcome = write_path::check_write_rejected(client, &config.url, method).await;
        report.push(outcome);
    }

    Ok(report)
}
