//! Integration Test: 書き込み系チェック
//!
//! PUT/POSTが403で拒否されることの検証と、その失敗モードを確認する。

use reqwest::{Client, Method};
use sitecheck::checks::write_path::check_write_rejected;
use sitecheck::report::CheckStatus;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// シナリオ1: PUT/POSTとも403で拒否されればチェック成功
#[tokio::test]
async fn test_put_and_post_rejected_with_403() {
    let mock = MockServer::start().await;

    // 書き込みリクエストは空ボディで送られる
    Mock::given(method("PUT"))
        .and(path("/"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock)
        .await;

    let client = Client::new();
    for (http_method, name) in [
        (Method::PUT, "write_rejected_put"),
        (Method::POST, "write_rejected_post"),
    ] {
        let outcome = check_write_rejected(&client, &mock.uri(), http_method).await;
        assert_eq!(outcome.name, name);
        assert_eq!(outcome.status, CheckStatus::Pass, "outcome: {:?}", outcome);
    }
}

/// シナリオ2: 書き込みが成功応答を返した場合は「許可されてしまった」失敗
#[tokio::test]
async fn test_write_permitted_is_failure() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock)
        .await;

    let client = Client::new();
    let outcome = check_write_rejected(&client, &mock.uri(), Method::POST).await;

    assert_eq!(outcome.status, CheckStatus::Fail);
    assert!(outcome.detail.contains("unexpectedly permitted"));
}

/// シナリオ3: 403以外の拒否コードは「誤った拒否コード」失敗
#[tokio::test]
async fn test_wrong_rejection_code_is_failure() {
    let mock = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&mock)
        .await;

    let client = Client::new();
    let outcome = check_write_rejected(&client, &mock.uri(), Method::PUT).await;

    assert_eq!(outcome.status, CheckStatus::Fail);
    assert!(outcome.detail.contains("expected HTTP 403"));
    assert!(outcome.detail.contains("405"));
}

/// シナリオ4: トランスポート障害はアサーション失敗と区別される
#[tokio::test]
async fn test_write_transport_failure_reports_error() {
    let client = Client::new();
    let outcome = check_write_rejected(&client, "http://127.0.0.1:59999", Method::PUT).await;

    assert_eq!(outcome.status, CheckStatus::Error);
    assert!(outcome.detail.contains("transport failure"));
}
