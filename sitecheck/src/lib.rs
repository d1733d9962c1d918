//! sitecheck
//!
//! デプロイ済みHTTPエンドポイントをブラックボックスで検証するCLIツール

#![warn(missing_docs)]

/// エンドポイントチェック（読み取り系・書き込み系）
pub mod checks;

/// CLIインターフェース
pub mod cli;

/// 設定管理（URL解決・HTTPクライアント構築）
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// チェック結果レポート
pub mod report;
