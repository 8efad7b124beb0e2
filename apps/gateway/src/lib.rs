//! # Keepsake ゲートウェイライブラリ
//!
//! エッジゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `auth`: ベアラートークン検証と呼び出し元 ID の抽出
//! - `client`: バックエンド RPC クライアント（memory / timeline の 2 ホスト）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP エラーレスポンスのヘルパー
//! - `handler`: リソースごとのトランスレータ（REST ⇔ RPC 変換）
//! - `router`: 静的ルートテーブルの構築

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
