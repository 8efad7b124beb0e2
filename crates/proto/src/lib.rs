//! # Keepsake バックエンド RPC コントラクト
//!
//! memory / timeline 両バックエンドホストが公開する gRPC サービスの
//! メッセージ型とユナリクライアントを提供する。
//!
//! ## 設計方針
//!
//! - メッセージスキーマはバックエンド側が所有する固定コントラクト。
//!   ゲートウェイは解釈せず、そのまま JSON に変換して返す（全メッセージに
//!   serde derive を付与しているのはこのパススルーのため）
//! - クライアントは `tonic::transport::Channel` 上のユナリ呼び出しのみ。
//!   ストリーミングは存在しない
//! - コード生成はビルド時に行わず、生成相当のコードをこのクレートに
//!   コミットする（protoc 不要でビルドできる）
//! - リトライやタイムアウトはここでは扱わない。タイムアウトは Channel の
//!   Endpoint 設定、リトライ方針はトランスポート層の責務

pub mod common;
pub mod memory;
pub mod timeline;
