//! # Keepsake 共有ユーティリティ
//!
//! ゲートウェイと周辺ツールで共通に使うレスポンス型と
//! observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存を入れない（`IntoResponse` 変換は各サービスの責務）
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod health;
pub mod message_response;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use message_response::MessageResponse;
