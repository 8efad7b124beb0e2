//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`service` はサービス名を示す。
///
/// ## 使用例
///
/// ```
/// use keepsake_shared::HealthResponse;
///
/// let response = HealthResponse::ok("gateway");
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"ok"`）
    pub status: String,
    /// サービス名
    pub service: String,
}

impl HealthResponse {
    /// 稼働中を示すレスポンスを作成する
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}
