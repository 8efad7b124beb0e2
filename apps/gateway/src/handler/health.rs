//! ヘルスチェック

use axum::Json;
use keepsake_shared::HealthResponse;

/// `GET /health`
///
/// 認証不要。プロセスが生きていることだけを返す（バックエンドの
/// 死活には踏み込まない）。
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok("gateway"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_ヘルスチェックはokを返す() {
        let Json(body) = health().await;

        assert_eq!(serde_json::to_value(&body).unwrap()["status"], "ok");
        assert_eq!(serde_json::to_value(&body).unwrap()["service"], "gateway");
    }
}
