//! # エラーレスポンス
//!
//! ゲートウェイの全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `error` はクライアントが分岐に使う固定文言（バックエンドの生エラーを入れない）
//! - `details` はバックエンドから返った生のエラーメッセージ（存在する場合のみ出力）
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "error": "Couldn't update comment",
///   "details": "rpc error: comment not found"
/// }
/// ```
///
/// `details` が `None` の場合はフィールドごと省略される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// 固定文言のみのエラーレスポンスを作成する
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// バックエンド由来の詳細付きエラーレスポンスを作成する
    ///
    /// `error` には動詞・リソースごとの固定文言を渡すこと。
    /// バックエンドの生メッセージは必ず `details` 側に入れる。
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_detailsなしはフィールドが省略される() {
        let response = ErrorResponse::new("Invalid request payload");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"error": "Invalid request payload"}));
    }

    #[test]
    fn test_detailsありは両フィールドが出力される() {
        let response = ErrorResponse::with_details("Couldn't get memory", "connection refused");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "error": "Couldn't get memory",
                "details": "connection refused",
            })
        );
    }

    #[test]
    fn test_details省略のjsonをデシリアライズできる() {
        let response: ErrorResponse =
            serde_json::from_str(r#"{"error": "Unauthorized"}"#).unwrap();

        assert_eq!(response, ErrorResponse::new("Unauthorized"));
    }
}
