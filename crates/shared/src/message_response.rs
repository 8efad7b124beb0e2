//! # 確認メッセージレスポンス
//!
//! 書き込み系エンドポイント（create / update / delete）が成功時に返す
//! 固定メッセージのレスポンス型。エンティティ本体はエコーしない。

use serde::{Deserialize, Serialize};

/// 確認メッセージレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "message": "Comment created"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 固定メッセージのレスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
