//! バックエンド呼び出しのエラー型

use thiserror::Error;

/// バックエンド RPC のエラー
///
/// トランスポート未到達（[`Unavailable`](BackendError::Unavailable)）と
/// 呼び出し自体の失敗（[`Call`](BackendError::Call)）を区別するが、
/// HTTP へのマッピングはどちらも 500 で共通。区別はログでのみ使う。
#[derive(Debug, Error)]
pub enum BackendError {
    /// コネクションが使用できない（接続断・タイムアウト等）
    #[error("バックエンドに到達できません: {0}")]
    Unavailable(String),

    /// RPC が失敗ステータスを返した
    #[error("RPC 呼び出しが失敗しました: {0}")]
    Call(String),
}

impl BackendError {
    /// ログ出力用の失敗種別
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::Call(_) => "call",
        }
    }

    /// エラーレスポンスの `details` フィールドに載せる文字列
    pub fn details(&self) -> String {
        match self {
            Self::Unavailable(msg) | Self::Call(msg) => msg.clone(),
        }
    }
}

impl From<tonic::Status> for BackendError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            tonic::Code::Unavailable => Self::Unavailable(message),
            _ => Self::Call(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unavailableステータスはunavailableに変換される() {
        let status = tonic::Status::unavailable("connection refused");

        let err = BackendError::from(status);

        assert_eq!(err.kind(), "unavailable");
        assert_eq!(err.details(), "connection refused");
    }

    #[test]
    fn test_その他のステータスはcallに変換される() {
        let status = tonic::Status::internal("record not found");

        let err = BackendError::from(status);

        assert_eq!(err.kind(), "call");
        assert_eq!(err.details(), "record not found");
    }
}
