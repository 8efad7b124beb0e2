//! # 認証
//!
//! ベアラートークンの検証（[`verifier`]）と、保護ルートに適用する
//! ミドルウェア（[`middleware`]）を提供する。
//!
//! 検証に成功すると [`CallerIdentity`] がリクエスト拡張に格納され、
//! ハンドラは extractor 経由で型安全に読み出せる。動的なクレームマップを
//! 引き回さないため、誤用はコンパイルエラーになる。

pub mod middleware;
pub mod verifier;

use axum::{extract::FromRequestParts, http::request::Parts, response::Response};

pub use middleware::{AuthState, require_auth};
pub use verifier::{AuthError, TokenVerifier};

use crate::error::unauthorized_response;

/// 検証済みの呼び出し元 ID
///
/// リクエストごとに認証ミドルウェアが 1 回だけ生成し、リクエスト拡張に
/// 格納する。ID スコープの書き込み（例: カスタムイベント作成）では、
/// ボディで渡された値ではなく必ずこの値を使うこと。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Response;

    /// リクエスト拡張から検証済み ID を取り出す
    ///
    /// 認証ミドルウェアを通っていないルートでこの extractor を使うと
    /// 401 になる（本来はルート定義の誤りであり、到達しない想定）。
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or_else(unauthorized_response)
    }
}
