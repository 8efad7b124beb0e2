//! # 認証ミドルウェア
//!
//! 保護ルートに適用するベアラートークン検証。検証に成功すると
//! [`CallerIdentity`] をリクエスト拡張に格納してからハンドラへ進む。
//! 失敗した場合はハンドラを実行せず 401 を返す（RPC は発行されない）。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let auth_state = AuthState { verifier };
//!
//! Router::new()
//!     .route("/memory", post(memory_create))
//!     .layer(from_fn_with_state(auth_state, require_auth))
//! ```

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};

use super::{AuthError, CallerIdentity, TokenVerifier};
use crate::error::unauthorized_response;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<TokenVerifier>,
}

/// 認証ミドルウェア
///
/// `Authorization: Bearer <token>` を検証し、失敗はすべて同一の
/// 401 ボディで返す（失敗理由はログでのみ区別する）。
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let identity = match bearer_token(request.headers())
        .and_then(|token| state.verifier.verify(token))
    {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(
                error.category = "auth",
                error.kind = e.kind(),
                "認証に失敗しました: {}",
                e
            );
            return unauthorized_response();
        }
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Authorization ヘッダーからベアラートークンを取り出す
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingHeader)?;

    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme)
}
