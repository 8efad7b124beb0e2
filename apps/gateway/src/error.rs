//! # エラーレスポンス
//!
//! ゲートウェイが返すエラーレスポンスのヘルパー。
//!
//! 対外的なエラーは意図的に粗い分類にとどめる:
//!
//! - 400: リクエスト自体の不備（ボディ・ページ番号）
//! - 401: 認証失敗（理由は区別しない）
//! - 500: バックエンド呼び出しの失敗（詳細は `details` に載せる）
//!
//! バックエンド側のエラー分類（未到達か、呼び出し失敗か）はログでのみ
//! 区別し、HTTP ステータスには反映しない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keepsake_shared::ErrorResponse;

use crate::client::BackendError;

/// 400 Bad Request（リクエストボディの不備）
pub fn invalid_payload_response() -> Response {
    error_response(StatusCode::BAD_REQUEST, "Invalid request payload", None)
}

/// 400 Bad Request（ページ番号の不備）
pub fn invalid_page_response() -> Response {
    error_response(StatusCode::BAD_REQUEST, "Invalid page parameter", None)
}

/// 401 Unauthorized
///
/// 認証失敗の理由によらず常にこのボディを返す。
pub fn unauthorized_response() -> Response {
    error_response(StatusCode::UNAUTHORIZED, "Unauthorized", None)
}

/// 500 Internal Server Error（バックエンド呼び出しの失敗）
///
/// `error` はリソース・操作ごとの固定メッセージ
/// （例: `Couldn't get memory`）。バックエンドからのメッセージは
/// `details` に載せる。
pub fn backend_error_response(error: &str, err: &BackendError) -> Response {
    tracing::error!(
        error.category = "backend",
        error.kind = err.kind(),
        "バックエンド呼び出しに失敗しました: {}",
        err
    );
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        error,
        Some(err.details()),
    )
}

fn error_response(status: StatusCode, error: &str, details: Option<String>) -> Response {
    let body = match details {
        Some(details) => ErrorResponse::with_details(error, details),
        None => ErrorResponse::new(error),
    };
    let mut response = Json(body).into_response();
    *response.status_mut() = status;
    response
}
