//! # ハンドラ（リソーストランスレータ）
//!
//! リソースごとに 1 モジュール。各ハンドラは REST リクエストを
//! 対応する RPC リクエストに変換して 1 回だけ発行し、結果を HTTP に
//! マッピングする。
//!
//! ## フィールドの出どころ（ルートごとに固定）
//!
//! - create: JSON ボディ
//! - get-by-id / delete: パスパラメータの id
//! - list: クエリパラメータ（`page` + リソース固有のスコープ）
//! - update: クエリパラメータのみ（id を含む。ボディは見ない）
//!
//! ## エラーマッピング
//!
//! RPC 失敗は一律 500。バックエンドは not-found を区別できる
//! シグナルを公開していないため、ここで推測のマッピングはしない。

pub mod comment;
pub mod context;
pub mod custom_event;
pub mod health;
pub mod historical_event;
pub mod media;
pub mod memory;
pub mod milestone;
pub mod personal_event;
pub mod shared_memory;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use keepsake_proto::common::Filter;
use keepsake_shared::MessageResponse;
use serde::Serialize;

use crate::error::invalid_page_response;

/// 200 と固定の確認メッセージを返す
pub(crate) fn message_ok(message: &str) -> Response {
    Json(MessageResponse::new(message)).into_response()
}

/// 200 とバックエンドのレスポンスをそのまま返す
pub(crate) fn json_ok<T: Serialize>(payload: T) -> Response {
    Json(payload).into_response()
}

/// `page` クエリパラメータからページフィルタを組み立てる
///
/// 未指定・空文字は 0 ページ扱い。数値でない値と負数は 400。
/// 明示的な `page=0` と未指定は同じ RPC リクエストになる。
pub(crate) fn page_filter(raw: Option<&str>) -> Result<Filter, Response> {
    let page = match raw {
        None | Some("") => 0,
        Some(value) => match value.parse::<i32>() {
            Ok(page) if page >= 0 => page,
            _ => return Err(invalid_page_response()),
        },
    };
    Ok(Filter { page })
}
