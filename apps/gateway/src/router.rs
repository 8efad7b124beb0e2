//! # ルーター構築
//!
//! 静的ルートテーブルを起動時に 1 度だけ構築する。構築後は不変で、
//! ロックなしで並行参照できる。
//!
//! ルート解決は静的セグメント優先（`/memory/all` は `/memory/{id}` に
//! 吸われない）。一致なしは 404、メソッド不一致は 405。
//!
//! `/health` 以外のすべてのルートに認証ミドルウェアを適用する。
//! ディスパッチ以外の仕事はここでは行わない（バックエンド接続には
//! 触れない）。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use crate::auth::{AuthState, TokenVerifier, require_auth};
use crate::client::BackendClients;
use crate::handler::{
    comment, context, custom_event, health, historical_event, media, memory, milestone,
    personal_event, shared_memory,
};

/// ルートテーブルを構築する
///
/// ネストしたパスの `{id}` プレフィックスは位置を示すだけで、
/// 同一位置のパラメータ名は matchit の制約により統一している。
pub fn build_router(clients: BackendClients, verifier: Arc<TokenVerifier>) -> Router {
    let auth_state = AuthState { verifier };

    let protected = Router::new()
        // メモリー
        .route("/memory", post(memory::create))
        .route("/memory/all", get(memory::list))
        .route(
            "/memory/{id}",
            get(memory::get_by_id)
                .put(memory::update)
                .delete(memory::delete),
        )
        // コメント
        .route("/memory/{id}/comment", post(comment::create))
        .route("/memory/{id}/comment/all", get(comment::list))
        .route(
            "/memory/{id}/comment/{comment_id}",
            get(comment::get_by_id)
                .put(comment::update)
                .delete(comment::delete),
        )
        // メディア
        .route("/memory/{id}/media", post(media::create))
        .route("/memory/{id}/media/all", get(media::list))
        .route(
            "/memory/{id}/media/{media_id}",
            get(media::get_by_id)
                .put(media::update)
                .delete(media::delete),
        )
        // 共有メモリー
        .route("/memory/{id}/shared", post(shared_memory::create))
        .route("/memory/{id}/shared/all", get(shared_memory::list))
        .route(
            "/memory/{id}/shared/{share_id}",
            get(shared_memory::get_by_id)
                .put(shared_memory::update)
                .delete(shared_memory::delete),
        )
        // カスタムイベント
        .route("/timeline/custom-event", post(custom_event::create))
        .route("/timeline/custom-event/all", get(custom_event::list))
        .route(
            "/timeline/custom-event/{id}",
            get(custom_event::get_by_id)
                .put(custom_event::update)
                .delete(custom_event::delete),
        )
        // マイルストーン
        .route("/timeline/milestone", post(milestone::create))
        .route("/timeline/milestone/all", get(milestone::list))
        .route(
            "/timeline/milestone/{id}",
            get(milestone::get_by_id)
                .put(milestone::update)
                .delete(milestone::delete),
        )
        // 歴史イベント
        .route("/timeline/historical", post(historical_event::create))
        .route("/timeline/historical/all", get(historical_event::list))
        .route(
            "/timeline/historical/{id}",
            get(historical_event::get_by_id)
                .put(historical_event::update)
                .delete(historical_event::delete),
        )
        // パーソナルイベント
        .route("/timeline/personal", post(personal_event::create))
        .route("/timeline/personal/all", get(personal_event::list))
        .route(
            "/timeline/personal/{id}",
            get(personal_event::get_by_id)
                .put(personal_event::update)
                .delete(personal_event::delete),
        )
        // コンテキスト（日付指定の単一読み取り）
        .route("/timeline/context/{date}", get(context::get_by_date))
        .layer(from_fn_with_state(auth_state, require_auth))
        .with_state(clients);

    Router::new()
        .route("/health", get(health::health))
        .merge(protected)
}
