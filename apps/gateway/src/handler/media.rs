//! メディアリソースのトランスレータ
//!
//! `/memory/{id}/media` 配下。スコープはクエリ・ボディの `memory_id`。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::memory::{MediasCreateReq, MediasGetAllReq, MediasUpdateReq};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /memory/{id}/media`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<MediasCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.medias.create(req).await {
        Ok(()) => message_ok("Media created"),
        Err(e) => backend_error_response("Couldn't create media", &e),
    }
}

/// `GET /memory/{id}/media/{media_id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path((_, media_id)): Path<(String, String)>,
) -> Response {
    match clients.medias.get_by_id(ById { id: media_id }).await {
        Ok(media) => json_ok(media),
        Err(e) => backend_error_response("Couldn't get media", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    memory_id: Option<String>,
    page: Option<String>,
}

/// `GET /memory/{id}/media/all`
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = MediasGetAllReq {
        memory_id: query.memory_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.medias.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get medias", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    url: Option<String>,
    media_type: Option<String>,
}

/// `PUT /memory/{id}/media/{media_id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = MediasUpdateReq {
        id: query.id.unwrap_or_default(),
        url: query.url.unwrap_or_default(),
        media_type: query.media_type.unwrap_or_default(),
    };

    match clients.medias.update(req).await {
        Ok(()) => message_ok("Media updated"),
        Err(e) => backend_error_response("Couldn't update media", &e),
    }
}

/// `DELETE /memory/{id}/media/{media_id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path((_, media_id)): Path<(String, String)>,
) -> Response {
    match clients.medias.delete(ById { id: media_id }).await {
        Ok(()) => message_ok("Media deleted"),
        Err(e) => backend_error_response("Couldn't delete media", &e),
    }
}
