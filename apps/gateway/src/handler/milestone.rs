//! マイルストーンリソースのトランスレータ
//!
//! `/timeline/milestone` 配下。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{MilestonesCreateReq, MilestonesGetAllReq, MilestonesUpdateReq};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /timeline/milestone`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<MilestonesCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.milestones.create(req).await {
        Ok(()) => message_ok("Milestone created"),
        Err(e) => backend_error_response("Couldn't create milestone", &e),
    }
}

/// `GET /timeline/milestone/{id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.milestones.get_by_id(ById { id }).await {
        Ok(milestone) => json_ok(milestone),
        Err(e) => backend_error_response("Couldn't get milestone", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    user_id: Option<String>,
    page: Option<String>,
}

/// `GET /timeline/milestone/all`
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = MilestonesGetAllReq {
        user_id: query.user_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.milestones.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get milestones", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    title: Option<String>,
    date: Option<String>,
}

/// `PUT /timeline/milestone/{id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = MilestonesUpdateReq {
        id: query.id.unwrap_or_default(),
        title: query.title.unwrap_or_default(),
        date: query.date.unwrap_or_default(),
    };

    match clients.milestones.update(req).await {
        Ok(()) => message_ok("Milestone updated"),
        Err(e) => backend_error_response("Couldn't update milestone", &e),
    }
}

/// `DELETE /timeline/milestone/{id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.milestones.delete(ById { id }).await {
        Ok(()) => message_ok("Milestone deleted"),
        Err(e) => backend_error_response("Couldn't delete milestone", &e),
    }
}
