//! パーソナルイベントリソースのトランスレータ
//!
//! `/timeline/personal` 配下。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    PersonalEventsCreateReq, PersonalEventsGetAllReq, PersonalEventsUpdateReq,
};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /timeline/personal`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<PersonalEventsCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.personal_events.create(req).await {
        Ok(()) => message_ok("Personal event created"),
        Err(e) => backend_error_response("Couldn't create personal event", &e),
    }
}

/// `GET /timeline/personal/{id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.personal_events.get_by_id(ById { id }).await {
        Ok(event) => json_ok(event),
        Err(e) => backend_error_response("Couldn't get personal event", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    user_id: Option<String>,
    page: Option<String>,
}

/// `GET /timeline/personal/all`
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = PersonalEventsGetAllReq {
        user_id: query.user_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.personal_events.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get personal events", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

/// `PUT /timeline/personal/{id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = PersonalEventsUpdateReq {
        id: query.id.unwrap_or_default(),
        title: query.title.unwrap_or_default(),
        description: query.description.unwrap_or_default(),
    };

    match clients.personal_events.update(req).await {
        Ok(()) => message_ok("Personal event updated"),
        Err(e) => backend_error_response("Couldn't update personal event", &e),
    }
}

/// `DELETE /timeline/personal/{id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.personal_events.delete(ById { id }).await {
        Ok(()) => message_ok("Personal event deleted"),
        Err(e) => backend_error_response("Couldn't delete personal event", &e),
    }
}
