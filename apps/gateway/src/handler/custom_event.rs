//! カスタムイベントリソースのトランスレータ
//!
//! `/timeline/custom-event` 配下。作成と一覧は ID スコープ:
//! 所有者はボディやクエリの値ではなく、検証済みの
//! [`CallerIdentity`] から取る。他人名義のイベントを作らせない。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    CustomEventsCreateReq, CustomEventsGetAllReq, CustomEventsUpdateReq,
};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::auth::CallerIdentity;
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /timeline/custom-event`
///
/// ボディに `user_id` が入っていても無条件に上書きする。
pub async fn create(
    State(clients): State<BackendClients>,
    identity: CallerIdentity,
    payload: Result<Json<CustomEventsCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(mut req)) = payload else {
        return invalid_payload_response();
    };
    req.user_id = identity.user_id;

    match clients.custom_events.create(req).await {
        Ok(()) => message_ok("Event created"),
        Err(e) => backend_error_response("Couldn't create event", &e),
    }
}

/// `GET /timeline/custom-event/{id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.custom_events.get_by_id(ById { id }).await {
        Ok(event) => json_ok(event),
        Err(e) => backend_error_response("Couldn't get event", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
}

/// `GET /timeline/custom-event/all`
///
/// スコープは呼び出し元 ID。クエリで `user_id` を渡しても無視する。
pub async fn list(
    State(clients): State<BackendClients>,
    identity: CallerIdentity,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = CustomEventsGetAllReq {
        user_id: identity.user_id,
        filter: Some(filter),
    };

    match clients.custom_events.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get events", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

/// `PUT /timeline/custom-event/{id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = CustomEventsUpdateReq {
        id: query.id.unwrap_or_default(),
        title: query.title.unwrap_or_default(),
        description: query.description.unwrap_or_default(),
    };

    match clients.custom_events.update(req).await {
        Ok(()) => message_ok("Event updated"),
        Err(e) => backend_error_response("Couldn't update event", &e),
    }
}

/// `DELETE /timeline/custom-event/{id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.custom_events.delete(ById { id }).await {
        Ok(()) => message_ok("Event deleted"),
        Err(e) => backend_error_response("Couldn't delete event", &e),
    }
}
