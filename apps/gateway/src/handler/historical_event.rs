//! 歴史イベントリソースのトランスレータ
//!
//! `/timeline/historical` 配下。全ユーザー共通のデータのため、
//! 一覧にスコープパラメータはない。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    HistoricalEventsCreateReq, HistoricalEventsGetAllReq, HistoricalEventsUpdateReq,
};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /timeline/historical`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<HistoricalEventsCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.historical_events.create(req).await {
        Ok(()) => message_ok("Historical event created"),
        Err(e) => backend_error_response("Couldn't create historical event", &e),
    }
}

/// `GET /timeline/historical/{id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.historical_events.get_by_id(ById { id }).await {
        Ok(event) => json_ok(event),
        Err(e) => backend_error_response("Couldn't get historical event", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
}

/// `GET /timeline/historical/all`
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = HistoricalEventsGetAllReq {
        filter: Some(filter),
    };

    match clients.historical_events.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get historical events", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

/// `PUT /timeline/historical/{id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = HistoricalEventsUpdateReq {
        id: query.id.unwrap_or_default(),
        title: query.title.unwrap_or_default(),
        description: query.description.unwrap_or_default(),
    };

    match clients.historical_events.update(req).await {
        Ok(()) => message_ok("Historical event updated"),
        Err(e) => backend_error_response("Couldn't update historical event", &e),
    }
}

/// `DELETE /timeline/historical/{id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.historical_events.delete(ById { id }).await {
        Ok(()) => message_ok("Historical event deleted"),
        Err(e) => backend_error_response("Couldn't delete historical event", &e),
    }
}
