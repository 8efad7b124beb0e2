//! 共有メモリーリソースのトランスレータ
//!
//! `/memory/{id}/shared` 配下。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::memory::{
    SharedMemoriesCreateReq, SharedMemoriesGetAllReq, SharedMemoriesUpdateReq,
};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /memory/{id}/shared`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<SharedMemoriesCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.shared_memories.create(req).await {
        Ok(()) => message_ok("Shared memory created"),
        Err(e) => backend_error_response("Couldn't create shared memory", &e),
    }
}

/// `GET /memory/{id}/shared/{share_id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path((_, share_id)): Path<(String, String)>,
) -> Response {
    match clients.shared_memories.get_by_id(ById { id: share_id }).await {
        Ok(shared) => json_ok(shared),
        Err(e) => backend_error_response("Couldn't get shared memory", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    memory_id: Option<String>,
    page: Option<String>,
}

/// `GET /memory/{id}/shared/all`
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = SharedMemoriesGetAllReq {
        memory_id: query.memory_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.shared_memories.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get shared memories", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    message: Option<String>,
}

/// `PUT /memory/{id}/shared/{share_id}`
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = SharedMemoriesUpdateReq {
        id: query.id.unwrap_or_default(),
        message: query.message.unwrap_or_default(),
    };

    match clients.shared_memories.update(req).await {
        Ok(()) => message_ok("Shared memory updated"),
        Err(e) => backend_error_response("Couldn't update shared memory", &e),
    }
}

/// `DELETE /memory/{id}/shared/{share_id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path((_, share_id)): Path<(String, String)>,
) -> Response {
    match clients.shared_memories.delete(ById { id: share_id }).await {
        Ok(()) => message_ok("Shared memory deleted"),
        Err(e) => backend_error_response("Couldn't delete shared memory", &e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::post,
    };
    use keepsake_proto::memory::{SharedMemoriesGetAllRes, SharedMemory};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::client::{BackendError, SharedMemoryClient};
    use crate::handler::testing::{body_string, clients};

    #[derive(Default)]
    struct RecordingSharedMemoryClient {
        created: Mutex<Option<SharedMemoriesCreateReq>>,
    }

    #[async_trait]
    impl SharedMemoryClient for RecordingSharedMemoryClient {
        async fn create(&self, req: SharedMemoriesCreateReq) -> Result<(), BackendError> {
            *self.created.lock().unwrap() = Some(req);
            Ok(())
        }

        async fn get_by_id(&self, req: ById) -> Result<SharedMemory, BackendError> {
            Ok(SharedMemory {
                id: req.id,
                ..SharedMemory::default()
            })
        }

        async fn get_all(
            &self,
            _: SharedMemoriesGetAllReq,
        ) -> Result<SharedMemoriesGetAllRes, BackendError> {
            Ok(SharedMemoriesGetAllRes::default())
        }

        async fn update(&self, _: SharedMemoriesUpdateReq) -> Result<(), BackendError> {
            Ok(())
        }

        async fn delete(&self, _: ById) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_作成はボディの共有先とメッセージをrpcに渡す() {
        let stub = Arc::new(RecordingSharedMemoryClient::default());
        let mut test_clients = clients();
        test_clients.shared_memories = stub.clone();
        let sut = Router::new()
            .route("/memory/{id}/shared", post(create))
            .with_state(test_clients);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/memory/m1/shared")
            .header("Content-Type", "application/json")
            .body(Body::from(
                r#"{"memory_id":"m1","shared_with":"u2","message":"見て"}"#,
            ))
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Shared memory created"}"#
        );

        let created = stub.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.shared_with, "u2");
        assert_eq!(created.message, "見て");
    }
}
