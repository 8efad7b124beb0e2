//! メモリーリソースのトランスレータ

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::memory::{MemoriesCreateReq, MemoriesGetAllReq, MemoriesUpdateReq};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /memory`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<MemoriesCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.memories.create(req).await {
        Ok(()) => message_ok("Memory created"),
        Err(e) => backend_error_response("Couldn't create memory", &e),
    }
}

/// `GET /memory/{id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.memories.get_by_id(ById { id }).await {
        Ok(memory) => json_ok(memory),
        Err(e) => backend_error_response("Couldn't get memory", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    user_id: Option<String>,
    page: Option<String>,
}

/// `GET /memory/all`
///
/// スコープはクエリの `user_id`。
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = MemoriesGetAllReq {
        user_id: query.user_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.memories.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get memories", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

/// `PUT /memory/{id}`
///
/// 更新フィールドはクエリパラメータのみから組み立てる（id を含む）。
/// ボディは見ない。未指定のパラメータは空文字として送る。
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = MemoriesUpdateReq {
        id: query.id.unwrap_or_default(),
        title: query.title.unwrap_or_default(),
        description: query.description.unwrap_or_default(),
    };

    match clients.memories.update(req).await {
        Ok(()) => message_ok("Memory updated"),
        Err(e) => backend_error_response("Couldn't update memory", &e),
    }
}

/// `DELETE /memory/{id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path(id): Path<String>,
) -> Response {
    match clients.memories.delete(ById { id }).await {
        Ok(()) => message_ok("Memory deleted"),
        Err(e) => backend_error_response("Couldn't delete memory", &e),
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
        routing::{get, post},
    };
    use keepsake_proto::memory::{MemoriesGetAllRes, Memory};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::client::{BackendError, MemoryClient};
    use crate::handler::testing::{body_string, clients};

    /// 受け取ったリクエストを記録するスタブ
    #[derive(Default)]
    struct RecordingMemoryClient {
        fail_with: Option<String>,
        created: Mutex<Option<MemoriesCreateReq>>,
        fetched: Mutex<Option<ById>>,
        listed: Mutex<Option<MemoriesGetAllReq>>,
        updated: Mutex<Option<MemoriesUpdateReq>>,
        deleted: Mutex<Option<ById>>,
    }

    impl RecordingMemoryClient {
        fn result(&self) -> Result<(), BackendError> {
            match &self.fail_with {
                Some(msg) => Err(BackendError::Call(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl MemoryClient for RecordingMemoryClient {
        async fn create(&self, req: MemoriesCreateReq) -> Result<(), BackendError> {
            *self.created.lock().unwrap() = Some(req);
            self.result()
        }

        async fn get_by_id(&self, req: ById) -> Result<Memory, BackendError> {
            *self.fetched.lock().unwrap() = Some(req.clone());
            self.result().map(|_| Memory {
                id: req.id,
                title: "夏休み".to_string(),
                ..Memory::default()
            })
        }

        async fn get_all(&self, req: MemoriesGetAllReq) -> Result<MemoriesGetAllRes, BackendError> {
            *self.listed.lock().unwrap() = Some(req);
            self.result().map(|_| MemoriesGetAllRes {
                memories: vec![],
                page: 0,
                total: 0,
            })
        }

        async fn update(&self, req: MemoriesUpdateReq) -> Result<(), BackendError> {
            *self.updated.lock().unwrap() = Some(req);
            self.result()
        }

        async fn delete(&self, req: ById) -> Result<(), BackendError> {
            *self.deleted.lock().unwrap() = Some(req);
            self.result()
        }
    }

    fn create_test_app(stub: Arc<RecordingMemoryClient>) -> Router {
        let mut clients = clients();
        clients.memories = stub;

        Router::new()
            .route("/memory", post(create))
            .route("/memory/all", get(list))
            .route(
                "/memory/{id}",
                get(get_by_id).put(update).delete(delete),
            )
            .with_state(clients)
    }

    #[tokio::test]
    async fn test_作成成功で200と固定メッセージを返す() {
        // Given
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/memory")
            .header("Content-Type", "application/json")
            .body(Body::from(
                r#"{"user_id":"u1","title":"夏休み","date":"2024-08-01"}"#,
            ))
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"message":"Memory created"}"#);

        let created = stub.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.user_id, "u1");
        assert_eq!(created.title, "夏休み");
    }

    #[tokio::test]
    async fn test_不正なボディは400でrpcは発行されない() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/memory")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Invalid request payload"}"#
        );
        assert!(stub.created.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_id指定取得はエンティティをそのまま返す() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/m1")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], "m1");
        assert_eq!(body["title"], "夏休み");
        assert_eq!(stub.fetched.lock().unwrap().clone().unwrap().id, "m1");
    }

    #[tokio::test]
    async fn test_一覧はuser_idとpageをrpcに引き渡す() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/all?user_id=u1&page=2")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let listed = stub.listed.lock().unwrap().clone().unwrap();
        assert_eq!(listed.user_id, "u1");
        assert_eq!(listed.filter.unwrap().page, 2);
    }

    #[tokio::test]
    async fn test_一覧のpage未指定は0ページと同じrpcになる() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/all?user_id=u1")
            .body(Body::empty())
            .unwrap();

        sut.oneshot(request).await.unwrap();

        let listed = stub.listed.lock().unwrap().clone().unwrap();
        assert_eq!(listed.filter.unwrap().page, 0);
    }

    #[tokio::test]
    async fn test_一覧の非数値pageは400でrpcは発行されない() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/all?page=abc")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Invalid page parameter"}"#
        );
        assert!(stub.listed.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_更新はクエリパラメータのみから組み立てる() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/memory/ignored?id=m1&title=new")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"title":"from-body"}"#))
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"message":"Memory updated"}"#);

        let updated = stub.updated.lock().unwrap().clone().unwrap();
        assert_eq!(updated.id, "m1");
        assert_eq!(updated.title, "new");
        // 未指定のパラメータは空文字で送る
        assert_eq!(updated.description, "");
    }

    #[tokio::test]
    async fn test_削除成功で200と固定メッセージを返す() {
        let stub = Arc::new(RecordingMemoryClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/memory/m1")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"message":"Memory deleted"}"#);
        assert_eq!(stub.deleted.lock().unwrap().clone().unwrap().id, "m1");
    }

    #[tokio::test]
    async fn test_rpc失敗は500と固定エラーとdetailsを返す() {
        let stub = Arc::new(RecordingMemoryClient {
            fail_with: Some("record not found".to_string()),
            ..RecordingMemoryClient::default()
        });
        let sut = create_test_app(stub);
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/m1")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Couldn't get memory","details":"record not found"}"#
        );
    }
}
