//! コメントリソースのトランスレータ
//!
//! `/memory/{id}/comment` 配下。パス先頭の `{id}` セグメントは位置を
//! 示すだけで、スコープはボディ・クエリの `memory_id` から取る。

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
};
use keepsake_proto::common::ById;
use keepsake_proto::memory::{CommentsCreateReq, CommentsGetAllReq, CommentsUpdateReq};
use serde::Deserialize;

use super::{json_ok, message_ok, page_filter};
use crate::client::BackendClients;
use crate::error::{backend_error_response, invalid_payload_response};

/// `POST /memory/{id}/comment`
pub async fn create(
    State(clients): State<BackendClients>,
    payload: Result<Json<CommentsCreateReq>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return invalid_payload_response();
    };

    match clients.comments.create(req).await {
        Ok(()) => message_ok("Comment created"),
        Err(e) => backend_error_response("Couldn't create comment", &e),
    }
}

/// `GET /memory/{id}/comment/{comment_id}`
pub async fn get_by_id(
    State(clients): State<BackendClients>,
    Path((_, comment_id)): Path<(String, String)>,
) -> Response {
    match clients.comments.get_by_id(ById { id: comment_id }).await {
        Ok(comment) => json_ok(comment),
        Err(e) => backend_error_response("Couldn't get comment", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    user_id: Option<String>,
    memory_id: Option<String>,
    page: Option<String>,
}

/// `GET /memory/{id}/comment/all`
///
/// スコープは呼び出し側が指定するクエリの `user_id` / `memory_id`。
/// （イベント系一覧の ID 由来スコープとは意図的に非対称。）
pub async fn list(
    State(clients): State<BackendClients>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match page_filter(query.page.as_deref()) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let req = CommentsGetAllReq {
        user_id: query.user_id.unwrap_or_default(),
        memory_id: query.memory_id.unwrap_or_default(),
        filter: Some(filter),
    };

    match clients.comments.get_all(req).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get comments", &e),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    id: Option<String>,
    content: Option<String>,
}

/// `PUT /memory/{id}/comment/{comment_id}`
///
/// 更新フィールドはクエリパラメータのみから組み立てる。
pub async fn update(
    State(clients): State<BackendClients>,
    Query(query): Query<UpdateQuery>,
) -> Response {
    let req = CommentsUpdateReq {
        id: query.id.unwrap_or_default(),
        content: query.content.unwrap_or_default(),
    };

    match clients.comments.update(req).await {
        Ok(()) => message_ok("Comment updated"),
        Err(e) => backend_error_response("Couldn't update comment", &e),
    }
}

/// `DELETE /memory/{id}/comment/{comment_id}`
pub async fn delete(
    State(clients): State<BackendClients>,
    Path((_, comment_id)): Path<(String, String)>,
) -> Response {
    match clients.comments.delete(ById { id: comment_id }).await {
        Ok(()) => message_ok("Comment deleted"),
        Err(e) => backend_error_response("Couldn't delete comment", &e),
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
    use keepsake_proto::memory::{Comment, CommentsGetAllRes};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::client::{BackendError, CommentClient};
    use crate::handler::testing::{body_string, clients};

    #[derive(Default)]
    struct RecordingCommentClient {
        fail_with: Option<String>,
        created: Mutex<Option<CommentsCreateReq>>,
        listed: Mutex<Option<CommentsGetAllReq>>,
        updated: Mutex<Option<CommentsUpdateReq>>,
        deleted: Mutex<Option<ById>>,
    }

    impl RecordingCommentClient {
        fn result(&self) -> Result<(), BackendError> {
            match &self.fail_with {
                Some(msg) => Err(BackendError::Call(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CommentClient for RecordingCommentClient {
        async fn create(&self, req: CommentsCreateReq) -> Result<(), BackendError> {
            *self.created.lock().unwrap() = Some(req);
            self.result()
        }

        async fn get_by_id(&self, req: ById) -> Result<Comment, BackendError> {
            self.result().map(|_| Comment {
                id: req.id,
                ..Comment::default()
            })
        }

        async fn get_all(&self, req: CommentsGetAllReq) -> Result<CommentsGetAllRes, BackendError> {
            *self.listed.lock().unwrap() = Some(req);
            self.result().map(|_| CommentsGetAllRes::default())
        }

        async fn update(&self, req: CommentsUpdateReq) -> Result<(), BackendError> {
            *self.updated.lock().unwrap() = Some(req);
            self.result()
        }

        async fn delete(&self, req: ById) -> Result<(), BackendError> {
            *self.deleted.lock().unwrap() = Some(req);
            self.result()
        }
    }

    fn create_test_app(stub: Arc<RecordingCommentClient>) -> Router {
        let mut clients = clients();
        clients.comments = stub;

        Router::new()
            .route("/memory/{id}/comment", post(create))
            .route("/memory/{id}/comment/all", get(list))
            .route(
                "/memory/{id}/comment/{comment_id}",
                get(get_by_id).put(update).delete(delete),
            )
            .with_state(clients)
    }

    #[tokio::test]
    async fn test_作成はボディのフィールドをそのままrpcに渡す() {
        // Given
        let stub = Arc::new(RecordingCommentClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/memory/m1/comment")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"content":"hi","memory_id":"m1"}"#))
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            r#"{"message":"Comment created"}"#
        );

        let created = stub.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.content, "hi");
        assert_eq!(created.memory_id, "m1");
    }

    #[tokio::test]
    async fn test_一覧はクエリのuser_idとmemory_idでスコープする() {
        let stub = Arc::new(RecordingCommentClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/memory/m1/comment/all?user_id=u1&memory_id=m1&page=1")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let listed = stub.listed.lock().unwrap().clone().unwrap();
        assert_eq!(listed.user_id, "u1");
        assert_eq!(listed.memory_id, "m1");
        assert_eq!(listed.filter.unwrap().page, 1);
    }

    #[tokio::test]
    async fn test_更新はクエリのidとcontentをrpcに渡す() {
        let stub = Arc::new(RecordingCommentClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/memory/m1/comment/ignored?id=c1&content=new")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated = stub.updated.lock().unwrap().clone().unwrap();
        assert_eq!(updated.id, "c1");
        assert_eq!(updated.content, "new");
    }

    #[tokio::test]
    async fn test_更新のrpc失敗は500と固定エラーを返す() {
        let stub = Arc::new(RecordingCommentClient {
            fail_with: Some("update failed".to_string()),
            ..RecordingCommentClient::default()
        });
        let sut = create_test_app(stub);
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/memory/m1/comment/c1?id=c1&content=new")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Couldn't update comment","details":"update failed"}"#
        );
    }

    #[tokio::test]
    async fn test_削除はパス末尾のidを使う() {
        let stub = Arc::new(RecordingCommentClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/memory/m1/comment/c9")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stub.deleted.lock().unwrap().clone().unwrap().id, "c9");
    }
}
