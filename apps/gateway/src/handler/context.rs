//! コンテキスト読み取りのトランスレータ
//!
//! `GET /timeline/context/{date}` の 1 ルートのみ。指定日に記録された
//! 歴史イベントを返す。

use axum::{
    extract::{Path, State},
    response::Response,
};
use keepsake_proto::common::ByDate;

use super::json_ok;
use crate::client::BackendClients;
use crate::error::backend_error_response;

/// `GET /timeline/context/{date}`
pub async fn get_by_date(
    State(clients): State<BackendClients>,
    Path(date): Path<String>,
) -> Response {
    match clients.historical_events.get_by_date(ByDate { date }).await {
        Ok(res) => json_ok(res),
        Err(e) => backend_error_response("Couldn't get context", &e),
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
        routing::get,
    };
    use keepsake_proto::common::ById;
    use keepsake_proto::timeline::{
        HistoricalEvent, HistoricalEventsCreateReq, HistoricalEventsGetAllReq,
        HistoricalEventsGetAllRes, HistoricalEventsGetByDateRes, HistoricalEventsUpdateReq,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::client::{BackendError, HistoricalEventClient};
    use crate::handler::testing::{body_string, clients};

    #[derive(Default)]
    struct RecordingContextClient {
        fail_with: Option<String>,
        requested: Mutex<Option<ByDate>>,
    }

    #[async_trait]
    impl HistoricalEventClient for RecordingContextClient {
        async fn create(&self, _: HistoricalEventsCreateReq) -> Result<(), BackendError> {
            panic!("unexpected RPC call")
        }

        async fn get_by_id(&self, _: ById) -> Result<HistoricalEvent, BackendError> {
            panic!("unexpected RPC call")
        }

        async fn get_all(
            &self,
            _: HistoricalEventsGetAllReq,
        ) -> Result<HistoricalEventsGetAllRes, BackendError> {
            panic!("unexpected RPC call")
        }

        async fn get_by_date(
            &self,
            req: ByDate,
        ) -> Result<HistoricalEventsGetByDateRes, BackendError> {
            *self.requested.lock().unwrap() = Some(req.clone());
            match &self.fail_with {
                Some(msg) => Err(BackendError::Call(msg.clone())),
                None => Ok(HistoricalEventsGetByDateRes {
                    date: req.date,
                    events: vec![HistoricalEvent {
                        id: "h1".to_string(),
                        title: "開通".to_string(),
                        ..HistoricalEvent::default()
                    }],
                }),
            }
        }

        async fn update(&self, _: HistoricalEventsUpdateReq) -> Result<(), BackendError> {
            panic!("unexpected RPC call")
        }

        async fn delete(&self, _: ById) -> Result<(), BackendError> {
            panic!("unexpected RPC call")
        }
    }

    fn create_test_app(stub: Arc<RecordingContextClient>) -> Router {
        let mut test_clients = clients();
        test_clients.historical_events = stub;

        Router::new()
            .route("/timeline/context/{date}", get(get_by_date))
            .with_state(test_clients)
    }

    #[tokio::test]
    async fn test_パスの日付でrpcを発行しレスポンスを素通しする() {
        // Given
        let stub = Arc::new(RecordingContextClient::default());
        let sut = create_test_app(stub.clone());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/timeline/context/2024-06-01")
            .body(Body::empty())
            .unwrap();

        // When
        let response = sut.oneshot(request).await.unwrap();

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["date"], "2024-06-01");
        assert_eq!(body["events"][0]["title"], "開通");
        assert_eq!(
            stub.requested.lock().unwrap().clone().unwrap().date,
            "2024-06-01"
        );
    }

    #[tokio::test]
    async fn test_rpc失敗は500と固定エラーを返す() {
        let stub = Arc::new(RecordingContextClient {
            fail_with: Some("backend down".to_string()),
            ..RecordingContextClient::default()
        });
        let sut = create_test_app(stub);
        let request = Request::builder()
            .method(Method::GET)
            .uri("/timeline/context/2024-06-01")
            .body(Body::empty())
            .unwrap();

        let response = sut.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Couldn't get context","details":"backend down"}"#
        );
    }
}
