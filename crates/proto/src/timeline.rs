//! timeline ホストのサービス（CustomEvents / Milestones / HistoricalEvents /
//! PersonalEvents）

use serde::{Deserialize, Serialize};
use tonic::codegen::http;
use tonic::transport::Channel;

use crate::common::{ByDate, ById, Filter, Void};

// ===== CustomEvents =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEvent {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub date: String,
    #[prost(string, tag = "6")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEventsCreateReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub date: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEventsGetAllReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEventsGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub events: Vec<CustomEvent>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEventsUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

/// CustomEventsService のユナリクライアント
#[derive(Debug, Clone)]
pub struct CustomEventsServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl CustomEventsServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: CustomEventsCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.CustomEventsService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<CustomEvent>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.CustomEventsService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: CustomEventsGetAllReq,
    ) -> Result<tonic::Response<CustomEventsGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.CustomEventsService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: CustomEventsUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.CustomEventsService/Update");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn delete(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.CustomEventsService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== Milestones =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub date: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonesCreateReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub date: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonesGetAllReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonesGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub milestones: Vec<Milestone>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonesUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub date: String,
}

/// MilestonesService のユナリクライアント
#[derive(Debug, Clone)]
pub struct MilestonesServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl MilestonesServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: MilestonesCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.MilestonesService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Milestone>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.MilestonesService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: MilestonesGetAllReq,
    ) -> Result<tonic::Response<MilestonesGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.MilestonesService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: MilestonesUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.MilestonesService/Update");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn delete(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.MilestonesService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== HistoricalEvents =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEvent {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub date: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEventsCreateReq {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(string, tag = "3")]
    pub date: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEventsGetAllReq {
    #[prost(message, optional, tag = "1")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEventsGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub events: Vec<HistoricalEvent>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEventsUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

/// timeline context レスポンス（その日付に記録された歴史イベント）
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalEventsGetByDateRes {
    #[prost(string, tag = "1")]
    pub date: String,
    #[prost(message, repeated, tag = "2")]
    pub events: Vec<HistoricalEvent>,
}

/// HistoricalEventsService のユナリクライアント
#[derive(Debug, Clone)]
pub struct HistoricalEventsServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl HistoricalEventsServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: HistoricalEventsCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.HistoricalEventsService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<HistoricalEvent>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/timeline.HistoricalEventsService/GetById",
        );
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: HistoricalEventsGetAllReq,
    ) -> Result<tonic::Response<HistoricalEventsGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.HistoricalEventsService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_date(
        &mut self,
        request: ByDate,
    ) -> Result<tonic::Response<HistoricalEventsGetByDateRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static(
            "/timeline.HistoricalEventsService/GetByDate",
        );
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: HistoricalEventsUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.HistoricalEventsService/Update");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn delete(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.HistoricalEventsService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== PersonalEvents =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalEvent {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub date: String,
    #[prost(string, tag = "6")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalEventsCreateReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub date: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalEventsGetAllReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalEventsGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub events: Vec<PersonalEvent>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalEventsUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

/// PersonalEventsService のユナリクライアント
#[derive(Debug, Clone)]
pub struct PersonalEventsServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl PersonalEventsServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: PersonalEventsCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.PersonalEventsService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<PersonalEvent>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.PersonalEventsService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: PersonalEventsGetAllReq,
    ) -> Result<tonic::Response<PersonalEventsGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.PersonalEventsService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: PersonalEventsUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.PersonalEventsService/Update");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn delete(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/timeline.PersonalEventsService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}
