//! memory ホストのサービス（Memories / Comments / Medias / SharedMemories）

use serde::{Deserialize, Serialize};
use tonic::codegen::http;
use tonic::transport::Channel;

use crate::common::{ById, Filter, Void};

// ===== Memories =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Memory {
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
    pub location: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesCreateReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(string, tag = "4")]
    pub date: String,
    #[prost(string, tag = "5")]
    pub location: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesGetAllReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub memories: Vec<Memory>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub description: String,
}

/// MemoriesService のユナリクライアント
#[derive(Debug, Clone)]
pub struct MemoriesServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl MemoriesServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: MemoriesCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MemoriesService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Memory>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MemoriesService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: MemoriesGetAllReq,
    ) -> Result<tonic::Response<MemoriesGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MemoriesService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: MemoriesUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MemoriesService/Update");
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
        let path = http::uri::PathAndQuery::from_static("/memory.MemoriesService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== Comments =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(string, tag = "3")]
    pub memory_id: String,
    #[prost(string, tag = "4")]
    pub content: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsCreateReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub memory_id: String,
    #[prost(string, tag = "3")]
    pub content: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsGetAllReq {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub memory_id: String,
    #[prost(message, optional, tag = "3")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub comments: Vec<Comment>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub content: String,
}

/// CommentsService のユナリクライアント
#[derive(Debug, Clone)]
pub struct CommentsServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl CommentsServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: CommentsCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.CommentsService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Comment>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.CommentsService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: CommentsGetAllReq,
    ) -> Result<tonic::Response<CommentsGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.CommentsService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: CommentsUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.CommentsService/Update");
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
        let path = http::uri::PathAndQuery::from_static("/memory.CommentsService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== Medias =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub memory_id: String,
    #[prost(string, tag = "3")]
    pub url: String,
    #[prost(string, tag = "4")]
    pub media_type: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MediasCreateReq {
    #[prost(string, tag = "1")]
    pub memory_id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub media_type: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MediasGetAllReq {
    #[prost(string, tag = "1")]
    pub memory_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MediasGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub medias: Vec<Media>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MediasUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub url: String,
    #[prost(string, tag = "3")]
    pub media_type: String,
}

/// MediasService のユナリクライアント
#[derive(Debug, Clone)]
pub struct MediasServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl MediasServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: MediasCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MediasService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<Media>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MediasService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: MediasGetAllReq,
    ) -> Result<tonic::Response<MediasGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MediasService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: MediasUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/memory.MediasService/Update");
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
        let path = http::uri::PathAndQuery::from_static("/memory.MediasService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

// ===== SharedMemories =====

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedMemory {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub memory_id: String,
    #[prost(string, tag = "3")]
    pub shared_with: String,
    #[prost(string, tag = "4")]
    pub message: String,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedMemoriesCreateReq {
    #[prost(string, tag = "1")]
    pub memory_id: String,
    #[prost(string, tag = "2")]
    pub shared_with: String,
    #[prost(string, tag = "3")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedMemoriesGetAllReq {
    #[prost(string, tag = "1")]
    pub memory_id: String,
    #[prost(message, optional, tag = "2")]
    pub filter: Option<Filter>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedMemoriesGetAllRes {
    #[prost(message, repeated, tag = "1")]
    pub shared_memories: Vec<SharedMemory>,
    #[prost(int32, tag = "2")]
    pub page: i32,
    #[prost(int32, tag = "3")]
    pub total: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedMemoriesUpdateReq {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

/// SharedMemoriesService のユナリクライアント
#[derive(Debug, Clone)]
pub struct SharedMemoriesServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl SharedMemoriesServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn create(
        &mut self,
        request: SharedMemoriesCreateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/memory.SharedMemoriesService/Create");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_by_id(
        &mut self,
        request: ById,
    ) -> Result<tonic::Response<SharedMemory>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/memory.SharedMemoriesService/GetById");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn get_all(
        &mut self,
        request: SharedMemoriesGetAllReq,
    ) -> Result<tonic::Response<SharedMemoriesGetAllRes>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/memory.SharedMemoriesService/GetAll");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }

    pub async fn update(
        &mut self,
        request: SharedMemoriesUpdateReq,
    ) -> Result<tonic::Response<Void>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("service is not ready: {e}"))
        })?;
        let codec = tonic::codec::ProstCodec::default();
        let path =
            http::uri::PathAndQuery::from_static("/memory.SharedMemoriesService/Update");
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
            http::uri::PathAndQuery::from_static("/memory.SharedMemoriesService/Delete");
        self.inner
            .unary(tonic::Request::new(request), path, codec)
            .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_create_reqはserde_defaultで部分的なjsonから組み立てられる() {
        let req: CommentsCreateReq =
            serde_json::from_str(r#"{"content": "hi", "memory_id": "m1"}"#).unwrap();

        assert_eq!(req.content, "hi");
        assert_eq!(req.memory_id, "m1");
        assert_eq!(req.user_id, "");
    }

    #[test]
    fn test_get_all_resはそのままjsonにシリアライズできる() {
        let res = CommentsGetAllRes {
            comments: vec![Comment {
                id: "c1".to_string(),
                user_id: "u1".to_string(),
                memory_id: "m1".to_string(),
                content: "hi".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
            }],
            page: 0,
            total: 1,
        };

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["comments"][0]["content"], "hi");
        assert_eq!(json["total"], 1);
    }
}
