//! メモリーリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::memory::{
    MemoriesCreateReq, MemoriesGetAllReq, MemoriesGetAllRes, MemoriesServiceClient,
    MemoriesUpdateReq, Memory,
};
use tonic::transport::Channel;

use super::BackendError;

/// メモリーリソースの RPC クライアント
///
/// テストではスタブ実装に差し替える。
#[async_trait]
pub trait MemoryClient: Send + Sync {
    async fn create(&self, req: MemoriesCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<Memory, BackendError>;
    async fn get_all(&self, req: MemoriesGetAllReq) -> Result<MemoriesGetAllRes, BackendError>;
    async fn update(&self, req: MemoriesUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// memory ホストの MemoriesService を呼ぶ実装
pub struct GrpcMemoryClient {
    inner: MemoriesServiceClient,
}

impl GrpcMemoryClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: MemoriesServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl MemoryClient for GrpcMemoryClient {
    async fn create(&self, req: MemoriesCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<Memory, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(&self, req: MemoriesGetAllReq) -> Result<MemoriesGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: MemoriesUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
