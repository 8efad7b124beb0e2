//! 共有メモリーリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::memory::{
    SharedMemoriesCreateReq, SharedMemoriesGetAllReq, SharedMemoriesGetAllRes,
    SharedMemoriesServiceClient, SharedMemoriesUpdateReq, SharedMemory,
};
use tonic::transport::Channel;

use super::BackendError;

/// 共有メモリーリソースの RPC クライアント
#[async_trait]
pub trait SharedMemoryClient: Send + Sync {
    async fn create(&self, req: SharedMemoriesCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<SharedMemory, BackendError>;
    async fn get_all(
        &self,
        req: SharedMemoriesGetAllReq,
    ) -> Result<SharedMemoriesGetAllRes, BackendError>;
    async fn update(&self, req: SharedMemoriesUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// memory ホストの SharedMemoriesService を呼ぶ実装
pub struct GrpcSharedMemoryClient {
    inner: SharedMemoriesServiceClient,
}

impl GrpcSharedMemoryClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: SharedMemoriesServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl SharedMemoryClient for GrpcSharedMemoryClient {
    async fn create(&self, req: SharedMemoriesCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<SharedMemory, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(
        &self,
        req: SharedMemoriesGetAllReq,
    ) -> Result<SharedMemoriesGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: SharedMemoriesUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
