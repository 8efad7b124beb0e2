//! メディアリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::memory::{
    Media, MediasCreateReq, MediasGetAllReq, MediasGetAllRes, MediasServiceClient, MediasUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// メディアリソースの RPC クライアント
#[async_trait]
pub trait MediaClient: Send + Sync {
    async fn create(&self, req: MediasCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<Media, BackendError>;
    async fn get_all(&self, req: MediasGetAllReq) -> Result<MediasGetAllRes, BackendError>;
    async fn update(&self, req: MediasUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// memory ホストの MediasService を呼ぶ実装
pub struct GrpcMediaClient {
    inner: MediasServiceClient,
}

impl GrpcMediaClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: MediasServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl MediaClient for GrpcMediaClient {
    async fn create(&self, req: MediasCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<Media, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(&self, req: MediasGetAllReq) -> Result<MediasGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: MediasUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
