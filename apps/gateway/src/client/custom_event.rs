//! カスタムイベントリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    CustomEvent, CustomEventsCreateReq, CustomEventsGetAllReq, CustomEventsGetAllRes,
    CustomEventsServiceClient, CustomEventsUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// カスタムイベントリソースの RPC クライアント
#[async_trait]
pub trait CustomEventClient: Send + Sync {
    async fn create(&self, req: CustomEventsCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<CustomEvent, BackendError>;
    async fn get_all(
        &self,
        req: CustomEventsGetAllReq,
    ) -> Result<CustomEventsGetAllRes, BackendError>;
    async fn update(&self, req: CustomEventsUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// timeline ホストの CustomEventsService を呼ぶ実装
pub struct GrpcCustomEventClient {
    inner: CustomEventsServiceClient,
}

impl GrpcCustomEventClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: CustomEventsServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl CustomEventClient for GrpcCustomEventClient {
    async fn create(&self, req: CustomEventsCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<CustomEvent, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(
        &self,
        req: CustomEventsGetAllReq,
    ) -> Result<CustomEventsGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: CustomEventsUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
