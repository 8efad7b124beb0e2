//! パーソナルイベントリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    PersonalEvent, PersonalEventsCreateReq, PersonalEventsGetAllReq, PersonalEventsGetAllRes,
    PersonalEventsServiceClient, PersonalEventsUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// パーソナルイベントリソースの RPC クライアント
#[async_trait]
pub trait PersonalEventClient: Send + Sync {
    async fn create(&self, req: PersonalEventsCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<PersonalEvent, BackendError>;
    async fn get_all(
        &self,
        req: PersonalEventsGetAllReq,
    ) -> Result<PersonalEventsGetAllRes, BackendError>;
    async fn update(&self, req: PersonalEventsUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// timeline ホストの PersonalEventsService を呼ぶ実装
pub struct GrpcPersonalEventClient {
    inner: PersonalEventsServiceClient,
}

impl GrpcPersonalEventClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: PersonalEventsServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl PersonalEventClient for GrpcPersonalEventClient {
    async fn create(&self, req: PersonalEventsCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<PersonalEvent, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(
        &self,
        req: PersonalEventsGetAllReq,
    ) -> Result<PersonalEventsGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: PersonalEventsUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
