//! マイルストーンリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::timeline::{
    Milestone, MilestonesCreateReq, MilestonesGetAllReq, MilestonesGetAllRes,
    MilestonesServiceClient, MilestonesUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// マイルストーンリソースの RPC クライアント
#[async_trait]
pub trait MilestoneClient: Send + Sync {
    async fn create(&self, req: MilestonesCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<Milestone, BackendError>;
    async fn get_all(&self, req: MilestonesGetAllReq)
    -> Result<MilestonesGetAllRes, BackendError>;
    async fn update(&self, req: MilestonesUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// timeline ホストの MilestonesService を呼ぶ実装
pub struct GrpcMilestoneClient {
    inner: MilestonesServiceClient,
}

impl GrpcMilestoneClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: MilestonesServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl MilestoneClient for GrpcMilestoneClient {
    async fn create(&self, req: MilestonesCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<Milestone, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(
        &self,
        req: MilestonesGetAllReq,
    ) -> Result<MilestonesGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: MilestonesUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
