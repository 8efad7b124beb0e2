//! 歴史イベントリソースのバックエンドクライアント
//!
//! コンテキスト読み取り（日付指定の GetByDate）もこのサービスが提供する。

use async_trait::async_trait;
use keepsake_proto::common::{ByDate, ById};
use keepsake_proto::timeline::{
    HistoricalEvent, HistoricalEventsCreateReq, HistoricalEventsGetAllReq,
    HistoricalEventsGetAllRes, HistoricalEventsGetByDateRes, HistoricalEventsServiceClient,
    HistoricalEventsUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// 歴史イベントリソースの RPC クライアント
#[async_trait]
pub trait HistoricalEventClient: Send + Sync {
    async fn create(&self, req: HistoricalEventsCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<HistoricalEvent, BackendError>;
    async fn get_all(
        &self,
        req: HistoricalEventsGetAllReq,
    ) -> Result<HistoricalEventsGetAllRes, BackendError>;
    async fn get_by_date(
        &self,
        req: ByDate,
    ) -> Result<HistoricalEventsGetByDateRes, BackendError>;
    async fn update(&self, req: HistoricalEventsUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// timeline ホストの HistoricalEventsService を呼ぶ実装
pub struct GrpcHistoricalEventClient {
    inner: HistoricalEventsServiceClient,
}

impl GrpcHistoricalEventClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: HistoricalEventsServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl HistoricalEventClient for GrpcHistoricalEventClient {
    async fn create(&self, req: HistoricalEventsCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<HistoricalEvent, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(
        &self,
        req: HistoricalEventsGetAllReq,
    ) -> Result<HistoricalEventsGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn get_by_date(
        &self,
        req: ByDate,
    ) -> Result<HistoricalEventsGetByDateRes, BackendError> {
        Ok(self.inner.clone().get_by_date(req).await?.into_inner())
    }

    async fn update(&self, req: HistoricalEventsUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
