//! コメントリソースのバックエンドクライアント

use async_trait::async_trait;
use keepsake_proto::common::ById;
use keepsake_proto::memory::{
    Comment, CommentsCreateReq, CommentsGetAllReq, CommentsGetAllRes, CommentsServiceClient,
    CommentsUpdateReq,
};
use tonic::transport::Channel;

use super::BackendError;

/// コメントリソースの RPC クライアント
#[async_trait]
pub trait CommentClient: Send + Sync {
    async fn create(&self, req: CommentsCreateReq) -> Result<(), BackendError>;
    async fn get_by_id(&self, req: ById) -> Result<Comment, BackendError>;
    async fn get_all(&self, req: CommentsGetAllReq) -> Result<CommentsGetAllRes, BackendError>;
    async fn update(&self, req: CommentsUpdateReq) -> Result<(), BackendError>;
    async fn delete(&self, req: ById) -> Result<(), BackendError>;
}

/// memory ホストの CommentsService を呼ぶ実装
pub struct GrpcCommentClient {
    inner: CommentsServiceClient,
}

impl GrpcCommentClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: CommentsServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl CommentClient for GrpcCommentClient {
    async fn create(&self, req: CommentsCreateReq) -> Result<(), BackendError> {
        self.inner.clone().create(req).await?;
        Ok(())
    }

    async fn get_by_id(&self, req: ById) -> Result<Comment, BackendError> {
        Ok(self.inner.clone().get_by_id(req).await?.into_inner())
    }

    async fn get_all(&self, req: CommentsGetAllReq) -> Result<CommentsGetAllRes, BackendError> {
        Ok(self.inner.clone().get_all(req).await?.into_inner())
    }

    async fn update(&self, req: CommentsUpdateReq) -> Result<(), BackendError> {
        self.inner.clone().update(req).await?;
        Ok(())
    }

    async fn delete(&self, req: ById) -> Result<(), BackendError> {
        self.inner.clone().delete(req).await?;
        Ok(())
    }
}
