//! # バックエンドクライアント
//!
//! バックエンドホストごとに 1 本のコネクションを張り、その上に
//! リソースグループごとの型付きクライアントを多重化する。
//!
//! - memory ホスト: memories / comments / medias / shared-memories
//! - timeline ホスト: custom-events / milestones / historical-events /
//!   personal-events
//!
//! 各クライアントはトレイトとして公開し、ハンドラのテストでは
//! スタブ実装に差し替えられるようにする。コネクションは HTTP/2 で
//! 多重化されるため、全リクエストで共有して問題ない。
//!
//! リトライはこの層では行わない。呼び出しごとの失敗は
//! [`BackendError`] としてハンドラに返す。

pub mod comment;
pub mod custom_event;
pub mod error;
pub mod historical_event;
pub mod media;
pub mod memory;
pub mod milestone;
pub mod personal_event;
pub mod shared_memory;

use std::sync::Arc;

use tonic::transport::{Channel, Endpoint};

pub use comment::{CommentClient, GrpcCommentClient};
pub use custom_event::{CustomEventClient, GrpcCustomEventClient};
pub use error::BackendError;
pub use historical_event::{GrpcHistoricalEventClient, HistoricalEventClient};
pub use media::{GrpcMediaClient, MediaClient};
pub use memory::{GrpcMemoryClient, MemoryClient};
pub use milestone::{GrpcMilestoneClient, MilestoneClient};
pub use personal_event::{GrpcPersonalEventClient, PersonalEventClient};
pub use shared_memory::{GrpcSharedMemoryClient, SharedMemoryClient};

use crate::config::GatewayConfig;

/// リソースグループごとの型付きクライアント一式
///
/// 起動時に 1 度だけ構築し、ルーターの状態として全ハンドラで共有する。
#[derive(Clone)]
pub struct BackendClients {
    pub memories: Arc<dyn MemoryClient>,
    pub comments: Arc<dyn CommentClient>,
    pub medias: Arc<dyn MediaClient>,
    pub shared_memories: Arc<dyn SharedMemoryClient>,
    pub custom_events: Arc<dyn CustomEventClient>,
    pub milestones: Arc<dyn MilestoneClient>,
    pub historical_events: Arc<dyn HistoricalEventClient>,
    pub personal_events: Arc<dyn PersonalEventClient>,
}

impl BackendClients {
    /// 2 つのバックエンドホストへ接続し、クライアント一式を構築する
    ///
    /// 起動時の接続失敗は呼び出し元（main）でプロセス終了にする。
    /// 縮退運転モードは持たない。
    pub async fn connect(config: &GatewayConfig) -> anyhow::Result<Self> {
        let memory_channel = connect_host(&config.memory_url, config.rpc_timeout).await?;
        let timeline_channel = connect_host(&config.timeline_url, config.rpc_timeout).await?;

        Ok(Self {
            memories: Arc::new(GrpcMemoryClient::new(memory_channel.clone())),
            comments: Arc::new(GrpcCommentClient::new(memory_channel.clone())),
            medias: Arc::new(GrpcMediaClient::new(memory_channel.clone())),
            shared_memories: Arc::new(GrpcSharedMemoryClient::new(memory_channel)),
            custom_events: Arc::new(GrpcCustomEventClient::new(timeline_channel.clone())),
            milestones: Arc::new(GrpcMilestoneClient::new(timeline_channel.clone())),
            historical_events: Arc::new(GrpcHistoricalEventClient::new(timeline_channel.clone())),
            personal_events: Arc::new(GrpcPersonalEventClient::new(timeline_channel)),
        })
    }
}

/// 1 ホストぶんのコネクションを張る
async fn connect_host(url: &str, timeout: std::time::Duration) -> anyhow::Result<Channel> {
    let channel = Endpoint::from_shared(url.to_string())?
        .timeout(timeout)
        .connect()
        .await?;
    tracing::info!(url, "バックエンドに接続しました");
    Ok(channel)
}
