//! # Keepsake ゲートウェイサーバー
//!
//! 認証付きエッジゲートウェイ。HTTP/JSON を終端し、ベアラートークンを
//! 検証してから、REST リクエストを 2 つのバックエンドホスト
//! （memory / timeline）への型付き RPC に変換する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Client     │────▶│   Gateway    │────▶│ memory service   │
//! │              │     │              │     └──────────────────┘
//! └──────────────┘     │              │     ┌──────────────────┐
//!                      │              │────▶│ timeline service │
//!                      └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GATEWAY_PORT` | **Yes** | ポート番号 |
//! | `MEMORY_URL` | **Yes** | memory バックエンドの URL |
//! | `TIMELINE_URL` | **Yes** | timeline バックエンドの URL |
//! | `JWT_SECRET` | **Yes** | トークン署名検証シークレット（HS256） |
//! | `RPC_TIMEOUT_SECS` | No | RPC タイムアウト秒数（デフォルト: 10） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p keepsake-gateway
//!
//! # 本番環境（環境変数を直接指定）
//! GATEWAY_PORT=8080 MEMORY_URL=http://... cargo run -p keepsake-gateway --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use axum::extract::Request;
use keepsake_gateway::auth::TokenVerifier;
use keepsake_gateway::client::BackendClients;
use keepsake_gateway::config::GatewayConfig;
use keepsake_gateway::router::build_router;
use keepsake_shared::observability::{MakeRequestUuidV7, TracingConfig, make_request_span};
use tokio::net::TcpListener;
use tower::Layer as _;
use tower_http::{
    normalize_path::NormalizePathLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. バックエンドへの接続（失敗したら起動中断）
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    keepsake_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env();

    tracing::info!(
        "ゲートウェイを起動します: {}:{}",
        config.host,
        config.port
    );

    // バックエンド接続。縮退運転はしない: どちらかに接続できなければ
    // プロセスを落とす
    let clients = BackendClients::connect(&config)
        .await
        .expect("バックエンドへの接続に失敗しました");

    let verifier = Arc::new(TokenVerifier::new(&config.jwt_secret));

    // ルーター構築
    // Request ID + TraceLayer により、すべての HTTP リクエストに
    // request_id が付与されログに自動注入される
    let app = build_router(clients, verifier)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    // 末尾スラッシュを正規化する（`POST /memory/` も受け付ける）。
    // ルーター全体を包む必要があるため into_make_service は
    // axum::ServiceExt 側を使う
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ゲートウェイが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
