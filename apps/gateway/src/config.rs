//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイの設定を読み込む。

use std::{env, time::Duration};

/// ゲートウェイの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// memory バックエンドの URL（例: `http://memory-service:50051`）
    pub memory_url: String,
    /// timeline バックエンドの URL（例: `http://timeline-service:50052`）
    pub timeline_url: String,
    /// ベアラートークンの署名検証シークレット（HS256）
    pub jwt_secret: String,
    /// RPC 呼び出しのタイムアウト
    ///
    /// `RPC_TIMEOUT_SECS` で指定する。未設定の場合は 10 秒。
    pub rpc_timeout: Duration,
}

impl GatewayConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 必須の変数が未設定の場合は panic する（起動時に即座に落とす）。
    pub fn from_env() -> Self {
        let rpc_timeout_secs = env::var("RPC_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .expect("RPC_TIMEOUT_SECS は秒数の整数である必要があります")
            })
            .unwrap_or(10);

        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .expect("GATEWAY_PORT が設定されていません")
                .parse()
                .expect("GATEWAY_PORT は有効なポート番号である必要があります"),
            memory_url: env::var("MEMORY_URL").expect("MEMORY_URL が設定されていません"),
            timeline_url: env::var("TIMELINE_URL").expect("TIMELINE_URL が設定されていません"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET が設定されていません"),
            rpc_timeout: Duration::from_secs(rpc_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    // テスト間で環境変数の競合を避けるため、
    // テスト用のパース関数で検証する

    use std::time::Duration;

    #[test]
    fn test_rpc_timeout_未設定のときデフォルト10秒() {
        assert_eq!(parse_rpc_timeout(None), Duration::from_secs(10));
    }

    #[test]
    fn test_rpc_timeout_設定値が使われる() {
        assert_eq!(parse_rpc_timeout(Some("3")), Duration::from_secs(3));
    }

    /// 環境変数の値から rpc_timeout をパースする（テスト用）
    fn parse_rpc_timeout(value: Option<&str>) -> Duration {
        let secs = value
            .map(|v| v.parse::<u64>().expect("integer"))
            .unwrap_or(10);
        Duration::from_secs(secs)
    }
}
