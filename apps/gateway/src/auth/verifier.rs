//! # トークン検証
//!
//! ベアラートークン（JWT, HS256）の署名と有効期限を検証し、
//! `user_id` クレームから呼び出し元 ID を抽出する。

use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::Deserialize;
use thiserror::Error;

use super::CallerIdentity;

/// 認証エラー
///
/// クライアントにはどの失敗かを区別させない（一律 401 の汎用ボディ）。
/// ログ上でのみ [`kind`](AuthError::kind) で区別する。
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization ヘッダーが存在しない
    #[error("Authorization ヘッダーがありません")]
    MissingHeader,

    /// Bearer スキームではない
    #[error("Bearer スキームではありません")]
    InvalidScheme,

    /// 署名不正・期限切れ・形式不正
    #[error("トークンの検証に失敗しました: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// 必須クレーム `user_id` が存在しない
    #[error("user_id クレームがありません")]
    MissingUserId,
}

impl AuthError {
    /// ログ出力用の失敗種別
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::InvalidScheme => "invalid_scheme",
            Self::InvalidToken(e) => match e.kind() {
                ErrorKind::ExpiredSignature => "expired",
                ErrorKind::InvalidSignature => "invalid_signature",
                _ => "malformed",
            },
            Self::MissingUserId => "missing_claim",
        }
    }
}

/// 検証対象のクレームセット
///
/// `exp` は jsonwebtoken の `Validation` 側で必須チェックされるため、
/// ここでは取り出さない。
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    user_id: Option<String>,
}

/// ベアラートークンの検証器
///
/// 起動時に 1 度だけ構築し、全リクエストで共有する。
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// HS256 の共有シークレットから検証器を作成する
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// トークンを検証し、呼び出し元 ID を返す
    ///
    /// 署名・有効期限の検証に加えて、`user_id` クレームが非空である
    /// ことを要求する。
    pub fn verify(&self, token: &str) -> Result<CallerIdentity, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        let user_id = data
            .claims
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or(AuthError::MissingUserId)?;

        Ok(CallerIdentity { user_id })
    }
}
