//! 全サービス共通のメッセージ型

use serde::{Deserialize, Serialize};

/// 空レスポンス
///
/// 書き込み系 RPC（Create / Update / Delete）の戻り値。
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Void {}

/// ID 指定リクエスト（GetById / Delete）
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ById {
    #[prost(string, tag = "1")]
    pub id: String,
}

/// 日付指定リクエスト（timeline context）
///
/// `date` は `YYYY-MM-DD` 形式の文字列。解釈はバックエンド側の責務。
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ByDate {
    #[prost(string, tag = "1")]
    pub date: String,
}

/// ページネーションフィルタ
///
/// `page` は 0 始まりのページ番号。ページサイズはバックエンド側の固定値。
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[prost(int32, tag = "1")]
    pub page: i32,
}
