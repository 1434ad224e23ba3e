//! 日曆數據源錯誤定義

use thiserror::Error;

/// 日曆數據源錯誤類型
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP 請求錯誤: {0}")]
    Http(#[from] reqwest::Error),

    #[error("查詢源回應錯誤: 代碼 {code}, 訊息: {msg}")]
    Api { code: i64, msg: String },

    #[error("回應格式錯誤: {0}")]
    InvalidResponse(String),

    #[error("日期解析錯誤: 交易所 {exchange}, 值 {value}")]
    MalformedDate { exchange: String, value: String },
}

/// 日曆數據源結果類型
pub type SourceResult<T> = Result<T, SourceError>;
