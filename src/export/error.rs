//! 日曆輸出錯誤定義

use thiserror::Error;

/// 日曆 CSV 寫出與載入錯誤類型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("檔案讀寫錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 處理錯誤: {0}")]
    Csv(#[from] csv::Error),

    #[error("無效的日期欄位: {0}")]
    InvalidDate(String),

    #[error("無效的交易所代碼: {0}")]
    InvalidExchange(String),
}

/// 日曆輸出結果類型
pub type ExportResult<T> = Result<T, ExportError>;
