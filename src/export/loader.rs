//! 日曆區間 CSV 載入器
//!
//! 將寫出器產生的檔案載回記憶體，供下游依交易所查詢日曆區間。
//! 相鄰且屬於同一交易所的列歸為一組，維持檔案中的順序。

use chrono::NaiveDate;
use std::path::Path;

use super::error::{ExportError, ExportResult};
use crate::domain_types::{DateRange, ExchangeCode};
use crate::utils::time_utils;

/// 單一交易所的日曆區間集合，組內按時間順序排列
#[derive(Debug, Clone)]
pub struct ExchangeCalendar {
    pub exchange: ExchangeCode,
    pub ranges: Vec<DateRange>,
}

/// 從 CSV 檔案載入的完整日曆集合
#[derive(Debug, Clone)]
pub struct CalendarSet {
    exchanges: Vec<ExchangeCalendar>,
}

impl CalendarSet {
    /// 從 CSV 檔案載入日曆集合
    pub fn load<P: AsRef<Path>>(path: P) -> ExportResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path.as_ref())?;

        let mut exchanges: Vec<ExchangeCalendar> = Vec::new();
        for row in reader.records() {
            let row = row?;
            let code = row
                .get(0)
                .ok_or_else(|| ExportError::InvalidExchange("缺少交易所欄位".to_string()))?;
            let exchange: ExchangeCode = code
                .parse()
                .map_err(|_| ExportError::InvalidExchange(code.to_string()))?;
            let start = parse_date_field(&row, 1)?;
            let end = parse_date_field(&row, 2)?;
            if start > end {
                return Err(ExportError::InvalidDate(format!(
                    "區間起始晚於結束: {} ~ {}",
                    start, end
                )));
            }
            let range = DateRange::new(start, end);

            match exchanges.last_mut() {
                Some(last) if last.exchange == exchange => last.ranges.push(range),
                _ => exchanges.push(ExchangeCalendar {
                    exchange,
                    ranges: vec![range],
                }),
            }
        }
        Ok(Self { exchanges })
    }

    /// 全部交易所分組，維持檔案中的順序
    pub fn exchanges(&self) -> &[ExchangeCalendar] {
        &self.exchanges
    }

    /// 查詢指定交易所的日曆分組
    pub fn get(&self, exchange: ExchangeCode) -> Option<&ExchangeCalendar> {
        self.exchanges.iter().find(|cal| cal.exchange == exchange)
    }

    /// 判斷指定日期是否落在該交易所的任一日曆區間內
    pub fn covers(&self, exchange: ExchangeCode, date: NaiveDate) -> bool {
        self.get(exchange)
            .map(|cal| cal.ranges.iter().any(|range| range.contains(date)))
            .unwrap_or(false)
    }
}

/// 解析單列中指定索引的日期欄位
fn parse_date_field(row: &csv::StringRecord, index: usize) -> ExportResult<NaiveDate> {
    let text = row
        .get(index)
        .ok_or_else(|| ExportError::InvalidDate(format!("缺少第 {} 欄日期", index)))?;
    time_utils::parse_output_date(text)
        .ok_or_else(|| ExportError::InvalidDate(text.to_string()))
}
