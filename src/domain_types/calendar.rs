use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exchange::ExchangeCode;

/// 單一交易所的開市日，UTC 日粒度，不含時間部分
pub type TradingDay = NaiveDate;

/// 連續交易日期區間，[start, end] 兩端皆含
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// 創建新的日期區間，呼叫端保證 start <= end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "區間起始不可晚於結束");
        Self { start, end }
    }

    /// 判斷日期是否落在區間內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 區間涵蓋的日曆天數
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// 交易所與其一段日曆區間的配對，即輸出檔案的單列記錄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub exchange: ExchangeCode,
    pub range: DateRange,
}
