//! 開市日抓取器
//!
//! 將整體跨度切分為窗口，逐窗口向查詢源請求日曆記錄，
//! 過濾出開市日並合併為單一交易所的完整開市日集合。

use chrono::NaiveDate;
use tracing::{debug, info};

use super::client::CalendarSource;
use super::error::{SourceError, SourceResult};
use super::window::split_windows;
use crate::domain_types::{ExchangeCode, TradingDay};
use crate::utils::time_utils;

/// 交易日曆抓取器
pub struct CalendarFetcher<'a, S: CalendarSource> {
    source: &'a S,
    window_years: u32,
}

impl<'a, S: CalendarSource> CalendarFetcher<'a, S> {
    /// 創建新的抓取器，`window_years` 為單次查詢窗口的名義長度
    pub fn new(source: &'a S, window_years: u32) -> Self {
        Self {
            source,
            window_years,
        }
    }

    /// 收集指定交易所在 [start, stop) 內的全部開市日
    ///
    /// 回傳結果去重且升冪排序。窗口內無記錄或全為休市日不影響
    /// 後續窗口的查詢；任一窗口查詢失敗或日期無法解析時整體失敗。
    pub async fn fetch_open_days(
        &self,
        exchange: ExchangeCode,
        start: NaiveDate,
        stop: NaiveDate,
    ) -> SourceResult<Vec<TradingDay>> {
        let windows = split_windows(start, stop, self.window_years);
        let mut days: Vec<TradingDay> = Vec::new();

        for window in &windows {
            debug!(
                "查詢日曆窗口: 交易所 {}, {} ~ {}",
                exchange, window.start, window.stop
            );
            let entries = self
                .source
                .query_calendar(exchange, window.start, window.stop)
                .await?;
            for entry in entries {
                if !entry.is_open {
                    continue;
                }
                let day = time_utils::parse_compact_date(&entry.cal_date).ok_or_else(|| {
                    SourceError::MalformedDate {
                        exchange: exchange.to_string(),
                        value: entry.cal_date.clone(),
                    }
                })?;
                days.push(day);
            }
        }

        // 不依賴查詢源的時序保證，統一排序並去重
        days.sort_unstable();
        days.dedup();

        info!(
            "開市日收集完成: 交易所 {}, 窗口數 {}, 開市日數 {}",
            exchange,
            windows.len(),
            days.len()
        );
        Ok(days)
    }
}
