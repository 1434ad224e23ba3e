//! 日期窗口切分
//!
//! 外部查詢源對單次請求允許的日期跨度有上限，整體跨度按固定的
//! 日曆年數切分為連續窗口，相鄰窗口首尾相接，合併後恰好覆蓋
//! 整體跨度一次。

use chrono::NaiveDate;

use crate::utils::time_utils;

/// 單次外部查詢的日期窗口，範圍為 [start, stop)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub stop: NaiveDate,
}

/// 將整體跨度 [start, stop) 切分為連續的固定長度窗口
///
/// 每個窗口名義上涵蓋 `window_years` 個日曆年；跨度無法整除時
/// 最後一個窗口較短，但仍會被查詢。空跨度回傳空列表。
pub fn split_windows(start: NaiveDate, stop: NaiveDate, window_years: u32) -> Vec<DateWindow> {
    let mut windows = Vec::new();
    let mut cursor = start;
    while cursor < stop {
        let nominal = time_utils::add_years(cursor, window_years as i32);
        let bound = nominal.min(stop);
        windows.push(DateWindow {
            start: cursor,
            stop: bound,
        });
        cursor = bound;
    }
    windows
}
