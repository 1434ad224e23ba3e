// 日期區間壓縮模組
//
// 將升冪排序、去重後的開市日序列壓縮為連續日期區間。
// 一段區間涵蓋一串連續的開市日，並向後延伸一個日曆日：
// 被切分的區間結束於其最後一個開市日的次日，讓緊隨其後的單一
// 休市日（例如週末邊界）也落在區間內。

use chrono::NaiveDate;

use crate::domain_types::{DateRange, TradingDay};

/// 將開市日序列壓縮為連續日期區間
///
/// 輸入必須升冪排序且去重。當日 `d` 與前一開市日之間出現空缺
/// （`previous_day + 1 < d`）時切分區間，前段結束於
/// `previous_day + 1`；最末區間結束於最後一個開市日本身。
/// 空輸入回傳空列表，單一開市日回傳單日區間。
pub fn compress_trading_days(days: &[TradingDay]) -> Vec<DateRange> {
    let mut ranges = Vec::new();
    let mut range_start: Option<NaiveDate> = None;
    let mut previous_day: Option<NaiveDate> = None;

    for &day in days {
        if let (Some(start), Some(prev)) = (range_start, previous_day) {
            let expected = next_day(prev);
            if expected < day {
                ranges.push(DateRange::new(start, expected));
                range_start = Some(day);
            }
        }
        if range_start.is_none() {
            range_start = Some(day);
        }
        previous_day = Some(day);
    }

    // 收尾：關閉仍然開啟的區間
    if let (Some(start), Some(prev)) = (range_start, previous_day) {
        ranges.push(DateRange::new(start, prev));
    }
    ranges
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}
