// time_utils.rs
//
// 提供日曆日期相關的工具函數，用於在外部數據源、領域模型和輸出層之間轉換日期。
// 主要功能：
// 1. 解析和格式化外部數據源使用的 YYYYMMDD 緊湊日期字串
// 2. 解析和格式化輸出檔案使用的 YYYY-MM-DD 日期字串
// 3. 日曆年偏移與當前 UTC 日期

use chrono::{Datelike, NaiveDate, Utc};

/// 外部數據源使用的緊湊日期格式
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// 輸出檔案使用的日期格式
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// 將 YYYYMMDD 字串解析為 NaiveDate
pub fn parse_compact_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, COMPACT_DATE_FORMAT).ok()
}

/// 將 NaiveDate 格式化為 YYYYMMDD 字串
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format(COMPACT_DATE_FORMAT).to_string()
}

/// 將 YYYY-MM-DD 字串解析為 NaiveDate
pub fn parse_output_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, OUTPUT_DATE_FORMAT).ok()
}

/// 將 NaiveDate 格式化為 YYYY-MM-DD 字串
pub fn format_output_date(date: NaiveDate) -> String {
    date.format(OUTPUT_DATE_FORMAT).to_string()
}

/// 獲取當前 UTC 日期（日粒度）
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// 將日期向後偏移指定的日曆年數
///
/// 2 月 29 日偏移到非閏年時順延為 3 月 1 日。
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compact_date_roundtrip() {
        let day = date(2024, 1, 10);
        let text = format_compact_date(day);
        assert_eq!(text, "20240110");
        assert_eq!(parse_compact_date(&text), Some(day));
    }

    #[test]
    fn test_parse_compact_date_rejects_garbage() {
        assert_eq!(parse_compact_date("2024-01-10"), None);
        assert_eq!(parse_compact_date("20241301"), None);
        assert_eq!(parse_compact_date(""), None);
    }

    #[test]
    fn test_output_date_roundtrip() {
        let day = date(2010, 1, 1);
        let text = format_output_date(day);
        assert_eq!(text, "2010-01-01");
        assert_eq!(parse_output_date(&text), Some(day));
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(date(2010, 1, 1), 5), date(2015, 1, 1));
        // 閏日偏移到非閏年
        assert_eq!(add_years(date(2020, 2, 29), 5), date(2025, 3, 1));
        // 閏日偏移到閏年
        assert_eq!(add_years(date(2020, 2, 29), 4), date(2024, 2, 29));
    }
}
