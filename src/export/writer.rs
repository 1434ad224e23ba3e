//! 日曆區間 CSV 寫出器

use std::path::Path;

use super::error::ExportResult;
use crate::domain_types::CalendarRecord;
use crate::utils::time_utils;

/// 將全部日曆記錄一次性寫入 CSV 檔案
///
/// 每列為 (交易所代碼, 區間起始, 區間結束)，日期格式 YYYY-MM-DD，
/// 不含標題列。呼叫端保證記錄已按交易所分組、組內按時間排序，
/// 並且只在全部交易所處理成功後呼叫本函數。
pub fn write_records<P: AsRef<Path>>(path: P, records: &[CalendarRecord]) -> ExportResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    for record in records {
        let start = time_utils::format_output_date(record.range.start);
        let end = time_utils::format_output_date(record.range.end);
        writer.write_record([record.exchange.as_str(), start.as_str(), end.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
