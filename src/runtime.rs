// 日曆抓取管線模組
//
// 按配置順序逐一處理各交易所：抓取整體跨度內的開市日、壓縮為
// 連續日期區間、附加到輸出記錄列表。交易所之間完全串行，任一
// 交易所失敗即中止整個批次，避免寫出不完整的結果。

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::compress::compress_trading_days;
use crate::config::CalendarConfig;
use crate::data_source::{CalendarFetcher, CalendarSource};
use crate::domain_types::CalendarRecord;

/// 執行完整的抓取與壓縮管線
///
/// `stop` 為整體跨度的結束日期（不含），由呼叫端提供。
/// 回傳的記錄按配置中的交易所順序分組，組內按時間排序；
/// 沒有任何開市日的交易所不產生記錄，但不視為錯誤。
pub async fn run_pipeline<S: CalendarSource>(
    source: &S,
    config: &CalendarConfig,
    stop: NaiveDate,
) -> Result<Vec<CalendarRecord>> {
    let fetcher = CalendarFetcher::new(source, config.window_years);
    let mut records = Vec::new();

    for &exchange in &config.exchanges {
        info!("開始抓取交易日曆: {}", exchange);
        let days = fetcher
            .fetch_open_days(exchange, config.start_date, stop)
            .await?;
        let ranges = compress_trading_days(&days);
        info!(
            "日曆壓縮完成: 交易所 {}, 開市日 {} 天, 區間 {} 段",
            exchange,
            days.len(),
            ranges.len()
        );
        records.extend(
            ranges
                .into_iter()
                .map(|range| CalendarRecord { exchange, range }),
        );
    }

    Ok(records)
}
