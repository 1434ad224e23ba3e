use anyhow::{anyhow, Result};
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use trading_calendar::config::ApplicationConfig;
use trading_calendar::data_source::HttpCalendarSource;
use trading_calendar::export;
use trading_calendar::runtime;
use trading_calendar::utils::time_utils;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化配置
    let app_config = ApplicationConfig::load_from_env()?;

    // 初始化日誌系統
    init_logging(&app_config.log)?;

    // 建立日曆查詢源（顯式構造並傳入管線，不持有全局實例）
    let source = HttpCalendarSource::new(&app_config.source)?;

    // 逐交易所抓取並壓縮日曆，跨度為 [start_date, 今天)
    let stop = time_utils::today_utc();
    let records = runtime::run_pipeline(&source, &app_config.calendar, stop).await?;

    // 全部交易所成功後一次性寫出
    export::write_records(&app_config.output.path, &records)?;
    info!(
        "日曆寫出完成: {} 列 -> {}",
        records.len(),
        app_config.output.path
    );

    Ok(())
}

// 初始化日誌系統
fn init_logging(log_config: &trading_calendar::config::LogConfig) -> Result<()> {
    let level = match log_config.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // 默認為INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(())
}
