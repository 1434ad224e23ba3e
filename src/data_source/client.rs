//! 日曆查詢源客戶端
//!
//! 透過 HTTP JSON 接口查詢交易所日曆（trade_cal 協議）。
//! 客戶端由配置顯式構造並傳入管線，不使用進程級全局實例。

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::warn;

use super::error::{SourceError, SourceResult};
use crate::config::SourceConfig;
use crate::domain_types::ExchangeCode;
use crate::utils::time_utils;

/// 日曆查詢回應中的單筆記錄
#[derive(Debug, Clone)]
pub struct CalendarEntry {
    /// YYYYMMDD 格式的日曆日期
    pub cal_date: String,
    /// 該日是否開市
    pub is_open: bool,
}

/// 日曆查詢源特性 - 定義外部交易日曆查詢的核心接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// 查詢指定交易所在 [start, end]（兩端皆含）內的全部日曆記錄
    async fn query_calendar(
        &self,
        exchange: ExchangeCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>>;
}

/// 基於 HTTP 的日曆查詢源實現
pub struct HttpCalendarSource {
    client: Client,
    api_url: String,
    token: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl HttpCalendarSource {
    /// 從查詢源配置創建客戶端
    pub fn new(config: &SourceConfig) -> SourceResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
        })
    }

    /// 發送單次 trade_cal 查詢請求
    async fn query_once(
        &self,
        exchange: ExchangeCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>> {
        let body = json!({
            "api_name": "trade_cal",
            "token": self.token,
            "params": {
                "exchange": exchange.as_str(),
                "start_date": time_utils::format_compact_date(start),
                "end_date": time_utils::format_compact_date(end),
            },
            "fields": "cal_date,is_open",
        });

        let response = self.client.post(&self.api_url).json(&body).send().await?;
        let payload: ApiResponse = response.error_for_status()?.json().await?;

        if payload.code != 0 {
            return Err(SourceError::Api {
                code: payload.code,
                msg: payload.msg.unwrap_or_default(),
            });
        }
        let data = payload
            .data
            .ok_or_else(|| SourceError::InvalidResponse("回應缺少 data 欄位".to_string()))?;

        parse_entries(&data)
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn query_calendar(
        &self,
        exchange: ExchangeCode,
        start: NaiveDate,
        end: NaiveDate,
    ) -> SourceResult<Vec<CalendarEntry>> {
        let mut attempt: u32 = 0;
        loop {
            match self.query_once(exchange, start, end).await {
                Ok(entries) => return Ok(entries),
                // 回應結構錯誤不可重試，立即失敗
                Err(err @ SourceError::InvalidResponse(_)) => return Err(err),
                Err(err) if attempt >= self.max_retries => return Err(err),
                Err(err) => {
                    attempt += 1;
                    let backoff = self
                        .retry_delay
                        .saturating_mul(1u32 << (attempt - 1).min(8));
                    warn!(
                        "日曆查詢失敗，{}秒後重試: 交易所 {}, 第 {}/{} 次, 錯誤: {}",
                        backoff.as_secs(),
                        exchange,
                        attempt,
                        self.max_retries,
                        err
                    );
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }
}

/// trade_cal 協議的回應外層結構
#[derive(Debug, Deserialize)]
struct ApiResponse {
    code: i64,
    msg: Option<String>,
    data: Option<ApiData>,
}

/// 回應數據區塊：欄位名列表與逐列值
#[derive(Debug, Deserialize)]
struct ApiData {
    fields: Vec<String>,
    items: Vec<Vec<Value>>,
}

/// 將回應數據區塊轉換為日曆記錄列表
fn parse_entries(data: &ApiData) -> SourceResult<Vec<CalendarEntry>> {
    let date_idx = field_index(data, "cal_date")?;
    let open_idx = field_index(data, "is_open")?;

    let mut entries = Vec::with_capacity(data.items.len());
    for item in &data.items {
        let cal_date = item
            .get(date_idx)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SourceError::InvalidResponse(format!("cal_date 欄位缺失或非字串: {:?}", item))
            })?
            .to_string();
        let is_open = item.get(open_idx).map(flag_is_open).unwrap_or(false);
        entries.push(CalendarEntry { cal_date, is_open });
    }
    Ok(entries)
}

/// 在欄位名列表中定位指定欄位的索引
fn field_index(data: &ApiData, name: &str) -> SourceResult<usize> {
    data.fields
        .iter()
        .position(|f| f == name)
        .ok_or_else(|| SourceError::InvalidResponse(format!("回應缺少 {} 欄位", name)))
}

/// 將開市旗標解讀為布林值，查詢源可能回傳數字或字串
fn flag_is_open(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(num) => num.as_i64().unwrap_or(0) != 0,
        Value::String(text) => text == "1",
        _ => false,
    }
}
