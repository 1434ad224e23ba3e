use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::domain_types::ExchangeCode;

/// 應用程序配置結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub source: SourceConfig,
    pub calendar: CalendarConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.source.validate()?;
        self.calendar.validate()?;
        self.output.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

/// 日曆查詢源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// 查詢接口 URL
    pub api_url: String,
    /// 訪問令牌
    pub token: String,
    /// 單次請求超時（秒）
    pub timeout_secs: u64,
    /// 最大重試次數
    pub max_retries: u32,
    /// 首次重試間隔（秒），之後按指數遞增
    pub retry_delay_secs: u64,
}

impl SourceConfig {
    /// 獲取請求超時持續時間
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// 獲取首次重試間隔持續時間
    pub fn retry_delay(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.retry_delay_secs)
    }
}

impl Validator for SourceConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證查詢源配置
        ValidationUtils::not_empty(&self.api_url, "source.api_url")?;
        ValidationUtils::not_empty(&self.token, "source.token")?;
        ValidationUtils::in_range(self.timeout_secs, 1, 300, "source.timeout_secs")?;
        ValidationUtils::in_range(self.max_retries, 0, 10, "source.max_retries")?;
        ValidationUtils::in_range(self.retry_delay_secs, 1, 60, "source.retry_delay_secs")?;

        Ok(())
    }
}

/// 日曆抓取配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// 要抓取的交易所列表，輸出依此順序分組
    pub exchanges: Vec<ExchangeCode>,
    /// 整體跨度的起始日期
    pub start_date: NaiveDate,
    /// 單次查詢窗口的名義長度（日曆年）
    pub window_years: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            exchanges: ExchangeCode::all(),
            start_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            window_years: 5,
        }
    }
}

impl Validator for CalendarConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證抓取配置
        if self.exchanges.is_empty() {
            return Err(ValidationError::MissingField(
                "calendar.exchanges".to_string(),
            ));
        }
        ValidationUtils::in_range(self.window_years, 1, 20, "calendar.window_years")?;

        Ok(())
    }
}

/// 輸出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 輸出 CSV 檔案路徑
    pub path: String,
}

impl Validator for OutputConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.path, "output.path")?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(
            &self.level.to_lowercase(),
            &["trace", "debug", "info", "warn", "error"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
            "log.level",
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(
            &self.format.to_lowercase(),
            &["pretty", "json"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
            "log.format",
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ApplicationConfig {
        ApplicationConfig {
            source: SourceConfig {
                api_url: "http://localhost:7000".to_string(),
                token: "test-token".to_string(),
                timeout_secs: 30,
                max_retries: 3,
                retry_delay_secs: 1,
            },
            calendar: CalendarConfig::default(),
            output: OutputConfig {
                path: "calendars.csv".to_string(),
            },
            log: LogConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut cfg = valid_config();
        cfg.source.token = String::new();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_empty_exchange_list_rejected() {
        let mut cfg = valid_config();
        cfg.calendar.exchanges.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_default_calendar_config() {
        let cfg = CalendarConfig::default();
        assert_eq!(cfg.exchanges.len(), 6);
        assert_eq!(cfg.window_years, 5);
        assert_eq!(cfg.start_date.to_string(), "2010-01-01");
    }
}
