use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 支援的期貨交易所代碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExchangeCode {
    /// 中國金融期貨交易所
    Cffex,
    /// 上海期貨交易所
    Shfe,
    /// 上海國際能源交易中心
    Ine,
    /// 鄭州商品交易所
    Czce,
    /// 大連商品交易所
    Dce,
    /// 廣州期貨交易所
    Gfex,
}

impl ExchangeCode {
    /// 交易所在外部查詢與輸出檔案中使用的代碼字串
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeCode::Cffex => "CFFEX",
            ExchangeCode::Shfe => "SHFE",
            ExchangeCode::Ine => "INE",
            ExchangeCode::Czce => "CZCE",
            ExchangeCode::Dce => "DCE",
            ExchangeCode::Gfex => "GFEX",
        }
    }

    /// 獲取全部交易所列表，依預設抓取順序排列
    pub fn all() -> Vec<ExchangeCode> {
        vec![
            ExchangeCode::Cffex,
            ExchangeCode::Shfe,
            ExchangeCode::Ine,
            ExchangeCode::Czce,
            ExchangeCode::Dce,
            ExchangeCode::Gfex,
        ]
    }
}

impl fmt::Display for ExchangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知的交易所代碼
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的交易所代碼: {0}")]
pub struct UnknownExchange(pub String);

impl FromStr for ExchangeCode {
    type Err = UnknownExchange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CFFEX" => Ok(ExchangeCode::Cffex),
            "SHFE" => Ok(ExchangeCode::Shfe),
            "INE" => Ok(ExchangeCode::Ine),
            "CZCE" => Ok(ExchangeCode::Czce),
            "DCE" => Ok(ExchangeCode::Dce),
            "GFEX" => Ok(ExchangeCode::Gfex),
            _ => Err(UnknownExchange(s.to_string())),
        }
    }
}
