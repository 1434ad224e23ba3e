// 日曆輸出模組
//
// 負責把壓縮後的日曆記錄寫為 CSV 檔案，以及把既有檔案載回
// 按交易所分組的日曆集合。
pub mod error;
pub mod loader;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use loader::{CalendarSet, ExchangeCalendar};
pub use writer::write_records;
