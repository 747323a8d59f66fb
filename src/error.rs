use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Notification error: {0}")]
    NotificationError(String),
    #[error("Valuation error: {0}")]
    ValuationError(String),
    #[error("Calendar error: {0}")]
    CalendarError(String),
}

pub type Result<T> = std::result::Result<T, SettlementError>;
