use crate::domain::catalog::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown menu item: {0}")]
    UnknownItem(ItemId),
    #[error("Duplicate menu item in catalog: {0}")]
    DuplicateItem(ItemId),
    #[error("Nothing to submit: the cart is empty")]
    EmptyCart,
    #[error("Order total exceeds the supported amount")]
    Overflow,
    #[error("Invalid contact address: {0:?}")]
    InvalidContact(String),
    #[error("Invalid messaging channel URL: {0}")]
    InvalidChannel(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;
