use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Currency not supported: {code}")]
    CurrencyNotSupported { code: String },

    #[error("Invalid amount: {0} minor units (must be non-negative)")]
    InvalidAmount(i64),

    #[error("URL resolution failed: {0}")]
    UrlResolution(String),
}

