use crate::error::CheckoutError;

/// ISO 4217 codes accepted by the hosted checkout.
pub const SUPPORTED_CURRENCIES: &[&str] = &[
    "AUD", "BRL", "CAD", "CZK", "DKK", "EUR", "HKD", "HUF", "ILS", "JPY", "MYR", "MXN", "NOK",
    "NZD", "PHP", "PLN", "GBP", "RUB", "SGD", "SEK", "CHF", "TWD", "THB", "TRY", "USD",
];

/// Returns `code` unchanged if the provider accepts it.
///
/// Matching is exact: "eur" or " USD" are rejected rather than normalized.
pub fn validate_currency(code: &str) -> Result<&str, CheckoutError> {
    if SUPPORTED_CURRENCIES.contains(&code) {
        Ok(code)
    } else {
        Err(CheckoutError::CurrencyNotSupported {
            code: code.to_string(),
        })
    }
}

pub fn supported_currencies() -> &'static [&'static str] {
    SUPPORTED_CURRENCIES
}
