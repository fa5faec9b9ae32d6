use crate::error::CheckoutError;

/// Render an amount in minor units as a major-unit decimal string with two
/// fractional digits. Integer arithmetic only, so the result is exact.
pub fn format_minor_units(amount_minor_units: i64) -> Result<String, CheckoutError> {
    if amount_minor_units < 0 {
        return Err(CheckoutError::InvalidAmount(amount_minor_units));
    }
    Ok(format!(
        "{}.{:02}",
        amount_minor_units / 100,
        amount_minor_units % 100
    ))
}
