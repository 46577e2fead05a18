use crate::CoreError;

/// Floating point type used for edge and path costs.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Accept a finite, non-negative cost. `-0.0` is normalized to `0.0`.
pub fn ensure_cost(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(CoreError::Negative { what, value: v });
    }
    Ok(v + 0.0)
}

/// Parse a textual cost such as `"42.789"`. Surrounding whitespace is ignored.
pub fn parse_cost(text: &str, what: &'static str) -> Result<Real, CoreError> {
    let value: Real = text
        .trim()
        .parse()
        .map_err(|_| CoreError::NotANumber {
            what,
            text: text.to_string(),
        })?;
    ensure_cost(value, what)
}
