//! # Validation Module
//!
//! Input sanitation and advisory validation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser host                                                 │
//! │  ├── parse_numeric_field: raw text-field value → clean f64             │
//! │  └── keystroke filtering (blocking '-' / 'e') stays in the UI          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine (defensive)                                           │
//! │  ├── sanitize_value on every numeric input                             │
//! │  └── validate(): advisory "what is still missing" hint                 │
//! │                                                                         │
//! │  Nothing here ever blocks computation. The engine always produces a    │
//! │  best-effort snapshot; validate() only explains why parts are zero.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationIssue;
use crate::types::ExchangeRate;

// =============================================================================
// Numeric Sanitation
// =============================================================================

/// Clamps a numeric value to the engine's input domain.
///
/// Non-finite → 0, negative → 0. Applied by the engine to every incoming
/// number, so no input can poison a snapshot with NaN or a negative price.
#[inline]
pub fn sanitize_value(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    value
}

/// Parses a raw text-field value into a clean engine input.
///
/// The host-side contract: empty string or non-numeric → 0, negative → 0,
/// non-finite → 0.
///
/// ## Example
/// ```rust
/// use zahab_core::validation::parse_numeric_field;
///
/// assert_eq!(parse_numeric_field("2000"), 2000.0);
/// assert_eq!(parse_numeric_field("  1999.5 "), 1999.5);
/// assert_eq!(parse_numeric_field(""), 0.0);
/// assert_eq!(parse_numeric_field("abc"), 0.0);
/// assert_eq!(parse_numeric_field("-5"), 0.0);
/// ```
pub fn parse_numeric_field(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => sanitize_value(value),
        Err(_) => 0.0,
    }
}

// =============================================================================
// Advisory Validation
// =============================================================================

/// Reports the first unmet input precondition, if any.
///
/// Fixed priority order: spot price, then exchange rate, then weight. The
/// hint is advisory - computation has already happened by the time the UI
/// sees it (partial-result policy).
pub fn validate(
    spot_price_usd: f64,
    rate: ExchangeRate,
    weight_grams: f64,
) -> Option<ValidationIssue> {
    if sanitize_value(spot_price_usd) <= 0.0 {
        return Some(ValidationIssue::MissingSpotPrice);
    }
    if !rate.is_usable() {
        return Some(ValidationIssue::MissingExchangeRate);
    }
    if sanitize_value(weight_grams) <= 0.0 {
        return Some(ValidationIssue::MissingWeight);
    }
    None
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RateDenomination;

    #[test]
    fn test_sanitize_value() {
        assert_eq!(sanitize_value(12.5), 12.5);
        assert_eq!(sanitize_value(0.0), 0.0);
        assert_eq!(sanitize_value(-0.01), 0.0);
        assert_eq!(sanitize_value(f64::NAN), 0.0);
        assert_eq!(sanitize_value(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_parse_numeric_field() {
        assert_eq!(parse_numeric_field("2000"), 2000.0);
        assert_eq!(parse_numeric_field("1999.50"), 1999.5);
        assert_eq!(parse_numeric_field(" 13000 "), 13000.0);

        assert_eq!(parse_numeric_field(""), 0.0);
        assert_eq!(parse_numeric_field("   "), 0.0);
        assert_eq!(parse_numeric_field("abc"), 0.0);
        assert_eq!(parse_numeric_field("12abc"), 0.0);
        assert_eq!(parse_numeric_field("-5"), 0.0);
        assert_eq!(parse_numeric_field("NaN"), 0.0);
        assert_eq!(parse_numeric_field("inf"), 0.0);
    }

    #[test]
    fn test_validate_priority_order() {
        let usable = ExchangeRate::new(13_000.0, RateDenomination::New);

        // everything missing: spot wins
        assert_eq!(
            validate(0.0, ExchangeRate::absent(), 0.0),
            Some(ValidationIssue::MissingSpotPrice)
        );
        // spot present: rate wins over weight
        assert_eq!(
            validate(2000.0, ExchangeRate::absent(), 0.0),
            Some(ValidationIssue::MissingExchangeRate)
        );
        // spot and rate present: weight reported
        assert_eq!(
            validate(2000.0, usable, 0.0),
            Some(ValidationIssue::MissingWeight)
        );
        // all present: no hint
        assert_eq!(validate(2000.0, usable, 5.0), None);
    }

    #[test]
    fn test_validate_treats_garbage_as_missing() {
        let usable = ExchangeRate::new(13_000.0, RateDenomination::New);
        assert_eq!(
            validate(f64::NAN, usable, 5.0),
            Some(ValidationIssue::MissingSpotPrice)
        );
        assert_eq!(
            validate(2000.0, usable, -4.0),
            Some(ValidationIssue::MissingWeight)
        );
    }
}
