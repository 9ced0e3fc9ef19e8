//! # Error Types
//!
//! Domain-specific error types for zahab-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  zahab-core errors (this file)                                         │
//! │  ├── CoreError        - Violations of the no-currency-mixing rule      │
//! │  └── ValidationIssue  - Advisory "input missing" hints for the UI      │
//! │                                                                         │
//! │  There is NO fatal error class. Malformed numeric input degrades to    │
//! │  zero and computation always produces a best-effort snapshot. The      │
//! │  only hard error the crate can return is CurrencyMismatch, and only    │
//! │  from the explicitly checked Amount operations - the engine's own      │
//! │  paths build both operands in the same currency and cannot hit it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the currencies involved)
//! 3. Errors are enum variants, never String

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::money::Currency;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing-logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two amounts with different currency tags were combined without an
    /// explicit conversion step.
    ///
    /// ## When This Occurs
    /// - Host code adds a USD manufacturing fee to a SYP gold value
    ///   directly instead of going through `pricing::convert_fee`
    #[error("cannot combine {left:?} with {right:?}: convert explicitly first")]
    CurrencyMismatch { left: Currency, right: Currency },
}

// =============================================================================
// Validation Issue
// =============================================================================

/// Advisory validation hints.
///
/// These are informational, not blocking: the engine computes a best-effort
/// (possibly all-zero) snapshot regardless, and the host UI decides how to
/// surface the hint (e.g. a warning banner). Exactly one issue is reported
/// at a time, in fixed priority order: spot price, then exchange rate, then
/// weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// No usable gold spot price was entered.
    #[error("spot price is missing")]
    MissingSpotPrice,

    /// No usable USD exchange rate was entered; local-currency outputs
    /// degrade to zero while USD outputs still populate.
    #[error("exchange rate is missing")]
    MissingExchangeRate,

    /// No piece weight was entered; the piece price is not meaningful.
    #[error("weight is missing")]
    MissingWeight,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CurrencyMismatch {
            left: Currency::SypNew,
            right: Currency::Usd,
        };
        assert_eq!(
            err.to_string(),
            "cannot combine SypNew with Usd: convert explicitly first"
        );
    }

    #[test]
    fn test_validation_issue_messages() {
        assert_eq!(
            ValidationIssue::MissingSpotPrice.to_string(),
            "spot price is missing"
        );
        assert_eq!(
            ValidationIssue::MissingExchangeRate.to_string(),
            "exchange rate is missing"
        );
        assert_eq!(
            ValidationIssue::MissingWeight.to_string(),
            "weight is missing"
        );
    }

    #[test]
    fn test_validation_issue_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&ValidationIssue::MissingSpotPrice).unwrap(),
            "\"missing_spot_price\""
        );
    }
}
