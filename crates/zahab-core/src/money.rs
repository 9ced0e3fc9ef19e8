//! # Money Module
//!
//! Provides the `Amount` type: a float value tagged with the currency it is
//! expressed in.
//!
//! ## Why Tagged Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE CURRENCY MIXING PROBLEM                                            │
//! │                                                                         │
//! │  The calculator juggles three denominations at once:                    │
//! │    USD, new Syrian Pounds, old Syrian Pounds (old = new × 100)         │
//! │                                                                         │
//! │  Adding a USD fee to a SYP gold value without converting first          │
//! │  produces a number that LOOKS fine and is off by four orders of        │
//! │  magnitude.                                                             │
//! │                                                                         │
//! │  OUR SOLUTION: every amount carries its currency, and the checked      │
//! │  operations refuse to combine mismatched tags. Conversion is a         │
//! │  separate, explicit step (see pricing::convert_fee).                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zahab_core::money::{Amount, Currency};
//!
//! let gold = Amount::new(835_920.0, Currency::SypNew);
//! let fee = Amount::new(50_000.0, Currency::SypNew);
//!
//! // Same currency: combination succeeds
//! let total = gold.checked_add(fee).unwrap();
//! assert_eq!(total.value(), 885_920.0);
//!
//! // Mixed currencies: typed error, never a silent wrong number
//! let usd_fee = Amount::new(50.0, Currency::Usd);
//! assert!(gold.checked_add(usd_fee).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Currency
// =============================================================================

/// The closed set of denominations the calculator deals in.
///
/// ## Why a Closed Enum?
/// The browser host speaks string literals (`'syp_new'`, `'usd'`, ...).
/// An enum makes an invalid currency tag a compile-time impossibility;
/// serde keeps the same wire spelling.
///
/// ## Old vs New SYP
/// Old and new Syrian Pounds are two denominations of the *same* currency:
/// 100 old = 1 new. Old is a display convention, but it still gets its own
/// tag so an old-denominated fee can never be added to a new-denominated
/// gold value unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// US dollars.
    Usd,
    /// New Syrian Pounds (the base local denomination for all math).
    SypNew,
    /// Old Syrian Pounds (new × 100).
    SypOld,
}

impl Currency {
    /// Short code used by `Display` and debugging output.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::SypNew => "SYP",
            Currency::SypOld => "SYP-old",
        }
    }
}

impl Default for Currency {
    /// Fees default to new Syrian Pounds, matching the reset state.
    fn default() -> Self {
        Currency::SypNew
    }
}

// =============================================================================
// Amount
// =============================================================================

/// A monetary value tagged with the currency it is expressed in.
///
/// ## Design Decisions
/// - **f64 value**: the engine mirrors the source data (a float spot price
///   and float exchange rate); derived prices are floats by nature and the
///   UI rounds for presentation only.
/// - **Non-finite inputs collapse to 0**: the engine must never emit NaN
///   or infinity to the UI, per the soft-fail policy.
/// - **Negative values are transient**: inputs are clamped non-negative
///   before they reach the engine, but a buyer-side fee subtraction can dip
///   below zero for a moment before the final clamp
///   (see [`Amount::clamp_non_negative`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount {
    value: f64,
    currency: Currency,
}

impl Amount {
    /// Creates an amount, collapsing non-finite values to 0.
    ///
    /// ## Example
    /// ```rust
    /// use zahab_core::money::{Amount, Currency};
    ///
    /// let price = Amount::new(64.3, Currency::Usd);
    /// assert_eq!(price.value(), 64.3);
    ///
    /// let poisoned = Amount::new(f64::NAN, Currency::Usd);
    /// assert_eq!(poisoned.value(), 0.0);
    /// ```
    #[inline]
    pub fn new(value: f64, currency: Currency) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        Amount { value, currency }
    }

    /// Zero in the given currency.
    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Amount {
            value: 0.0,
            currency,
        }
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the currency tag.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Adds two amounts of the same currency.
    ///
    /// ## Errors
    /// [`CoreError::CurrencyMismatch`] when the tags differ. Convert first
    /// (see `pricing::convert_fee`), then combine.
    pub fn checked_add(self, other: Amount) -> CoreResult<Amount> {
        self.require_same_currency(other)?;
        Ok(Amount::new(self.value + other.value, self.currency))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// The result may be negative; callers that need the piece-price floor
    /// apply [`Amount::clamp_non_negative`] on the final total only.
    ///
    /// ## Errors
    /// [`CoreError::CurrencyMismatch`] when the tags differ.
    pub fn checked_sub(self, other: Amount) -> CoreResult<Amount> {
        self.require_same_currency(other)?;
        Ok(Amount::new(self.value - other.value, self.currency))
    }

    /// Scales by a dimensionless factor (weight in grams, karat ratio, the
    /// old/new ×100 display conversion). Always allowed: scaling does not
    /// change the currency.
    ///
    /// ## Example
    /// ```rust
    /// use zahab_core::money::{Amount, Currency};
    ///
    /// let per_gram = Amount::new(100.0, Currency::SypNew);
    /// let five_grams = per_gram.scale(5.0);
    /// assert_eq!(five_grams.value(), 500.0);
    /// ```
    #[inline]
    pub fn scale(self, factor: f64) -> Amount {
        Amount::new(self.value * factor, self.currency)
    }

    /// Floors the value at zero. Applied to the final piece total only,
    /// never to intermediate gold value or fee.
    #[inline]
    pub fn clamp_non_negative(self) -> Amount {
        Amount::new(self.value.max(0.0), self.currency)
    }

    fn require_same_currency(&self, other: Amount) -> CoreResult<()> {
        if self.currency != other.currency {
            return Err(CoreError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount in a human-readable format.
///
/// ## Note
/// This is for debugging. The browser UI applies its own numeral and
/// thousands-separator conventions; it must never parse this string.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.currency.code())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collapses_non_finite() {
        assert_eq!(Amount::new(f64::NAN, Currency::Usd).value(), 0.0);
        assert_eq!(Amount::new(f64::INFINITY, Currency::SypNew).value(), 0.0);
        assert_eq!(Amount::new(f64::NEG_INFINITY, Currency::SypOld).value(), 0.0);
        assert_eq!(Amount::new(12.5, Currency::Usd).value(), 12.5);
    }

    #[test]
    fn test_checked_add_same_currency() {
        let a = Amount::new(100.0, Currency::SypNew);
        let b = Amount::new(50.0, Currency::SypNew);
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.value(), 150.0);
        assert_eq!(sum.currency(), Currency::SypNew);
    }

    #[test]
    fn test_checked_add_rejects_mixed_currencies() {
        let syp = Amount::new(100.0, Currency::SypNew);
        let usd = Amount::new(50.0, Currency::Usd);
        let err = syp.checked_add(usd).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CurrencyMismatch {
                left: Currency::SypNew,
                right: Currency::Usd,
            }
        ));
    }

    #[test]
    fn test_checked_sub_allows_transient_negative() {
        let gold = Amount::new(100.0, Currency::SypNew);
        let fee = Amount::new(150.0, Currency::SypNew);
        let raw = gold.checked_sub(fee).unwrap();
        assert_eq!(raw.value(), -50.0);

        // The floor is a separate, final step
        assert_eq!(raw.clamp_non_negative().value(), 0.0);
    }

    #[test]
    fn test_clamp_leaves_positive_values_alone() {
        let a = Amount::new(42.0, Currency::Usd);
        assert_eq!(a.clamp_non_negative().value(), 42.0);
    }

    #[test]
    fn test_scale() {
        let per_gram = Amount::new(64.3, Currency::Usd);
        let ten = per_gram.scale(10.0);
        assert!((ten.value() - 643.0).abs() < 1e-9);
        assert_eq!(ten.currency(), Currency::Usd);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Amount::new(1234.5, Currency::SypNew)),
            "1234.50 SYP"
        );
        assert_eq!(format!("{}", Amount::new(64.3, Currency::Usd)), "64.30 USD");
        assert_eq!(
            format!("{}", Amount::new(100.0, Currency::SypOld)),
            "100.00 SYP-old"
        );
    }

    #[test]
    fn test_currency_wire_spelling() {
        // The browser host speaks these exact string spellings
        assert_eq!(serde_json::to_string(&Currency::SypNew).unwrap(), "\"syp_new\"");
        assert_eq!(serde_json::to_string(&Currency::SypOld).unwrap(), "\"syp_old\"");
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"usd\"");
    }

    #[test]
    fn test_default_currency_is_new_syp() {
        assert_eq!(Currency::default(), Currency::SypNew);
    }
}
