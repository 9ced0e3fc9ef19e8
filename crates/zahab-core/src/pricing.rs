//! # Pricing Engine
//!
//! The pure conversion/pricing math: from (spot price, exchange rate,
//! weight, fee, selectors) to a fully populated [`CalculatorSnapshot`].
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      compute_all                                        │
//! │                                                                         │
//! │  spot (XAUUSD) ──► gram_price_usd ──┬──► USD-display outputs            │
//! │                         │           │                                   │
//! │  exchange rate ──► normalize ──► × ─┴──► gram_price_local_new           │
//! │                                              │                          │
//! │                    ┌─────────────────────────┼────────────────────┐     │
//! │                    ▼                         ▼                    ▼     │
//! │              karat table              piece price           auxiliary   │
//! │            (5 × purity)         (× weight ± fee, ≥ 0)   (oz/coin/10/100)│
//! │                                                                         │
//! │  RULE 1: USD prices always come from spot directly, never by           │
//! │          reversing a SYP figure.                                       │
//! │  RULE 2: amounts only combine after explicit conversion to one         │
//! │          currency (convert_fee's two-hop path through new SYP).        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Soft-Fail Policy
//! Nothing here panics or errors on bad numeric input. A missing spot price
//! zeroes everything; a missing exchange rate zeroes the local-currency
//! outputs while USD outputs still populate. The advisory
//! [`ValidationIssue`](crate::error::ValidationIssue) tells the UI *why*
//! something is zero.

use crate::money::{Amount, Currency};
use crate::types::{
    AuxiliaryPrices, CalculatorInputs, CalculatorSnapshot, CalculatorState, CoinVariant,
    DisplayCurrency, ExchangeRate, FeeSign, Karat, KaratTable, PiecePrice, TransactionSide,
};
use crate::validation::{sanitize_value, validate};
use crate::{GRAMS_PER_TROY_OUNCE, OLD_PER_NEW};

// =============================================================================
// Base Price Derivation
// =============================================================================

/// Price of one gram of 24k gold in USD, derived from the troy-ounce spot.
///
/// Soft-fails to 0 when the spot price is non-finite or ≤ 0 - never
/// panics, never leaves a stale value.
///
/// ## Example
/// ```rust
/// use zahab_core::pricing::gram_price_usd;
///
/// let per_gram = gram_price_usd(2000.0);
/// assert!((per_gram * 31.1035 - 2000.0).abs() < 1e-9);
///
/// assert_eq!(gram_price_usd(0.0), 0.0);
/// assert_eq!(gram_price_usd(f64::NAN), 0.0);
/// ```
pub fn gram_price_usd(spot_price_usd: f64) -> f64 {
    if !spot_price_usd.is_finite() || spot_price_usd <= 0.0 {
        return 0.0;
    }
    spot_price_usd / GRAMS_PER_TROY_OUNCE
}

/// The two per-gram bases every output group derives from.
///
/// `usd` comes straight from the spot price; `local_new` is `usd` × the
/// normalized exchange rate, and stays 0 when no usable rate exists (the
/// partial-result policy: USD outputs must still populate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GramPrices {
    usd: f64,
    local_new: f64,
}

impl GramPrices {
    /// Gram price of 24k gold in USD.
    #[inline]
    pub const fn usd(&self) -> f64 {
        self.usd
    }

    /// Gram price of 24k gold in new SYP (0 without a usable rate).
    #[inline]
    pub const fn local_new(&self) -> f64 {
        self.local_new
    }

    /// The base a display mode draws from. Old-SYP display shares the
    /// new-SYP base; the ×100 happens at display time.
    #[inline]
    fn base_for(&self, display: DisplayCurrency) -> f64 {
        match display {
            DisplayCurrency::Usd => self.usd,
            DisplayCurrency::New | DisplayCurrency::Old => self.local_new,
        }
    }
}

/// Derives both per-gram bases from the raw inputs.
pub fn gram_prices(spot_price_usd: f64, rate: ExchangeRate) -> GramPrices {
    let usd = gram_price_usd(spot_price_usd);
    let local_new = usd * rate.normalized_to_new();
    GramPrices { usd, local_new }
}

/// Tags a base-currency value with its display currency, applying the
/// old-SYP ×100 as the very last step.
///
/// Doing the ×100 last keeps the advertised exactness: switching a group
/// from new to old multiplies every displayed figure by exactly 100, with
/// no intermediate rounding.
fn display_value(value_in_base: f64, display: DisplayCurrency) -> Amount {
    let value = match display {
        DisplayCurrency::Old => value_in_base * OLD_PER_NEW,
        DisplayCurrency::New | DisplayCurrency::Usd => value_in_base,
    };
    Amount::new(value, display.currency())
}

// =============================================================================
// Karat Table
// =============================================================================

/// Per-gram price for a karat, proportional to the 24k price.
///
/// ## Example
/// ```rust
/// use zahab_core::pricing::karat_price;
/// use zahab_core::types::Karat;
///
/// assert_eq!(karat_price(24.0, Karat::K22), 22.0);
/// assert_eq!(karat_price(24.0, Karat::K24), 24.0);
/// ```
pub fn karat_price(gram_price_24k: f64, karat: Karat) -> f64 {
    gram_price_24k * karat.purity()
}

fn compute_karat_table(prices: &GramPrices, display: DisplayCurrency) -> KaratTable {
    let base = prices.base_for(display);
    let row = |karat: Karat| display_value(karat_price(base, karat), display);
    KaratTable {
        k24: row(Karat::K24),
        k22: row(Karat::K22),
        k21: row(Karat::K21),
        k18: row(Karat::K18),
        k14: row(Karat::K14),
    }
}

// =============================================================================
// Manufacturing-Fee Conversion
// =============================================================================

/// Converts a manufacturing fee between denominations.
///
/// ## The Two-Hop Rule
/// Same-currency conversion is the identity and needs no rate. Everything
/// else normalizes through new SYP first:
/// ```text
///   old SYP ──÷100──►            ┌──×100──► old SYP
///   USD ──×rate_new──►  new SYP ─┤
///   new SYP ──as-is──►           └──÷rate_new──► USD
/// ```
/// There is deliberately no direct old↔USD path, so exactly one
/// normalization rule exists in the engine.
///
/// Any USD leg without a usable rate yields 0 in the target currency
/// (soft-fail, consistent with the base derivation).
///
/// ## Example
/// ```rust
/// use zahab_core::money::Currency;
/// use zahab_core::pricing::convert_fee;
/// use zahab_core::types::{ExchangeRate, RateDenomination};
///
/// let rate = ExchangeRate::new(13_000.0, RateDenomination::New);
/// let fee = convert_fee(50.0, Currency::Usd, Currency::SypNew, rate);
/// assert_eq!(fee.value(), 650_000.0);
/// assert_eq!(fee.currency(), Currency::SypNew);
/// ```
pub fn convert_fee(fee: f64, from: Currency, to: Currency, rate: ExchangeRate) -> Amount {
    let fee = sanitize_value(fee);
    if from == to {
        return Amount::new(fee, to);
    }

    let rate_new = rate.normalized_to_new();

    // Hop 1: source -> new SYP
    let in_new = match from {
        Currency::SypNew => fee,
        Currency::SypOld => fee / OLD_PER_NEW,
        Currency::Usd => {
            if rate_new <= 0.0 {
                return Amount::zero(to);
            }
            fee * rate_new
        }
    };

    // Hop 2: new SYP -> target
    let converted = match to {
        Currency::SypNew => in_new,
        Currency::SypOld => in_new * OLD_PER_NEW,
        Currency::Usd => {
            if rate_new <= 0.0 {
                return Amount::zero(to);
            }
            in_new / rate_new
        }
    };

    Amount::new(converted, to)
}

// =============================================================================
// Piece Price
// =============================================================================

fn compute_piece(
    prices: &GramPrices,
    inputs: &CalculatorInputs,
    state: &CalculatorState,
) -> PiecePrice {
    let display = state.piece_display;
    let currency = display.currency();

    let weight = sanitize_value(inputs.weight_grams);
    let gold_value = display_value(prices.base_for(display), display).scale(weight);
    let fee = convert_fee(
        inputs.manufacturing_fee,
        state.fee_currency,
        currency,
        inputs.rate(),
    );

    let (combined, sign) = match state.transaction_side {
        TransactionSide::Seller => (gold_value.checked_add(fee), FeeSign::Plus),
        TransactionSide::Buyer => (gold_value.checked_sub(fee), FeeSign::Minus),
    };

    // Both operands were built in the display currency, so the mismatch arm
    // is unreachable; degrade to zero rather than panic if it ever fires.
    let total = combined
        .unwrap_or_else(|_| Amount::zero(currency))
        .clamp_non_negative();

    PiecePrice {
        total,
        gold_value,
        fee,
        sign,
    }
}

// =============================================================================
// Auxiliary Unit Prices
// =============================================================================

fn compute_auxiliary(
    prices: &GramPrices,
    coin_variant: CoinVariant,
    display: DisplayCurrency,
) -> AuxiliaryPrices {
    let base = prices.base_for(display);
    let coin = coin_variant.record();
    AuxiliaryPrices {
        ounce: display_value(base * GRAMS_PER_TROY_OUNCE, display),
        coin: display_value(base * coin.pure_gold_grams, display),
        ten_gram: display_value(base * 10.0, display),
        hundred_gram: display_value(base * 100.0, display),
    }
}

// =============================================================================
// Engine Surface
// =============================================================================

/// Recomputes every output group from scratch.
///
/// Idempotent for the same `(inputs, state)` pair, O(1) arithmetic, cheap
/// enough to run unthrottled on every keystroke. Cannot fail: malformed
/// numbers degrade to zero and the advisory `validation` field says why.
pub fn compute_all(inputs: &CalculatorInputs, state: &CalculatorState) -> CalculatorSnapshot {
    let spot = sanitize_value(inputs.spot_price_usd);
    let rate = inputs.rate();
    let prices = gram_prices(spot, rate);

    CalculatorSnapshot {
        karat_table: compute_karat_table(&prices, state.karat_display),
        piece: compute_piece(&prices, inputs, state),
        auxiliary: compute_auxiliary(&prices, state.coin_variant, state.auxiliary_display),
        normalized_spot_syp: prices.local_new(),
        validation: validate(spot, rate, sanitize_value(inputs.weight_grams)),
    }
}

/// The reset contract: default selector flags plus the snapshot for zeroed
/// numeric inputs. The caller replaces its state with the returned one.
pub fn reset_state() -> (CalculatorState, CalculatorSnapshot) {
    let state = CalculatorState::default();
    let snapshot = compute_all(&CalculatorInputs::default(), &state);
    (state, snapshot)
}

// =============================================================================
// Unit Tests
// =============================================================================
