//! # Domain Types
//!
//! Core domain types for the gold pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ExchangeRate   │   │     Karat       │   │     Coin        │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  rate (f64)     │   │  K24 K22 K21    │   │  Ottoman        │       │
//! │  │  denomination   │   │  K18 K14        │   │  Egyptian       │       │
//! │  │  (New | Old)    │   │  price ∝ K/24   │   │  British        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CalculatorState │   │ CalculatorInputs│   │CalculatorSnapshot│      │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  selectors the  │   │  numbers the    │   │  everything the │       │
//! │  │  user toggled   │   │  user typed     │   │  UI renders     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caller-Owned State
//! The engine itself is stateless. The three display selectors (plus the
//! transaction side, fee currency, and coin choice) live in
//! [`CalculatorState`], owned by the host and passed into every
//! `compute_all` call. `reset_state` hands back the defaults.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Amount, Currency};
use crate::OLD_PER_NEW;

// =============================================================================
// Exchange Rate
// =============================================================================

/// Which denomination an exchange rate was quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateDenomination {
    /// Quoted as new SYP per 1 USD.
    New,
    /// Quoted as old SYP per 1 USD (normalized by ÷100).
    Old,
}

impl Default for RateDenomination {
    fn default() -> Self {
        RateDenomination::New
    }
}

/// A USD/SYP exchange rate: "local currency per 1 USD", tagged with the
/// denomination it was entered in.
///
/// ## Example
/// ```rust
/// use zahab_core::types::{ExchangeRate, RateDenomination};
///
/// // 13,000 new SYP per dollar, quoted the old way as 1,300,000
/// let rate = ExchangeRate::new(1_300_000.0, RateDenomination::Old);
/// assert_eq!(rate.normalized_to_new(), 13_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    rate: f64,
    denomination: RateDenomination,
}

impl ExchangeRate {
    /// Creates an exchange rate. Non-finite rates collapse to 0 (unusable).
    pub fn new(rate: f64, denomination: RateDenomination) -> Self {
        let rate = if rate.is_finite() { rate } else { 0.0 };
        ExchangeRate { rate, denomination }
    }

    /// An absent rate. Local-currency outputs degrade to zero with it.
    pub const fn absent() -> Self {
        ExchangeRate {
            rate: 0.0,
            denomination: RateDenomination::New,
        }
    }

    /// True when the rate can actually convert something (> 0).
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.rate > 0.0
    }

    /// The rate normalized to new SYP per USD, or 0 when unusable.
    ///
    /// All conversion math runs on this single normalized value so there is
    /// exactly one old→new rule in the whole engine.
    pub fn normalized_to_new(&self) -> f64 {
        if !self.is_usable() {
            return 0.0;
        }
        match self.denomination {
            RateDenomination::New => self.rate,
            RateDenomination::Old => self.rate / OLD_PER_NEW,
        }
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        ExchangeRate::absent()
    }
}

// =============================================================================
// Karat
// =============================================================================

/// Gold purity, out of 24 parts.
///
/// Price for karat K is linearly proportional to the 24-karat price:
/// `price(K) = price24 × K / 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Karat {
    K24,
    K22,
    K21,
    K18,
    K14,
}

impl Karat {
    /// Every karat the calculator quotes, in display order.
    pub const ALL: [Karat; 5] = [Karat::K24, Karat::K22, Karat::K21, Karat::K18, Karat::K14];

    /// The karat number (24, 22, ...).
    #[inline]
    pub const fn parts(&self) -> u32 {
        match self {
            Karat::K24 => 24,
            Karat::K22 => 22,
            Karat::K21 => 21,
            Karat::K18 => 18,
            Karat::K14 => 14,
        }
    }

    /// Purity factor relative to 24k (1.0 for K24).
    #[inline]
    pub fn purity(&self) -> f64 {
        self.parts() as f64 / 24.0
    }
}

// =============================================================================
// Historical Coins
// =============================================================================

/// Fixed reference record for a historical gold coin.
///
/// These are immutable constants, never mutated at runtime; the coin price
/// is driven by `pure_gold_grams` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub name: &'static str,
    pub total_weight_grams: f64,
    pub karat: Karat,
    pub pure_gold_grams: f64,
}

/// Ottoman lira: 7.216 g at 22k, 6.61 g pure gold.
pub const OTTOMAN: Coin = Coin {
    name: "Ottoman",
    total_weight_grams: 7.216,
    karat: Karat::K22,
    pure_gold_grams: 6.61,
};

/// Egyptian pound coin: 7.988 g at 22k, 7.322 g pure gold.
pub const EGYPTIAN: Coin = Coin {
    name: "Egyptian",
    total_weight_grams: 7.988,
    karat: Karat::K22,
    pure_gold_grams: 7.322,
};

/// British sovereign-pattern coin: 7.988 g at 22k, 7.322 g pure gold.
pub const BRITISH: Coin = Coin {
    name: "British",
    total_weight_grams: 7.988,
    karat: Karat::K22,
    pure_gold_grams: 7.322,
};

/// Selector for the built-in coin records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CoinVariant {
    Ottoman,
    Egyptian,
    British,
}

impl CoinVariant {
    /// The reference record for this variant.
    pub const fn record(&self) -> &'static Coin {
        match self {
            CoinVariant::Ottoman => &OTTOMAN,
            CoinVariant::Egyptian => &EGYPTIAN,
            CoinVariant::British => &BRITISH,
        }
    }
}

impl Default for CoinVariant {
    /// Ottoman is the fallback when the selector is absent or unrecognized.
    fn default() -> Self {
        CoinVariant::Ottoman
    }
}

// =============================================================================
// Transaction Side
// =============================================================================

/// Whose side of the trade the piece price is quoted for.
///
/// Controls the sign of the manufacturing fee: a seller collects it on top
/// of the gold value, a buyer's payout has it deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSide {
    Buyer,
    Seller,
}

impl Default for TransactionSide {
    fn default() -> Self {
        TransactionSide::Buyer
    }
}

/// The fee sign actually applied to the piece total, for display annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FeeSign {
    /// Fee added (seller side).
    Plus,
    /// Fee subtracted (buyer side).
    Minus,
}

impl FeeSign {
    /// The annotation character the UI appends, e.g. `"50,000 SYP (+)"`.
    #[inline]
    pub const fn symbol(&self) -> char {
        match self {
            FeeSign::Plus => '+',
            FeeSign::Minus => '-',
        }
    }
}

// =============================================================================
// Display Currency
// =============================================================================

/// Per-output-group presentation currency.
///
/// Each output group (karat table, piece price, auxiliary prices) carries
/// its own independent selector. Switching it re-derives the group from the
/// same underlying USD/new-SYP bases - never from already-converted display
/// values, so rounding never compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCurrency {
    New,
    Old,
    Usd,
}

impl DisplayCurrency {
    /// The currency tag carried by amounts rendered in this mode.
    #[inline]
    pub const fn currency(&self) -> Currency {
        match self {
            DisplayCurrency::New => Currency::SypNew,
            DisplayCurrency::Old => Currency::SypOld,
            DisplayCurrency::Usd => Currency::Usd,
        }
    }
}

impl Default for DisplayCurrency {
    fn default() -> Self {
        DisplayCurrency::New
    }
}

// =============================================================================
// Calculator State
// =============================================================================

/// The selector flags that persist between recomputations.
///
/// Owned by the caller and passed into `compute_all`; the engine never
/// stashes them in globals. These are the only things that survive a
/// keystroke - every price is recomputed from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorState {
    /// Display currency for the five-karat table.
    pub karat_display: DisplayCurrency,
    /// Display currency for the piece price breakdown.
    pub piece_display: DisplayCurrency,
    /// Display currency for ounce/coin/10g/100g prices.
    pub auxiliary_display: DisplayCurrency,
    /// Buyer or seller quote.
    pub transaction_side: TransactionSide,
    /// Currency the manufacturing fee is entered in.
    pub fee_currency: Currency,
    /// Which historical coin to quote.
    pub coin_variant: CoinVariant,
}

// =============================================================================
// Calculator Inputs
// =============================================================================

/// The raw numeric inputs, already sanitized by the host
/// (see `validation::parse_numeric_field`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorInputs {
    /// XAUUSD: market price of one troy ounce in USD.
    pub spot_price_usd: f64,
    /// Local currency per 1 USD, in `exchange_rate_denomination`.
    pub exchange_rate: f64,
    /// Denomination the exchange rate was entered in.
    pub exchange_rate_denomination: RateDenomination,
    /// Piece weight in grams.
    pub weight_grams: f64,
    /// Manufacturing fee, in the state's `fee_currency`.
    pub manufacturing_fee: f64,
}

impl CalculatorInputs {
    /// The exchange rate as a tagged value.
    pub fn rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.exchange_rate, self.exchange_rate_denomination)
    }
}

// =============================================================================
// Output Structures
// =============================================================================

/// Per-gram price for each quoted karat, all in one display currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct KaratTable {
    pub k24: Amount,
    pub k22: Amount,
    pub k21: Amount,
    pub k18: Amount,
    pub k14: Amount,
}

impl KaratTable {
    /// Row lookup, handy for iterating the table in tests and UI code.
    pub fn get(&self, karat: Karat) -> Amount {
        match karat {
            Karat::K24 => self.k24,
            Karat::K22 => self.k22,
            Karat::K21 => self.k21,
            Karat::K18 => self.k18,
            Karat::K14 => self.k14,
        }
    }
}

/// Piece price breakdown: total, its two components, and the fee sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PiecePrice {
    /// Gold value ± fee, floored at zero.
    pub total: Amount,
    /// Per-gram price × weight (not floored).
    pub gold_value: Amount,
    /// Manufacturing fee converted into the display currency (not floored).
    pub fee: Amount,
    /// Whether the fee was added or subtracted.
    pub sign: FeeSign,
}

/// Unit prices derived from the same per-gram bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryPrices {
    /// One troy ounce (gram price × 31.1035).
    pub ounce: Amount,
    /// The selected historical coin (gram price × pure gold grams).
    pub coin: Amount,
    pub ten_gram: Amount,
    pub hundred_gram: Amount,
}

/// Everything the UI renders, recomputed from scratch on each call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSnapshot {
    pub karat_table: KaratTable,
    pub piece: PiecePrice,
    pub auxiliary: AuxiliaryPrices,
    /// The 24k gram price in new SYP (the value the UI echoes back into
    /// its read-only "gold price" field). Raw, unrounded.
    pub normalized_spot_syp: f64,
    /// First unmet input precondition, if any. Advisory only.
    pub validation: Option<crate::error::ValidationIssue>,
}

// =============================================================================
// Unit Tests
// =============================================================================
