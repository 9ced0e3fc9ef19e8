//! # zahab-core: Pure Pricing Engine for the Zahab Gold Calculator
//!
//! This crate is the **heart** of Zahab. It contains the whole
//! conversion/pricing engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Zahab Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Browser UI (HTML/JS)                           │   │
//! │  │    inputs ──► live recompute ──► karat / piece / unit tables   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JS ⇄ WASM                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    zahab-wasm (bindings)                        │   │
//! │  │    computeAll, resetState, sanitizeNumericField                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ zahab-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Karat   │  │  Amount   │  │ computeAll│  │   hints   │  │   │
//! │  │   │   Coin    │  │ Currency  │  │ convertFee│  │ sanitation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Karat, Coin, ExchangeRate, state/inputs/snapshot)
//! - [`money`] - Currency-tagged Amount type
//! - [`pricing`] - The engine: compute_all, convert_fee, karat/piece/unit math
//! - [`validation`] - Numeric sanitation and advisory validation
//! - [`error`] - Typed domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same inputs and state, same snapshot - always
//! 2. **No I/O**: market data, DOM, persistence are all someone else's job
//! 3. **Single Source of Truth**: USD prices derive from the spot price
//!    directly, never by reversing a SYP figure
//! 4. **Soft Failure**: malformed numbers degrade to 0; there is no input
//!    that makes the engine panic or abort
//!
//! ## Example Usage
//!
//! ```rust
//! use zahab_core::pricing::compute_all;
//! use zahab_core::types::{CalculatorInputs, CalculatorState};
//!
//! let inputs = CalculatorInputs {
//!     spot_price_usd: 2000.0,
//!     exchange_rate: 13_000.0,
//!     weight_grams: 5.0,
//!     ..CalculatorInputs::default()
//! };
//!
//! let snapshot = compute_all(&inputs, &CalculatorState::default());
//!
//! // one troy ounce in USD display terms is the spot price again
//! assert!((snapshot.karat_table.k24.value() * 31.1035 / 13_000.0 - 2000.0).abs() < 1e-6);
//! assert!(snapshot.validation.is_none());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use zahab_core::Amount` instead of
// `use zahab_core::money::Amount`

pub use error::{CoreError, CoreResult, ValidationIssue};
pub use money::{Amount, Currency};
pub use pricing::{compute_all, convert_fee, reset_state};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams per troy ounce. Exact by definition; XAUUSD quotes one troy ounce.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Old Syrian Pounds per new Syrian Pound.
///
/// ## Why a constant?
/// Old SYP is a display convention, not a separately quoted rate: the old
/// figure is always the new figure × 100, and old-denominated inputs
/// normalize by ÷ 100. Keeping one constant guarantees the two directions
/// stay exact inverses.
pub const OLD_PER_NEW: f64 = 100.0;
