//! Zahab WASM Bindings.
//!
//! This crate exposes the pricing engine to the browser calculator UI.
//!
//! # Surface
//!
//! - [`compute_all`] (`computeAll`) - full recompute on every input change
//! - [`reset_state`] (`resetState`) - default selectors + zeroed snapshot
//! - [`sanitize_numeric_field`] (`sanitizeNumericField`) - raw text-field
//!   value → clean number, applied before inputs reach the engine
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { computeAll, resetState } from '@zahab/wasm';
//!
//! await init();
//!
//! let { state } = resetState();
//!
//! const snapshot = computeAll({
//!     spotPriceUsd: 2000,
//!     exchangeRate: 13000,
//!     exchangeRateDenomination: 'new',
//!     weightGrams: 5,
//!     manufacturingFee: 50000,
//! }, state);
//!
//! render(snapshot.karatTable, snapshot.piece, snapshot.auxiliary);
//! ```
//!
//! All field names cross the boundary in camelCase; the generated
//! TypeScript definitions for the payload types come from zahab-core's
//! ts-rs exports.

#![forbid(unsafe_code)]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use zahab_core::pricing;
use zahab_core::types::{CalculatorInputs, CalculatorSnapshot, CalculatorState};
use zahab_core::validation;

/// What `resetState` hands back: the default selector flags and the
/// snapshot for zeroed numeric inputs.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResult {
    pub state: CalculatorState,
    pub snapshot: CalculatorSnapshot,
}

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
}

/// Recomputes every output group from the given inputs and selector state.
///
/// The engine itself cannot fail; the only error path here is a malformed
/// JS payload (wrong field type, unknown enum spelling).
#[wasm_bindgen(js_name = computeAll)]
pub fn compute_all(inputs: JsValue, state: JsValue) -> Result<JsValue, JsValue> {
    let inputs: CalculatorInputs =
        serde_wasm_bindgen::from_value(inputs).map_err(JsValue::from)?;
    let state: CalculatorState = serde_wasm_bindgen::from_value(state).map_err(JsValue::from)?;

    let snapshot = pricing::compute_all(&inputs, &state);
    serde_wasm_bindgen::to_value(&snapshot).map_err(JsValue::from)
}

/// Returns the default selector flags and the all-zero snapshot.
///
/// The host replaces its state object with `result.state` and renders
/// `result.snapshot`, which clears every field of the calculator at once.
#[wasm_bindgen(js_name = resetState)]
pub fn reset_state() -> Result<JsValue, JsValue> {
    let (state, snapshot) = pricing::reset_state();
    serde_wasm_bindgen::to_value(&ResetResult { state, snapshot }).map_err(JsValue::from)
}

/// Cleans one raw text-field value: empty/non-numeric → 0, negative → 0,
/// non-finite → 0. Call this on each input field before building the
/// `computeAll` payload.
#[wasm_bindgen(js_name = sanitizeNumericField)]
pub fn sanitize_numeric_field(raw: &str) -> f64 {
    validation::parse_numeric_field(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The wasm-bindgen exports are thin wrappers; what we pin down natively
    // is the shape of the payload the reset path serializes.
    #[test]
    fn test_reset_result_wire_shape() {
        let (state, snapshot) = pricing::reset_state();
        let json = serde_json::to_value(ResetResult { state, snapshot }).unwrap();

        assert_eq!(json["state"]["karatDisplay"], "new");
        assert_eq!(json["state"]["transactionSide"], "buyer");
        assert_eq!(json["state"]["feeCurrency"], "syp_new");
        assert_eq!(json["state"]["coinVariant"], "ottoman");
        assert_eq!(json["snapshot"]["normalizedSpotSyp"], 0.0);
        assert_eq!(json["snapshot"]["validation"], "missing_spot_price");
        assert_eq!(json["snapshot"]["piece"]["sign"], "minus");
    }
}
