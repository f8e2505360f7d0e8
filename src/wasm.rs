//! WASM bindings for polytonic
//!
//! This module provides JavaScript-accessible functions for beta code → Greek conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{BetaCodeConverter, ConvertOptions, EmptyWordPolicy, MappingTable};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmConvertOptions {
    /// Drop empty words produced by runs of spaces
    #[serde(default)]
    pub collapse_empty_words: bool,
    /// Replace a word-final `σ` with `ς`
    #[serde(default = "default_true")]
    pub normalize_final_sigma: bool,
}

#[cfg(feature = "wasm")]
impl Default for WasmConvertOptions {
    fn default() -> Self {
        Self {
            collapse_empty_words: false,
            normalize_final_sigma: true,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<WasmConvertOptions> for ConvertOptions {
    fn from(opts: WasmConvertOptions) -> Self {
        ConvertOptions {
            empty_words: if opts.collapse_empty_words {
                EmptyWordPolicy::Collapse
            } else {
                EmptyWordPolicy::Preserve
            },
            normalize_final_sigma: opts.normalize_final_sigma,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if the mapping table could not be built
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert beta code to Greek with the standard table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "betaToGreek")]
pub fn beta_to_greek_wasm(input: &str) -> String {
    crate::beta_to_greek(input)
}

/// Convert beta code to Greek with options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "betaToGreekWithOptions")]
pub fn beta_to_greek_with_options_wasm(input: &str, options: JsValue) -> String {
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    crate::beta_to_greek_with_options(input, &opts.into())
}

/// Convert beta code to Greek with a custom JSON mapping table
///
/// # Arguments
/// * `input` - Beta code text
/// * `table_json` - JSON object of token → Greek pairs
/// * `options` - Conversion options (may be `undefined`)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "betaToGreekWithTable")]
pub fn beta_to_greek_with_table_wasm(input: &str, table_json: &str, options: JsValue) -> JsValue {
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match MappingTable::from_json(table_json) {
        Ok(table) => ConvertResult {
            output: BetaCodeConverter::with_options(table, opts.into()).convert(input),
            success: true,
            error: None,
        },
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(e.to_string()),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
