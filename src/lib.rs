//! # polytonic
//!
//! Beta code → polytonic Greek transliteration, written in Rust.
//!
//! ## Features
//!
//! - **Single Pass**: one left-to-right scan per word, linear in the input
//! - **Total**: never fails on malformed input; unmapped groups pass through
//! - **Pluggable Tables**: the standard table or any host-supplied key/value resource
//! - **Final Sigma**: word-final `σ` becomes `ς`, also before `, . : ;`
//! - **Reading Support**: dictionary lookups and persisted reading positions
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Standard Table
//!
//! ```rust
//! use polytonic::beta_to_greek;
//!
//! let greek = beta_to_greek("*)en a)rxh=| h)=n o( lo/gos");
//! assert_eq!(greek, "Ἐν ἀρχῇ ἦν ὁ λόγος\n");
//! ```
//!
//! ### Custom Table
//!
//! ```rust
//! use polytonic::{BetaCodeConverter, MappingTable};
//!
//! let table = MappingTable::from_json(r#"{"a": "α", "a/": "ά", "*a": "Α"}"#)?;
//! let converter = BetaCodeConverter::new(table);
//! assert_eq!(converter.convert_word("a/"), "ά");
//! assert_eq!(converter.convert_word("*a"), "Α");
//! # Ok::<(), polytonic::ConversionError>(())
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - alphabet constants and mapping tables
pub mod data;

/// Feature modules - dictionary and reading position
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::betacode;
pub use core::{
    beta_to_greek, beta_to_greek_with_options, BetaCodeConverter, ConvertOptions,
    EmptyWordPolicy, WordScanner,
};

// Re-export data
pub use data::{
    is_diacritical, MappingTable, CAPITAL_MARKER, DIACRITICALS, FINAL_SIGMA, MEDIAL_SIGMA,
    SIGMA_TERMINATORS, STANDARD_TABLE,
};

// Re-export feature modules
pub use features::dictionary;
pub use features::reading;
pub use features::{Dictionary, Entry, ReadingPosition, ReadingSession, Work};

// Re-export utilities
pub use utils::error::{ConversionError, ConversionResult};
pub use utils::files;
