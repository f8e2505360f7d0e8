//! Beta code → polytonic Greek conversion
//!
//! Source text is split into lines and words; each word is scanned on its
//! own, its final sigma fixed up, and the words and lines joined back.
//!
//! ## Module Structure
//!
//! - `scanner`: per-word state machine grouping letters with diacriticals
//! - `resolve`: composite lookup with pass-through for unmapped groups
//! - `sigma`: word-final sigma selection
//! - `segment`: line/word splitting and reassembly

pub mod resolve;
pub mod scanner;
pub mod segment;
pub mod sigma;


use std::sync::Arc;

use crate::data::table::{MappingTable, STANDARD_TABLE};

pub use resolve::resolve_group;
pub use scanner::WordScanner;
pub use segment::{reassemble, split_lines, split_words};
pub use sigma::normalize_final_sigma;

// =============================================================================
// Conversion Options
// =============================================================================

/// What to do with the empty words left by consecutive spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyWordPolicy {
    /// Keep them, so runs of spaces survive conversion
    #[default]
    Preserve,
    /// Drop them, so words are always separated by exactly one space
    Collapse,
}

/// Options for beta code conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Handling of empty words
    /// Default: Preserve
    pub empty_words: EmptyWordPolicy,

    /// Replace a word-final `σ` with `ς`
    /// Default: true
    pub normalize_final_sigma: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            empty_words: EmptyWordPolicy::Preserve,
            normalize_final_sigma: true,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the source's spacing exactly
    pub fn faithful() -> Self {
        Self::default()
    }

    /// Collapse runs of spaces between words
    pub fn compact() -> Self {
        Self {
            empty_words: EmptyWordPolicy::Collapse,
            ..Self::default()
        }
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Beta code converter bound to one mapping table
///
/// Conversion never fails: anything the table does not cover is copied
/// through. Clones share the table.
#[derive(Debug, Clone)]
pub struct BetaCodeConverter {
    table: Arc<MappingTable>,
    options: ConvertOptions,
}

impl BetaCodeConverter {
    pub fn new(table: impl Into<Arc<MappingTable>>) -> Self {
        Self::with_options(table, ConvertOptions::default())
    }

    pub fn with_options(table: impl Into<Arc<MappingTable>>, options: ConvertOptions) -> Self {
        Self {
            table: table.into(),
            options,
        }
    }

    /// Converter over the shared standard table
    pub fn standard() -> Self {
        Self::new(Arc::clone(&STANDARD_TABLE))
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert text made of newline-separated lines of space-separated words
    pub fn convert(&self, source: &str) -> String {
        reassemble(source, self.options.empty_words, |word| {
            self.convert_word(word)
        })
    }

    /// Convert a single word
    pub fn convert_word(&self, word: &str) -> String {
        let converted = WordScanner::scan(&self.table, word);
        if self.options.normalize_final_sigma {
            normalize_final_sigma(converted)
        } else {
            converted
        }
    }
}

impl Default for BetaCodeConverter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convert beta code with the standard table and default options
pub fn beta_to_greek(input: &str) -> String {
    BetaCodeConverter::standard().convert(input)
}

/// Convert beta code with the standard table and custom options
pub fn beta_to_greek_with_options(input: &str, options: &ConvertOptions) -> String {
    BetaCodeConverter::with_options(Arc::clone(&STANDARD_TABLE), options.clone()).convert(input)
}
