//! Core conversion modules
//!
//! This module contains the conversion engine:
//! - `betacode`: beta code to polytonic Greek converter

pub mod betacode;

// Re-export main types and functions from betacode
pub use betacode::{
    beta_to_greek, beta_to_greek_with_options, BetaCodeConverter, ConvertOptions,
    EmptyWordPolicy, WordScanner,
};
