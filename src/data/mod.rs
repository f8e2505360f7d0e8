//! Data layer - Mapping tables and alphabet constants
//!
//! This module contains the data used for beta code → Greek conversion:
//! - The beta code alphabet (capital marker, diacriticals, sigma forms)
//! - The standard token mapping
//! - The immutable `MappingTable` built from it or from a host resource

pub mod betacode;
pub mod table;

// Re-export commonly used items
pub use betacode::{
    is_diacritical, CAPITAL_MARKER, DIACRITICALS, FINAL_SIGMA, MEDIAL_SIGMA, SIGMA_TERMINATORS,
    STANDARD_MAPPINGS,
};
pub use table::{MappingTable, STANDARD_TABLE};
