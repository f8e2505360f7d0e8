//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Resource resolution for tables, dictionaries and works

pub mod error;
pub mod files;

// Re-export commonly used items
pub use error::{ConversionError, ConversionResult};
pub use files::{
    resource_extension, MemoryResourceResolver, NoopResourceResolver, ResourceError,
    ResourceResolver,
};

#[cfg(not(target_arch = "wasm32"))]
pub use files::StdResourceResolver;
