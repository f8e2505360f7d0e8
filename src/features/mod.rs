//! Feature modules - Collaborators of the reading application
//!
//! This module contains the bookkeeping layered on top of the converter:
//! - Dictionary entry store with random entry selection
//! - Reading position tracking with persistence

pub mod dictionary;
pub mod reading;

// Re-export commonly used types
pub use dictionary::{Dictionary, Entry};
pub use reading::{
    Book, MemoryPositionStore, PositionStore, ReadingPosition, ReadingSession, Work,
};

#[cfg(not(target_arch = "wasm32"))]
pub use reading::JsonPositionStore;
