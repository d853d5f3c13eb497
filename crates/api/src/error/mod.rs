//! Error handling for the public API

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}
