//! Public API types for the bls381 library
//!
//! This crate holds the error type returned across the public surface and the
//! byte serialization traits implemented by every wire-encodable element.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Serialize, SerializeSecret};
