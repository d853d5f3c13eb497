//! Constant-time BLS12-381 primitives
//!
//! This crate provides the field tower, the G1 and G2 curve groups, the target
//! group Gt with the optimal ate pairing, hash-to-curve and the canonical wire
//! encodings for the BLS12-381 pairing-friendly curve. Every operation on secret
//! data runs in constant time and the library works in `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::bls12_381;
