//! # bls381
//!
//! A constant-time implementation of the BLS12-381 pairing-friendly curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls381 = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Heap allocation without `std`
//! - `serde`: serde support for scalars and points
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`bls381-api`]: Public error type and serialization traits
//! - [`bls381-algorithms`]: Field tower, groups, pairing and hash-to-curve

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use bls381_algorithms as algorithms;
pub use bls381_api as api;

pub use bls381_algorithms::bls12_381::*;

/// Common imports for bls381 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret};
    pub use bls381_algorithms::bls12_381::{CurveParams, Field, SqrtField};

    // Groups and the pairing
    pub use bls381_algorithms::bls12_381::{
        pairing, G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar,
    };
}
