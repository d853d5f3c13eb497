//! BLS12-381 pairing-friendly elliptic curve implementation.
//!
//! The field tower, the groups G₁, G₂ and Gt, the optimal ate pairing and
//! hashing to the curve. Secret-dependent operations run in constant time.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

// Module declarations
#[macro_use]
mod ops;

mod arithmetic;
mod curve;
mod isogeny;

pub mod field;
pub mod g1;
pub mod g2;
pub mod hash_to_curve;
pub mod pairings;
pub mod scalar;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

// Public API exports
pub use curve::{Affine, CurveParams, Projective};
pub use field::{Cyclotomic, Field, Fp, Fp12, Fp2, Fp6, SqrtField};
pub use g1::{G1Affine, G1Params, G1Projective};
pub use g2::{G2Affine, G2Params, G2Projective};
pub use hash_to_curve::{
    encode_to_g1, encode_to_g2, expand_message_xmd, expand_message_xof, hash_to_field, hash_to_g1,
    hash_to_g1_xof, hash_to_g2, hash_to_g2_xof, ExpandMessage, ExpandMsgXmd, ExpandMsgXof,
    HashToField,
};
pub use pairings::{
    miller_loop, multi_miller_loop, pairing, prod_pair, prod_pair_frac, Gt, MillerLoopResult,
};
pub use scalar::Scalar;

// BLS curve parameters
/// BLS parameter x = -0xd201000000010000
const BLS_X: u64 = 0xd201_0000_0001_0000;
/// Sign of BLS parameter x
const BLS_X_IS_NEGATIVE: bool = true;
