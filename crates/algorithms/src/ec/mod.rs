//! Elliptic curve primitives
//!
//! Only the BLS12-381 pairing-friendly curve is provided.

pub mod bls12_381;

pub use bls12_381::{
    G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, pairing,
};
