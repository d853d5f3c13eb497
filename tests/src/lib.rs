//! Timing and property testing utilities for the bls381 library
pub mod constant_time;

use bls381_algorithms::bls12_381::Scalar;

/// A scalar with every bit below 254 set.
pub fn dense_scalar() -> Scalar {
    // 2^254 - 1 is below r
    let mut wide = [0u8; 64];
    wide[32] = 0x3f;
    wide[33..].fill(0xff);
    Scalar::from_bytes_wide(&wide)
}

/// A scalar with a single low bit set.
pub fn sparse_scalar() -> Scalar {
    Scalar::from(1u64)
}
