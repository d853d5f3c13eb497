//! Hashing arbitrary messages to G₁ and G₂.
//!
//! The suites are `BLS12381G1_XMD:SHA-256_SSWU_RO_` and
//! `BLS12381G2_XMD:SHA-256_SSWU_RO_` (and the `_NU_` encodings): expand the
//! message, reduce it to field elements, send each through the simplified SWU
//! map and the isogeny, add, and clear the cofactor. The SHAKE256 variants
//! only swap the expander.

use alloc::vec::Vec;

use super::curve::{CurveParams, Projective};
use super::field::{Field, Fp, Fp2, SqrtField};
use super::g1::{G1Params, G1Projective};
use super::g2::{G2Params, G2Projective};
use super::isogeny::{self, IsoCurve};
use crate::error::Result;

pub mod expander;
pub(crate) mod sswu;

pub use expander::{expand_message_xmd, expand_message_xof, ExpandMessage, ExpandMsgXmd, ExpandMsgXof};

/// Bytes of expanded output per base field element: ⌈(⌈log₂ p⌉ + 128) / 8⌉
const L: usize = 64;

/// Fields that uniform bytes can be reduced into.
pub trait HashToField: Field {
    /// Number of base field elements in one element of this field
    const DEGREE: usize;

    /// Reduce `DEGREE · 64` uniform bytes to a field element.
    ///
    /// # Panics
    /// Panics if `okm.len() != DEGREE * 64`.
    fn from_okm(okm: &[u8]) -> Self;
}

fn fp_from_okm(okm: &[u8]) -> Fp {
    let mut wide = [0u8; L];
    wide.copy_from_slice(okm);
    Fp::from_bytes_wide(&wide)
}

impl HashToField for Fp {
    const DEGREE: usize = 1;

    fn from_okm(okm: &[u8]) -> Fp {
        fp_from_okm(okm)
    }
}

impl HashToField for Fp2 {
    const DEGREE: usize = 2;

    fn from_okm(okm: &[u8]) -> Fp2 {
        assert_eq!(okm.len(), 2 * L);
        Fp2 {
            c0: fp_from_okm(&okm[..L]),
            c1: fp_from_okm(&okm[L..]),
        }
    }
}

/// Hash a message to `count` field elements.
pub fn hash_to_field<F: HashToField, X: ExpandMessage>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
) -> Result<Vec<F>> {
    let chunk = F::DEGREE * L;
    let okm = X::expand_message(msg, dst, count * chunk)?;
    Ok(okm.chunks_exact(chunk).map(F::from_okm).collect())
}

/// Curves whose points can be hashed to through an isogenous SSWU curve.
pub(crate) trait MapToCurve: CurveParams
where
    Self::Base: HashToField,
{
    /// The isogenous curve and its map onto this one
    fn iso_curve() -> &'static IsoCurve<Self::Base>;

    /// Map a point of the isogenous curve onto this curve.
    fn iso_map(x: &Self::Base, y: &Self::Base, z: &Self::Base) -> Projective<Self>;

    /// Deterministic map of one field element onto the curve (not into the
    /// subgroup).
    fn map_to_curve(u: &Self::Base) -> Projective<Self> {
        let (x, y) = sswu::map_to_curve_simple_swu(u, Self::iso_curve());
        Self::iso_map(&x, &y, &Self::Base::one())
    }
}

impl MapToCurve for G1Params {
    fn iso_curve() -> &'static IsoCurve<Fp> {
        &isogeny::g1::ISO_CURVE
    }

    fn iso_map(x: &Fp, y: &Fp, z: &Fp) -> G1Projective {
        isogeny::g1::iso_map(x, y, z)
    }
}

impl MapToCurve for G2Params {
    fn iso_curve() -> &'static IsoCurve<Fp2> {
        &isogeny::g2::ISO_CURVE
    }

    fn iso_map(x: &Fp2, y: &Fp2, z: &Fp2) -> G2Projective {
        isogeny::g2::iso_map(x, y, z)
    }
}

/// Random-oracle hash to the order-r subgroup.
pub(crate) fn hash_to_curve<C, X>(msg: &[u8], dst: &[u8]) -> Result<Projective<C>>
where
    C: MapToCurve,
    C::Base: HashToField + SqrtField,
    X: ExpandMessage,
{
    let u = hash_to_field::<C::Base, X>(msg, dst, 2)?;
    let q0 = C::map_to_curve(&u[0]);
    let q1 = C::map_to_curve(&u[1]);
    Ok((q0 + q1).clear_cofactor())
}

/// Nonuniform encoding to the order-r subgroup, from a single field element.
pub(crate) fn encode_to_curve<C, X>(msg: &[u8], dst: &[u8]) -> Result<Projective<C>>
where
    C: MapToCurve,
    C::Base: HashToField + SqrtField,
    X: ExpandMessage,
{
    let u = hash_to_field::<C::Base, X>(msg, dst, 1)?;
    Ok(C::map_to_curve(&u[0]).clear_cofactor())
}

/// `BLS12381G1_XMD:SHA-256_SSWU_RO_`
pub fn hash_to_g1(msg: &[u8], dst: &[u8]) -> Result<G1Projective> {
    hash_to_curve::<G1Params, ExpandMsgXmd>(msg, dst)
}

/// `BLS12381G2_XMD:SHA-256_SSWU_RO_`
pub fn hash_to_g2(msg: &[u8], dst: &[u8]) -> Result<G2Projective> {
    hash_to_curve::<G2Params, ExpandMsgXmd>(msg, dst)
}

/// `BLS12381G1_XMD:SHA-256_SSWU_NU_`
pub fn encode_to_g1(msg: &[u8], dst: &[u8]) -> Result<G1Projective> {
    encode_to_curve::<G1Params, ExpandMsgXmd>(msg, dst)
}

/// `BLS12381G2_XMD:SHA-256_SSWU_NU_`
pub fn encode_to_g2(msg: &[u8], dst: &[u8]) -> Result<G2Projective> {
    encode_to_curve::<G2Params, ExpandMsgXmd>(msg, dst)
}

/// `BLS12381G1_XOF:SHAKE256_SSWU_RO_`
pub fn hash_to_g1_xof(msg: &[u8], dst: &[u8]) -> Result<G1Projective> {
    hash_to_curve::<G1Params, ExpandMsgXof>(msg, dst)
}

/// `BLS12381G2_XOF:SHAKE256_SSWU_RO_`
pub fn hash_to_g2_xof(msg: &[u8], dst: &[u8]) -> Result<G2Projective> {
    hash_to_curve::<G2Params, ExpandMsgXof>(msg, dst)
}
