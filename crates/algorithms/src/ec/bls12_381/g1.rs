//! G₁ group implementation for BLS12-381: the order-r subgroup of `y² = x³ + 4` over Fp.

use alloc::vec::Vec;

use subtle::{Choice, ConstantTimeEq};

use super::curve::{Affine, CurveParams, Projective};
use super::field::fp::Fp;
use crate::error::Result;

/// Curve constants for G₁
#[derive(Copy, Clone, Debug)]
pub struct G1Params;

/// G₁ affine point representation.
pub type G1Affine = Affine<G1Params>;

/// G₁ projective point representation.
pub type G1Projective = Projective<G1Params>;

/// b = 4 in Montgomery form
const B: Fp = Fp::from_raw_unchecked([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// A nontrivial third root of unity in Fp
const BETA: Fp = Fp::from_raw_unchecked([
    0x30f1_361b_798a_64e8,
    0xf3b8_ddab_7ece_5a2a,
    0x16a8_ca3a_c615_77f7,
    0xc26a_2ff8_74fd_029b,
    0x3636_b766_6070_1c6e,
    0x051b_a4ab_241b_6160,
]);

impl CurveParams for G1Params {
    type Base = Fp;

    const NAME: &'static str = "G1";

    const B: Fp = B;

    const GENERATOR_X: Fp = Fp::from_raw_unchecked([
        0x5cb3_8790_fd53_0c16,
        0x7817_fc67_9976_fff5,
        0x154f_95c7_143b_a1c1,
        0xf0ae_6acd_f3d0_e747,
        0xedce_6ecc_21db_f440,
        0x1201_7741_9e0b_fb75,
    ]);

    const GENERATOR_Y: Fp = Fp::from_raw_unchecked([
        0xbaac_93d5_0ce7_2271,
        0x8c22_631a_7918_fd8e,
        0xdd59_5f13_5707_25ce,
        0x51ac_5829_5040_5194,
        0x0e1c_8c3f_ad00_59c0,
        0x0bbc_3efc_5008_a26a,
    ]);

    #[inline]
    fn mul_by_3b(a: &Fp) -> Fp {
        let a = a + a; // 2
        let a = a + a; // 4
        a + a + a // 12
    }

    fn is_torsion_free(p: &G1Affine) -> Choice {
        // Section 6 of https://eprint.iacr.org/2021/1130:
        // P is in the subgroup iff endomorphism(P) == -[x²]P
        let minus_x_squared_times_p = -G1Projective::from(p).mul_by_x().mul_by_x();
        minus_x_squared_times_p.ct_eq(&G1Projective::from(endomorphism(p)))
    }

    fn clear_cofactor(p: &G1Projective) -> G1Projective {
        // Multiplication by 1 − x, which is effective for G₁
        p - p.mul_by_x()
    }
}

/// The GLV endomorphism (x, y) ↦ (βx, y)
fn endomorphism(p: &G1Affine) -> G1Affine {
    let mut res = *p;
    res.x *= BETA;
    res
}

impl G1Affine {
    /// Serialize to 48 compressed bytes.
    pub fn to_compressed(&self) -> [u8; 48] {
        let mut res = [0u8; 48];
        self.write_compressed(&mut res);
        res
    }

    /// Serialize to 96 uncompressed bytes (x ‖ y).
    pub fn to_uncompressed(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        self.write_uncompressed(&mut res);
        res
    }

    /// Deserialize compressed bytes, checking subgroup membership.
    pub fn from_compressed(bytes: &[u8; 48]) -> Result<Self> {
        Self::read_compressed(bytes)
    }

    /// Deserialize compressed bytes without the subgroup check.
    pub fn from_compressed_unchecked(bytes: &[u8; 48]) -> Result<Self> {
        Self::read_compressed_unchecked(bytes)
    }

    /// Deserialize uncompressed bytes, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; 96]) -> Result<Self> {
        Self::read_uncompressed(bytes)
    }

    /// Deserialize uncompressed bytes without any validity check.
    pub fn from_uncompressed_unchecked(bytes: &[u8; 96]) -> Result<Self> {
        Self::read_uncompressed_unchecked(bytes)
    }

    /// On the curve and in the order-r subgroup
    pub fn is_on_g1(&self) -> Choice {
        self.is_valid()
    }
}

impl G1Projective {
    /// On the curve and in the order-r subgroup
    pub fn is_on_g1(&self) -> Choice {
        self.is_valid()
    }
}

impl bls381_api::Serialize for G1Affine {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        G1Affine::read_compressed(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}
