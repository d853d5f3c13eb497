//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;

use byteorder::{BigEndian, ByteOrder};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::{Field, SqrtField};
use crate::ec::bls12_381::arithmetic::{add_mod, lt_mask, mont_mul, neg_mod, sub_mod};
use crate::error::{validate, Result};

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
pub(crate) const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// Montgomery R = 2^384 mod p
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// Montgomery R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// Montgomery R^3 = 2^1152 mod p
const R3: Fp = Fp([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

/// p - 2, the Fermat inversion exponent
const P_MINUS_2: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// (p + 1) / 4, the square root exponent for p ≡ 3 (mod 4)
const P_PLUS_1_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p - 1) / 2, the Legendre exponent
pub(crate) const P_MINUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// (p - 3) / 4, used by the `Fp2` square root
pub(crate) const P_MINUS_3_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p - 1) / 2 + 1: canonical values at or above this are "large"
const HALF_P_PLUS_1: [u64; 6] = [
    0xdcff_7fff_ffff_d556,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for &b in self.to_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; 6];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(limbs)
    }
}

impl From<u64> for Fp {
    fn from(val: u64) -> Fp {
        Fp([val, 0, 0, 0, 0, 0]) * R2
    }
}

impl_field_ops!(Fp);

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Wrap limbs that are already in Montgomery form
    #[inline]
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Field addition
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        Fp(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Field subtraction
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        Fp(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Field negation
    #[inline]
    pub const fn neg(&self) -> Fp {
        Fp(neg_mod(&self.0, &MODULUS))
    }

    /// Montgomery multiplication
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Fp(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Squaring
    #[inline]
    pub const fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Doubling
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Leave Montgomery form: the canonical integer as limbs
    #[inline]
    const fn to_canonical(self) -> [u64; 6] {
        mont_mul(&self.0, &[1, 0, 0, 0, 0, 0], &MODULUS, INV)
    }

    /// Exponentiation by a public exponent given as little-endian limbs.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse by Fermat's little theorem; zero maps to zero.
    #[inline]
    pub fn invert(&self) -> Fp {
        self.pow_vartime(&P_MINUS_2)
    }

    /// Square root for p ≡ 3 (mod 4): a^((p+1)/4)
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&P_PLUS_1_DIV_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Euler's criterion; zero is treated as a square
    pub fn is_square(&self) -> Choice {
        let legendre = self.pow_vartime(&P_MINUS_1_DIV_2);
        legendre.ct_eq(&Fp::one()) | legendre.is_zero()
    }

    /// Parity of the canonical representative
    pub fn sgn0(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Check if element > (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        let below = lt_mask(&self.to_canonical(), &HALF_P_PLUS_1);
        Choice::from((!below & 1) as u8)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from 48 big-endian bytes; fails for integers ≥ p.
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fp> {
        let mut limbs = [0u64; 6];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = BigEndian::read_u64(&bytes[40 - 8 * i..48 - 8 * i]);
        }

        let in_range = Choice::from((lt_mask(&limbs, &MODULUS) & 1) as u8);

        // Convert to Montgomery form: (a * R^2) / R = aR
        CtOption::new(Fp(limbs) * R2, in_range)
    }

    /// Encode to 48 big-endian bytes
    pub fn to_bytes(self) -> [u8; 48] {
        let limbs = self.to_canonical();
        let mut res = [0u8; 48];
        for (i, limb) in limbs.iter().enumerate() {
            BigEndian::write_u64(&mut res[40 - 8 * i..48 - 8 * i], *limb);
        }
        res
    }

    /// Reduce a 64-byte big-endian integer modulo p.
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Fp {
        // value = hi * 2^384 + lo
        let mut lo = [0u64; 6];
        for (i, limb) in lo.iter_mut().enumerate() {
            *limb = BigEndian::read_u64(&bytes[56 - 8 * i..64 - 8 * i]);
        }
        let hi = [
            BigEndian::read_u64(&bytes[8..16]),
            BigEndian::read_u64(&bytes[0..8]),
            0,
            0,
            0,
            0,
        ];

        Fp(lo) * R2 + Fp(hi) * R3
    }

    /// Uniformly random element by rejection sampling 381-bit candidates.
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 48];
        loop {
            rng.fill_bytes(&mut bytes);
            // p has 381 bits
            bytes[0] &= 0x1f;
            let candidate = Fp::from_bytes(&bytes);
            if bool::from(candidate.is_some()) {
                return candidate.unwrap_or(Fp::zero());
            }
        }
    }
}

impl Field for Fp {
    const BYTE_LEN: usize = 48;

    fn zero() -> Self {
        Fp::zero()
    }

    fn one() -> Self {
        Fp::one()
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> Self {
        Fp::invert(self)
    }

    fn random(rng: impl RngCore) -> Self {
        Fp::random(rng)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Fp::from_bytes", bytes.len(), 48)?;
        let mut array = [0u8; 48];
        array.copy_from_slice(bytes);

        let fp = Fp::from_bytes(&array);
        validate::encoding(fp.is_some(), "Fp::from_bytes", "integer is not below the modulus")?;
        Ok(fp.unwrap_or(Fp::zero()))
    }

    fn write_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }
}

impl SqrtField for Fp {
    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }

    fn is_square(&self) -> Choice {
        Fp::is_square(self)
    }

    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }

    fn lexicographically_largest(&self) -> Choice {
        Fp::lexicographically_largest(self)
    }
}

impl bls381_api::Serialize for Fp {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        <Fp as Field>::from_slice(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> alloc::vec::Vec<u8> {
        Fp::to_bytes(*self).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::bls12_381::arithmetic::compute_inv;

    #[test]
    fn test_inv() {
        assert_eq!(compute_inv(MODULUS[0]), INV);
    }

    #[test]
    fn test_montgomery_constants() {
        assert_eq!(Fp::from(1u64), R);
        assert_eq!(Fp::one().to_canonical(), [1, 0, 0, 0, 0, 0]);
        assert_eq!(Fp::from(2u64) * Fp::from(3u64), Fp::from(6u64));
        // R3 / R = R^2
        assert_eq!(Fp::one() * R3, R2 * R2);
    }

    #[test]
    fn test_from_bytes_wide_small() {
        let mut bytes = [0u8; 64];
        bytes[63] = 7;
        assert_eq!(Fp::from_bytes_wide(&bytes), Fp::from(7u64));

        // 2^384 mod p is R, whose Montgomery form is R^2
        let mut bytes = [0u8; 64];
        bytes[15] = 1;
        assert_eq!(Fp::from_bytes_wide(&bytes), R2);
    }

    #[test]
    fn test_sgn0_and_largest() {
        assert!(!bool::from(Fp::zero().sgn0()));
        assert!(bool::from(Fp::one().sgn0()));
        assert!(!bool::from((-Fp::one()).sgn0()));
        assert!(!bool::from(Fp::one().lexicographically_largest()));
        assert!(bool::from((-Fp::one()).lexicographically_largest()));
        assert!(!bool::from(Fp::zero().lexicographically_largest()));
    }
}
