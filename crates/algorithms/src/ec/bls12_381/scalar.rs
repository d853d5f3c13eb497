//! BLS12-381 scalar field F_r where r = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001

use alloc::vec::Vec;
use core::fmt;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroizing;

use super::arithmetic::{add_mod, lt_mask, mont_mul, neg_mod, sub_mod};
use super::field::Field;
use super::hash_to_curve::expander::expand_message_xmd;
use crate::error::{validate, Result};

/// Scalar field element of BLS12-381
/// Internal: Four 64-bit limbs in little-endian Montgomery form
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [u64; 4]);

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for &b in self.to_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar([val, 0, 0, 0]) * R2
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

// Constants
/// Group order r
pub(crate) const MODULUS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xffff_fffe_ffff_ffff;

/// R = 2^256 mod r
const R: Scalar = Scalar([
    0x0000_0001_ffff_fffe,
    0x5884_b7fa_0003_4802,
    0x998c_4fef_ecbc_4ff5,
    0x1824_b159_acc5_056f,
]);

/// R^2 = 2^512 mod r
const R2: Scalar = Scalar([
    0xc999_e990_f3f2_9c6d,
    0x2b6c_edcb_8792_5c23,
    0x05d3_1496_7254_398f,
    0x0748_d9d9_9f59_ff11,
]);

/// R^3 = 2^768 mod r
const R3: Scalar = Scalar([
    0xc62c_1807_439b_73af,
    0x1b3e_0d18_8cf0_6990,
    0x73d1_3c71_c7b5_f418,
    0x6e2a_5bb9_c8db_33e9,
]);

impl_field_ops!(Scalar);

impl Scalar {
    /// Returns zero, the additive identity.
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Returns one, the multiplicative identity.
    #[inline]
    pub const fn one() -> Scalar {
        R
    }

    /// Checks if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }

    /// Doubles this field element.
    #[inline]
    pub const fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Creates a scalar from four `u64` limbs (little-endian). This function will
    /// convert the raw integer into Montgomery form.
    pub const fn from_raw(val: [u64; 4]) -> Self {
        (&Scalar(val)).mul(&R2)
    }

    /// Canonical integer limbs, little-endian
    #[inline]
    const fn to_canonical(self) -> [u64; 4] {
        mont_mul(&self.0, &[1, 0, 0, 0], &MODULUS, INV)
    }

    /// Create from 32 big-endian bytes if canonical
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Scalar> {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = BigEndian::read_u64(&bytes[24 - 8 * i..32 - 8 * i]);
        }

        let is_some = Choice::from((lt_mask(&limbs, &MODULUS) & 1) as u8);

        // Convert to Montgomery: (a * R^2) / R = aR
        CtOption::new(Scalar(limbs) * R2, is_some)
    }

    /// Convert to 32 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let limbs = self.to_canonical();
        let mut res = [0u8; 32];
        for (i, limb) in limbs.iter().enumerate() {
            BigEndian::write_u64(&mut res[24 - 8 * i..32 - 8 * i], *limb);
        }
        res
    }

    /// Canonical little-endian bytes, the digit order scalar multiplication walks
    pub(crate) fn to_le_bytes(&self) -> [u8; 32] {
        let limbs = self.to_canonical();
        let mut res = [0u8; 32];
        LittleEndian::write_u64_into(&limbs, &mut res);
        res
    }

    /// Create from a 512-bit big-endian integer reduced mod r
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let mut hi = [0u64; 4];
        let mut lo = [0u64; 4];
        for i in 0..4 {
            hi[i] = BigEndian::read_u64(&bytes[24 - 8 * i..32 - 8 * i]);
            lo[i] = BigEndian::read_u64(&bytes[56 - 8 * i..64 - 8 * i]);
        }
        Scalar(lo) * R2 + Scalar(hi) * R3
    }

    /// Uniformly random scalar from 512 random bits
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        Scalar::from_bytes_wide(&buf)
    }

    /// Hashes arbitrary data to a scalar field element.
    ///
    /// The data is expanded to 64 bytes with `expand_message_xmd` over
    /// SHA-256 and reduced modulo r. DSTs longer than 255 bytes are hashed
    /// down by the expander.
    pub fn hash_to_field(data: &[u8], dst: &[u8]) -> Result<Self> {
        let expanded = Zeroizing::new(expand_message_xmd(data, dst, 64)?);
        let mut wide = Zeroizing::new([0u8; 64]);
        wide.copy_from_slice(&expanded);
        Ok(Self::from_bytes_wide(&wide))
    }

    /// Computes the square of this scalar.
    #[inline]
    pub const fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Multiplicative inverse; zero maps to zero.
    ///
    /// Computes self^(r − 2) with a fixed addition chain.
    pub fn invert(&self) -> Scalar {
        #[inline(always)]
        fn square_assign_multi(n: &mut Scalar, num_times: usize) {
            for _ in 0..num_times {
                *n = n.square();
            }
        }
        // Addition chain from github.com/kwantam/addchain
        let mut t0 = self.square();
        let mut t1 = t0 * self;
        let mut t16 = t0.square();
        let mut t6 = t16.square();
        let mut t5 = t6 * t0;
        t0 = t6 * t16;
        let mut t12 = t5 * t16;
        let mut t2 = t6.square();
        let mut t7 = t5 * t6;
        let mut t15 = t0 * t5;
        let mut t17 = t12.square();
        t1 *= t17;
        let mut t3 = t7 * t2;
        let t8 = t1 * t17;
        let t4 = t8 * t2;
        let t9 = t8 * t7;
        t7 = t4 * t5;
        let t11 = t4 * t17;
        t5 = t9 * t17;
        let t14 = t7 * t15;
        let t13 = t11 * t12;
        t12 = t11 * t17;
        t15 *= &t12;
        t16 *= &t15;
        t3 *= &t16;
        t17 *= &t3;
        t0 *= &t17;
        t6 *= &t0;
        t2 *= &t6;
        square_assign_multi(&mut t0, 8);
        t0 *= &t17;
        square_assign_multi(&mut t0, 9);
        t0 *= &t16;
        square_assign_multi(&mut t0, 9);
        t0 *= &t15;
        square_assign_multi(&mut t0, 9);
        t0 *= &t15;
        square_assign_multi(&mut t0, 7);
        t0 *= &t14;
        square_assign_multi(&mut t0, 7);
        t0 *= &t13;
        square_assign_multi(&mut t0, 10);
        t0 *= &t12;
        square_assign_multi(&mut t0, 9);
        t0 *= &t11;
        square_assign_multi(&mut t0, 8);
        t0 *= &t8;
        square_assign_multi(&mut t0, 8);
        t0 *= self;
        square_assign_multi(&mut t0, 14);
        t0 *= &t9;
        square_assign_multi(&mut t0, 10);
        t0 *= &t8;
        square_assign_multi(&mut t0, 15);
        t0 *= &t7;
        square_assign_multi(&mut t0, 10);
        t0 *= &t6;
        square_assign_multi(&mut t0, 8);
        t0 *= &t5;
        square_assign_multi(&mut t0, 16);
        t0 *= &t3;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 7);
        t0 *= &t4;
        square_assign_multi(&mut t0, 9);
        t0 *= &t2;
        square_assign_multi(&mut t0, 8);
        t0 *= &t3;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 8);
        t0 *= &t3;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 8);
        t0 *= &t2;
        square_assign_multi(&mut t0, 5);
        t0 *= &t1;
        square_assign_multi(&mut t0, 5);
        t0 *= &t1;

        t0
    }

    /// Multiplies `rhs` by `self`, returning the result.
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        Scalar(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Subtracts `rhs` from `self`, returning the result.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Scalar(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Adds `rhs` to `self`, returning the result.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Scalar(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negates `self`.
    #[inline]
    pub const fn neg(&self) -> Self {
        Scalar(neg_mod(&self.0, &MODULUS))
    }
}

impl From<Scalar> for [u8; 32] {
    fn from(value: Scalar) -> [u8; 32] {
        value.to_bytes()
    }
}

impl<'a> From<&'a Scalar> for [u8; 32] {
    fn from(value: &'a Scalar) -> [u8; 32] {
        value.to_bytes()
    }
}

impl Field for Scalar {
    const BYTE_LEN: usize = 32;

    fn zero() -> Self {
        Scalar::zero()
    }

    fn one() -> Self {
        Scalar::one()
    }

    fn is_zero(&self) -> Choice {
        Scalar::is_zero(self)
    }

    fn square(&self) -> Self {
        Scalar::square(self)
    }

    fn double(&self) -> Self {
        Scalar::double(self)
    }

    fn invert(&self) -> Self {
        Scalar::invert(self)
    }

    fn random(rng: impl RngCore) -> Self {
        Scalar::random(rng)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Scalar::from_bytes", bytes.len(), 32)?;
        let mut array = [0u8; 32];
        array.copy_from_slice(bytes);

        let s = Scalar::from_bytes(&array);
        validate::encoding(s.is_some(), "Scalar::from_bytes", "integer is not below the group order")?;
        Ok(s.unwrap_or(Scalar::zero()))
    }

    fn write_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }
}

impl bls381_api::Serialize for Scalar {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        <Scalar as Field>::from_slice(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Scalar::to_bytes(self).to_vec()
    }
}

impl bls381_api::SerializeSecret for Scalar {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        <Scalar as Field>::from_slice(bytes).map_err(Into::into)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(Scalar::to_bytes(self).to_vec())
    }
}
