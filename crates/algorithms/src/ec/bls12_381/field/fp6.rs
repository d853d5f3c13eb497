//! Cubic extension `Fp6 = Fp2[v]/(v³ − ξ)` with ξ = 1 + u

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use super::fp2::Fp2;
use super::Field;
use crate::error::{validate, Result};

/// ξ^((p−1)/3), the Frobenius twist of the v coefficient
const FROBENIUS_COEFF_C1: Fp2 = Fp2 {
    c0: Fp::zero(),
    c1: Fp::from_raw_unchecked([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]),
};

/// ξ^(2(p−1)/3), the Frobenius twist of the v² coefficient
const FROBENIUS_COEFF_C2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ]),
    c1: Fp::zero(),
};

/// Element c0 + c1·v + c2·v² of Fp6
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of v
    pub c1: Fp2,
    /// Coefficient of v²
    pub c2: Fp2,
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl_field_ops!(Fp6);

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Field addition
    #[inline]
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    /// Field subtraction
    #[inline]
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    /// Field negation
    #[inline]
    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// Doubling
    #[inline]
    pub fn double(&self) -> Fp6 {
        self.add(self)
    }

    /// Multiply by v: (c0, c1, c2) ↦ (ξ·c2, c0, c1)
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Product with the sparse element c0 + c1·v
    pub fn mul_by_01(&self, c0: &Fp2, c1: &Fp2) -> Fp6 {
        let a_a = self.c0 * c0;
        let b_b = self.c1 * c1;

        let t1 = (self.c2 * c1).mul_by_nonresidue() + a_a;
        let t2 = (c0 + c1) * (self.c0 + self.c1) - a_a - b_b;
        let t3 = self.c2 * c0 + b_b;

        Fp6 {
            c0: t1,
            c1: t2,
            c2: t3,
        }
    }

    /// Product with the sparse element c1·v
    pub fn mul_by_1(&self, c1: &Fp2) -> Fp6 {
        Fp6 {
            c0: (self.c2 * c1).mul_by_nonresidue(),
            c1: self.c0 * c1,
            c2: self.c1 * c1,
        }
    }

    /// Frobenius endomorphism x ↦ x^p
    pub fn frobenius_map(&self) -> Self {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map() * FROBENIUS_COEFF_C1,
            c2: self.c2.frobenius_map() * FROBENIUS_COEFF_C2,
        }
    }

    /// Devegili–ÓhÉigeartaigh–Scott–Dahab product with five Fp2 multiplications
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let v2 = self.c2 * rhs.c2;
        let s01 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);
        let s02 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2);
        let s12 = (self.c1 + self.c2) * (rhs.c1 + rhs.c2);

        Fp6 {
            c0: (s12 - v1 - v2).mul_by_nonresidue() + v0,
            c1: s01 - v0 - v1 + v2.mul_by_nonresidue(),
            c2: s02 - v0 - v2 + v1,
        }
    }

    /// Chung–Hasan SQR2 squaring
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let ab = self.c0 * self.c1;
        let s1 = ab + ab;
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let bc = self.c1 * self.c2;
        let s3 = bc + bc;
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue() + s0,
            c1: s4.mul_by_nonresidue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Inversion through the norm to Fp2; zero maps to zero.
    pub fn invert(&self) -> Fp6 {
        let c0 = (self.c1 * self.c2).mul_by_nonresidue();
        let c0 = self.c0.square() - c0;

        let c1 = self.c2.square().mul_by_nonresidue();
        let c1 = c1 - (self.c0 * self.c1);

        let c2 = self.c1.square();
        let c2 = c2 - (self.c0 * self.c2);

        let tmp = ((self.c1 * c2) + (self.c2 * c1)).mul_by_nonresidue();
        let tmp = tmp + (self.c0 * c0);

        let t = tmp.invert();
        Fp6 {
            c0: t * c0,
            c1: t * c1,
            c2: t * c2,
        }
    }
}

impl Field for Fp6 {
    const BYTE_LEN: usize = 288;

    fn zero() -> Self {
        Fp6::zero()
    }

    fn one() -> Self {
        Fp6::one()
    }

    fn is_zero(&self) -> Choice {
        Fp6::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp6::square(self)
    }

    fn double(&self) -> Self {
        Fp6::double(self)
    }

    fn invert(&self) -> Self {
        Fp6::invert(self)
    }

    fn random(rng: impl RngCore) -> Self {
        Fp6::random(rng)
    }

    /// Wire order is c2 ‖ c1 ‖ c0
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Fp6::from_bytes", bytes.len(), 288)?;
        Ok(Fp6 {
            c2: Fp2::from_slice(&bytes[..96])?,
            c1: Fp2::from_slice(&bytes[96..192])?,
            c0: Fp2::from_slice(&bytes[192..])?,
        })
    }

    fn write_to(&self, out: &mut [u8]) {
        assert_eq!(out.len(), 288);
        self.c2.write_to(&mut out[..96]);
        self.c1.write_to(&mut out[96..192]);
        self.c0.write_to(&mut out[192..]);
    }
}
