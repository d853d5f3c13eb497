//! Quadratic extension `Fp12 = Fp6[w]/(w² − v)`, the field holding pairing values

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::Fp6;
use super::Field;
use crate::error::{validate, Result};

/// ξ^((p−1)/6), the Frobenius twist of the w coefficient
const FROBENIUS_COEFF_W: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5daa_ce4d,
        0x08f2_220f_b0fb_66eb,
    ]),
    c1: Fp::from_raw_unchecked([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ]),
};

/// Element c0 + c1·w of Fp12
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of w
    pub c1: Fp6,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp12);

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Self {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Self {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Self {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Field addition
    #[inline]
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Field subtraction
    #[inline]
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Field negation
    #[inline]
    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Doubling
    #[inline]
    pub fn double(&self) -> Fp12 {
        self.add(self)
    }

    /// Conjugation c0 − c1·w, i.e. x ↦ x^(p⁶)
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Frobenius endomorphism x ↦ x^p
    pub fn frobenius_map(&self) -> Self {
        let c0 = self.c0.frobenius_map();
        let c1 = self.c1.frobenius_map();

        // c1·w ↦ c1^p · ξ^((p−1)/6) · w
        let c1 = Fp6 {
            c0: c1.c0 * FROBENIUS_COEFF_W,
            c1: c1.c1 * FROBENIUS_COEFF_W,
            c2: c1.c2 * FROBENIUS_COEFF_W,
        };

        Fp12 { c0, c1 }
    }

    /// Apply the Frobenius endomorphism `power` times
    pub fn frobenius_pow(&self, power: usize) -> Self {
        (0..power).fold(*self, |acc, _| acc.frobenius_map())
    }

    /// Product with a sparse line value c0 + c1·v + c4·v·w
    pub fn mul_by_014(&self, c0: &Fp2, c1: &Fp2, c4: &Fp2) -> Fp12 {
        let aa = self.c0.mul_by_01(c0, c1);
        let bb = self.c1.mul_by_1(c4);
        let o = c1 + c4;
        let c1 = (self.c1 + self.c0).mul_by_01(c0, &o) - aa - bb;
        let c0 = bb.mul_by_nonresidue() + aa;

        Fp12 { c0, c1 }
    }

    /// Karatsuba product over Fp6
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let o = rhs.c0 + rhs.c1;
        let c1 = (self.c1 + self.c0) * o - aa - bb;
        let c0 = bb.mul_by_nonresidue() + aa;

        Fp12 { c0, c1 }
    }

    /// Squaring: (c0² + v·c1²) + 2·c0·c1·w
    pub fn square(&self) -> Fp12 {
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let c0 = (self.c1.mul_by_nonresidue() + self.c0) * c0c1 - ab - ab.mul_by_nonresidue();
        let c1 = ab + ab;

        Fp12 { c0, c1 }
    }

    /// Inversion through the norm to Fp6; zero maps to zero.
    pub fn invert(&self) -> Fp12 {
        let t = (self.c0.square() - self.c1.square().mul_by_nonresidue()).invert();
        Fp12 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        }
    }
}

impl Field for Fp12 {
    const BYTE_LEN: usize = 576;

    fn zero() -> Self {
        Fp12::zero()
    }

    fn one() -> Self {
        Fp12::one()
    }

    fn is_zero(&self) -> Choice {
        Fp12::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp12::square(self)
    }

    fn double(&self) -> Self {
        Fp12::double(self)
    }

    fn invert(&self) -> Self {
        Fp12::invert(self)
    }

    fn random(rng: impl RngCore) -> Self {
        Fp12::random(rng)
    }

    /// Wire order is c1 ‖ c0
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Fp12::from_bytes", bytes.len(), 576)?;
        Ok(Fp12 {
            c1: Fp6::from_slice(&bytes[..288])?,
            c0: Fp6::from_slice(&bytes[288..])?,
        })
    }

    fn write_to(&self, out: &mut [u8]) {
        assert_eq!(out.len(), 576);
        self.c1.write_to(&mut out[..288]);
        self.c0.write_to(&mut out[288..]);
    }
}
