//! Quadratic extension `Fp2 = Fp[u]/(u² + 1)`

use core::fmt;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::{Fp, P_MINUS_1_DIV_2, P_MINUS_3_DIV_4};
use super::{Field, SqrtField};
use crate::error::{validate, Result};

/// Element c0 + c1·u of Fp2
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real part
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp2);

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Uniformly random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// Frobenius endomorphism x ↦ x^p, which is conjugation in Fp2
    #[inline(always)]
    pub fn frobenius_map(&self) -> Self {
        self.conjugate()
    }

    /// Conjugation c0 − c1·u
    #[inline(always)]
    pub fn conjugate(&self) -> Self {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Multiply by the sextic non-residue ξ = 1 + u
    #[inline(always)]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(1 + u) = (a − b) + (a + b)u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Complex squaring: (a + b)(a − b) + 2ab·u
    pub const fn square(&self) -> Fp2 {
        let a = (&self.c0).add(&self.c1);
        let b = (&self.c0).sub(&self.c1);
        let c = (&self.c0).add(&self.c0);

        Fp2 {
            c0: (&a).mul(&b),
            c1: (&c).mul(&self.c1),
        }
    }

    /// Karatsuba product with three base-field multiplications
    pub const fn mul(&self, rhs: &Fp2) -> Fp2 {
        let t0 = (&self.c0).mul(&rhs.c0);
        let t1 = (&self.c1).mul(&rhs.c1);
        let t2 = (&self.c0).add(&self.c1);
        let t3 = (&rhs.c0).add(&rhs.c1);

        Fp2 {
            c0: (&t0).sub(&t1),
            c1: (&(&t2).mul(&t3)).sub(&(&t0).add(&t1)),
        }
    }

    /// Field addition
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).add(&rhs.c0),
            c1: (&self.c1).add(&rhs.c1),
        }
    }

    /// Field subtraction
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: (&self.c0).sub(&rhs.c0),
            c1: (&self.c1).sub(&rhs.c1),
        }
    }

    /// Field negation
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: (&self.c0).neg(),
            c1: (&self.c1).neg(),
        }
    }

    /// Doubling
    pub const fn double(&self) -> Fp2 {
        self.add(self)
    }

    /// Norm-based inversion (c0 − c1·u)/(c0² + c1²); zero maps to zero.
    pub fn invert(&self) -> Fp2 {
        let t = (self.c0.square() + self.c1.square()).invert();
        Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        }
    }

    /// Exponentiation by a public little-endian exponent.
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        <Self as Field>::pow_vartime(self, by)
    }

    /// Square root for p ≡ 3 (mod 4), Algorithm 9 of ePrint 2012/685.
    pub fn sqrt(&self) -> CtOption<Self> {
        let a1 = self.pow_vartime(&P_MINUS_3_DIV_4);
        let alpha = a1.square() * self;
        let x0 = a1 * self;

        // alpha = −1: the root is u·x0
        let alpha_is_minus_one = alpha.ct_eq(&-Fp2::one());
        let by_u = Fp2 {
            c0: -x0.c1,
            c1: x0.c0,
        };
        let by_b = (alpha + Fp2::one()).pow_vartime(&P_MINUS_1_DIV_2) * x0;

        let sqrt = Fp2::conditional_select(&by_b, &by_u, alpha_is_minus_one);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// An element of Fp2 is a square exactly when its norm is a square in Fp
    pub fn is_square(&self) -> Choice {
        (self.c0.square() + self.c1.square()).is_square()
    }

    /// Hash-to-curve sign: parity of c0, or of c1 when c0 is zero
    pub fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.sgn0();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.sgn0();
        sign_0 | (zero_0 & sign_1)
    }

    /// Ordering used by compressed encodings: c1 decides, then c0
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }
}

impl Field for Fp2 {
    const BYTE_LEN: usize = 96;

    fn zero() -> Self {
        Fp2::zero()
    }

    fn one() -> Self {
        Fp2::one()
    }

    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn invert(&self) -> Self {
        Fp2::invert(self)
    }

    fn random(rng: impl RngCore) -> Self {
        Fp2::random(rng)
    }

    /// Wire order is c1 ‖ c0
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Fp2::from_bytes", bytes.len(), 96)?;
        let c1 = Fp::from_slice(&bytes[..48])?;
        let c0 = Fp::from_slice(&bytes[48..])?;
        Ok(Fp2 { c0, c1 })
    }

    fn write_to(&self, out: &mut [u8]) {
        assert_eq!(out.len(), 96);
        self.c1.write_to(&mut out[..48]);
        self.c0.write_to(&mut out[48..]);
    }
}

impl SqrtField for Fp2 {
    fn sqrt(&self) -> CtOption<Self> {
        Fp2::sqrt(self)
    }

    fn is_square(&self) -> Choice {
        Fp2::is_square(self)
    }

    fn sgn0(&self) -> Choice {
        Fp2::sgn0(self)
    }

    fn lexicographically_largest(&self) -> Choice {
        Fp2::lexicographically_largest(self)
    }
}
