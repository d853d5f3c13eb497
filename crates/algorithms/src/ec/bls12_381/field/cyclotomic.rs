//! The cyclotomic subgroup of Fp12: elements of order dividing p⁴ − p² + 1.
//!
//! Values only enter this type through [`Cyclotomic::from_easy_part`], the
//! first stage of the final exponentiation. Inside the subgroup the inverse is
//! the conjugate and squaring has a cheaper compressed form (Granger–Scott).

use core::ops::Mul;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp6::Fp6;
use crate::ec::bls12_381::BLS_X;

/// Element of the cyclotomic subgroup of Fp12
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cyclotomic(Fp12);

impl ConstantTimeEq for Cyclotomic {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Cyclotomic {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Cyclotomic(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl<'a, 'b> Mul<&'b Cyclotomic> for &'a Cyclotomic {
    type Output = Cyclotomic;

    #[inline]
    fn mul(self, rhs: &'b Cyclotomic) -> Cyclotomic {
        Cyclotomic(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(Cyclotomic, Cyclotomic);

/// Square c0 + c1·s in Fp4 = Fp2[s]/(s² − ξ)
fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();
    let c0 = t1.mul_by_nonresidue() + t0;
    let c1 = (a + b).square() - t0 - t1;
    (c0, c1)
}

impl Cyclotomic {
    /// Multiplicative identity
    pub const fn one() -> Self {
        Cyclotomic(Fp12::one())
    }

    /// Raise to (p⁶ − 1)(p² + 1), landing in the cyclotomic subgroup.
    ///
    /// A zero input yields zero, which no Miller loop produces.
    pub fn from_easy_part(f: &Fp12) -> Self {
        // f^(p⁶ − 1) = conj(f) / f
        let t = f.conjugate() * f.invert();
        // ·^(p² + 1)
        Cyclotomic(t.frobenius_pow(2) * t)
    }

    /// Wrap a value already known to lie in the subgroup
    pub(crate) const fn from_fp12_unchecked(f: Fp12) -> Self {
        Cyclotomic(f)
    }

    /// The underlying Fp12 value
    pub fn into_fp12(self) -> Fp12 {
        self.0
    }

    /// The inverse, which for unitary elements is the conjugate
    #[inline]
    pub fn conjugate(&self) -> Self {
        Cyclotomic(self.0.conjugate())
    }

    /// Frobenius endomorphism applied `power` times
    pub fn frobenius_pow(&self, power: usize) -> Self {
        Cyclotomic(self.0.frobenius_pow(power))
    }

    /// Granger–Scott squaring in the cyclotomic subgroup
    pub fn square(&self) -> Self {
        let f = &self.0;
        let mut z0 = f.c0.c0;
        let mut z4 = f.c0.c1;
        let mut z3 = f.c0.c2;
        let mut z2 = f.c1.c0;
        let mut z1 = f.c1.c1;
        let mut z5 = f.c1.c2;

        let (t0, t1) = fp4_square(z0, z1);
        z0 = t0 - z0;
        z0 = z0 + z0 + t0;
        z1 = t1 + z1;
        z1 = z1 + z1 + t1;

        let (t0, t1) = fp4_square(z2, z3);
        let (t2, t3) = fp4_square(z4, z5);

        z4 = t0 - z4;
        z4 = z4 + z4 + t0;
        z5 = t1 + z5;
        z5 = z5 + z5 + t1;

        let t0 = t3.mul_by_nonresidue();
        z2 = t0 + z2;
        z2 = z2 + z2 + t0;
        z3 = t2 - z3;
        z3 = z3 + z3 + t2;

        Cyclotomic(Fp12 {
            c0: Fp6 {
                c0: z0,
                c1: z4,
                c2: z3,
            },
            c1: Fp6 {
                c0: z2,
                c1: z1,
                c2: z5,
            },
        })
    }

    /// Exponentiation by the curve parameter x.
    ///
    /// x is negative, so this is a power by |x| followed by a conjugation.
    pub fn pow_by_x(&self) -> Self {
        let mut acc = Cyclotomic::one();
        let mut started = false;
        for i in (0..64).rev() {
            let bit = ((BLS_X >> i) & 1) == 1;
            if started {
                acc = acc.square();
            }
            if bit {
                acc = if started { acc * self } else { *self };
                started = true;
            }
        }
        acc.conjugate()
    }
}
