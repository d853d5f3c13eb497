//! The BLS12-381 field tower and the numeric contract shared by its levels.
//!
//! `Fp` is the base field. `Fp2 = Fp[u]/(u² + 1)`, `Fp6 = Fp2[v]/(v³ − ξ)`
//! with `ξ = 1 + u`, and `Fp12 = Fp6[w]/(w² − v)`. `Cyclotomic` wraps the
//! elements of `Fp12` that the final exponentiation produces.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::Result;

pub mod cyclotomic;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;

pub use cyclotomic::Cyclotomic;
pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;

/// Arithmetic contract implemented by every field of the tower and by the
/// scalar field.
///
/// Equality, zero tests and selection are constant time. `invert` is a total
/// function: the inverse of zero is zero.
pub trait Field:
    Sized
    + Copy
    + Default
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Eq
    + ConstantTimeEq
    + ConditionallySelectable
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
{
    /// Length of the canonical big-endian encoding.
    const BYTE_LEN: usize;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Constant-time zero test
    fn is_zero(&self) -> Choice;

    /// `self²`
    fn square(&self) -> Self;

    /// `2·self`
    fn double(&self) -> Self;

    /// `self⁻¹`, or zero when `self` is zero
    fn invert(&self) -> Self;

    /// Uniformly random element
    fn random(rng: impl RngCore) -> Self;

    /// Decode exactly `BYTE_LEN` canonical bytes.
    fn from_slice(bytes: &[u8]) -> Result<Self>;

    /// Encode into `out`, which must hold exactly `BYTE_LEN` bytes.
    ///
    /// # Panics
    /// Panics if `out.len() != BYTE_LEN`.
    fn write_to(&self, out: &mut [u8]);

    /// Exponentiation by a public little-endian exponent.
    fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::one();
        for e in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

/// Fields over which the curve equations are solved: the coordinate fields
/// `Fp` and `Fp2`.
pub trait SqrtField: Field {
    /// A square root, when one exists
    fn sqrt(&self) -> CtOption<Self>;

    /// Whether `self` is a square (zero counts as one)
    fn is_square(&self) -> Choice;

    /// The `sgn0` parity used by hash-to-curve
    fn sgn0(&self) -> Choice;

    /// Whether `self` is the larger of `{self, −self}`, used by compressed
    /// point encodings
    fn lexicographically_largest(&self) -> Choice;
}
