//! Short Weierstrass arithmetic shared by G₁ and G₂.
//!
//! Both groups live on curves `y² = x³ + b` (a = 0) over a field implementing
//! [`SqrtField`]; they differ only in the coordinate field, the constant `b`
//! and the generator. Those are supplied through [`CurveParams`], and the
//! group law, scalar multiplication and the wire codec are written once here.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use byteorder::{ByteOrder, LittleEndian};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::{Field, SqrtField};
use super::scalar::{self, Scalar};
use super::{BLS_X, BLS_X_IS_NEGATIVE};
use crate::error::{validate, Result};

/// Compressed-form flag, bit 7 of the first byte
const COMPRESSION_FLAG: u8 = 1 << 7;
/// Point-at-infinity flag, bit 6 of the first byte
const INFINITY_FLAG: u8 = 1 << 6;
/// Larger-y flag, bit 5 of the first byte
const SORT_FLAG: u8 = 1 << 5;
const FLAG_MASK: u8 = COMPRESSION_FLAG | INFINITY_FLAG | SORT_FLAG;

/// Curve constants and group-specific hooks.
pub trait CurveParams: Copy + Clone + fmt::Debug + Send + Sync + 'static {
    /// Coordinate field
    type Base: SqrtField;

    /// Group name used in error contexts
    const NAME: &'static str;

    /// Constant term of the curve equation
    const B: Self::Base;

    /// Affine x-coordinate of the fixed generator
    const GENERATOR_X: Self::Base;

    /// Affine y-coordinate of the fixed generator
    const GENERATOR_Y: Self::Base;

    /// Multiply by 3b, the constant of the complete formulas
    fn mul_by_3b(a: &Self::Base) -> Self::Base;

    /// Fast membership test for the order-r subgroup using an endomorphism.
    fn is_torsion_free(p: &Affine<Self>) -> Choice;

    /// Map a curve point into the order-r subgroup.
    fn clear_cofactor(p: &Projective<Self>) -> Projective<Self>;
}

/// Point in affine coordinates with an explicit infinity flag
#[derive(Copy, Clone, Debug)]
pub struct Affine<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) infinity: Choice,
}

/// Point in homogeneous projective coordinates (X : Y : Z); the identity is (0 : 1 : 0)
#[derive(Copy, Clone, Debug)]
pub struct Projective<C: CurveParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
}

// ============================================================================
// Affine
// ============================================================================

impl<C: CurveParams> Default for Affine<C> {
    fn default() -> Self {
        Affine::identity()
    }
}

impl<C: CurveParams> zeroize::DefaultIsZeroes for Affine<C> {}

impl<C: CurveParams> fmt::Display for Affine<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a, C: CurveParams> From<&'a Projective<C>> for Affine<C> {
    fn from(p: &'a Projective<C>) -> Affine<C> {
        p.to_affine()
    }
}

impl<C: CurveParams> From<Projective<C>> for Affine<C> {
    fn from(p: Projective<C>) -> Affine<C> {
        p.to_affine()
    }
}

impl<C: CurveParams> ConstantTimeEq for Affine<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl<C: CurveParams> ConditionallySelectable for Affine<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Affine {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C: CurveParams> Eq for Affine<C> {}
impl<C: CurveParams> PartialEq for Affine<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, C: CurveParams> Neg for &'a Affine<C> {
    type Output = Affine<C>;

    #[inline]
    fn neg(self) -> Affine<C> {
        Affine {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &C::Base::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl<C: CurveParams> Neg for Affine<C> {
    type Output = Affine<C>;

    #[inline]
    fn neg(self) -> Affine<C> {
        -&self
    }
}

impl<C: CurveParams> Affine<C> {
    /// Point at infinity
    pub fn identity() -> Self {
        Affine {
            x: C::Base::zero(),
            y: C::Base::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator
    pub fn generator() -> Self {
        Affine {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Affine x-coordinate (zero for the identity)
    pub fn x(&self) -> C::Base {
        C::Base::conditional_select(&self.x, &C::Base::zero(), self.infinity)
    }

    /// Affine y-coordinate (one for the identity)
    pub fn y(&self) -> C::Base {
        C::Base::conditional_select(&self.y, &C::Base::one(), self.infinity)
    }

    /// Curve membership: y² = x³ + b
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&C::B) | self.infinity
    }

    /// Subgroup check through the group's endomorphism
    pub fn is_torsion_free(&self) -> Choice {
        C::is_torsion_free(self)
    }

    /// Reference subgroup check: [r]P = O
    pub fn is_r_torsion(&self) -> Choice {
        Projective::from(self).is_r_torsion()
    }

    /// Full membership: on the curve and in the order-r subgroup
    pub fn is_valid(&self) -> Choice {
        self.is_on_curve() & self.is_r_torsion()
    }

    /// Write the compressed encoding: x with the flag bits in the first byte.
    ///
    /// # Panics
    /// Panics unless `out` holds exactly one coordinate.
    pub(crate) fn write_compressed(&self, out: &mut [u8]) {
        self.x().write_to(out);
        out[0] |= COMPRESSION_FLAG;
        out[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
        out[0] |= u8::conditional_select(
            &0u8,
            &SORT_FLAG,
            (!self.infinity) & self.y.lexicographically_largest(),
        );
    }

    /// Write the uncompressed encoding x ‖ y.
    ///
    /// # Panics
    /// Panics unless `out` holds exactly two coordinates.
    pub(crate) fn write_uncompressed(&self, out: &mut [u8]) {
        let n = C::Base::BYTE_LEN;
        self.x().write_to(&mut out[..n]);
        C::Base::conditional_select(&self.y, &C::Base::zero(), self.infinity)
            .write_to(&mut out[n..]);
        out[0] |= u8::conditional_select(&0u8, &INFINITY_FLAG, self.infinity);
    }

    /// Decode a compressed point and check subgroup membership.
    pub(crate) fn read_compressed(bytes: &[u8]) -> Result<Self> {
        let p = Self::read_compressed_unchecked(bytes)?;
        validate::point(p.is_torsion_free(), C::NAME, "not in the order-r subgroup")?;
        Ok(p)
    }

    /// Decode a compressed point without the subgroup check. The result is on
    /// the curve.
    pub(crate) fn read_compressed_unchecked(bytes: &[u8]) -> Result<Self> {
        validate::length(C::NAME, bytes.len(), C::Base::BYTE_LEN)?;
        let flags = bytes[0] & FLAG_MASK;
        validate::encoding(
            Choice::from(((flags & COMPRESSION_FLAG) != 0) as u8),
            C::NAME,
            "compression flag not set",
        )?;

        if flags & INFINITY_FLAG != 0 {
            return Self::read_infinity(bytes, flags);
        }

        let x = read_masked::<C::Base>(bytes)?;
        let y = (x.square() * x + C::B).sqrt();
        validate::point(y.is_some(), C::NAME, "x is not the abscissa of a curve point")?;
        let y = y.unwrap_or(C::Base::zero());

        let sort = Choice::from(((flags & SORT_FLAG) != 0) as u8);
        let y = C::Base::conditional_select(&y, &-y, y.lexicographically_largest() ^ sort);
        Ok(Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// Decode an uncompressed point and check full membership.
    pub(crate) fn read_uncompressed(bytes: &[u8]) -> Result<Self> {
        let p = Self::read_uncompressed_unchecked(bytes)?;
        validate::point(p.is_on_curve(), C::NAME, "not on the curve")?;
        validate::point(p.is_torsion_free(), C::NAME, "not in the order-r subgroup")?;
        Ok(p)
    }

    /// Decode an uncompressed point without any curve or subgroup check.
    pub(crate) fn read_uncompressed_unchecked(bytes: &[u8]) -> Result<Self> {
        let n = C::Base::BYTE_LEN;
        validate::length(C::NAME, bytes.len(), 2 * n)?;
        let flags = bytes[0] & FLAG_MASK;
        validate::encoding(
            Choice::from(((flags & COMPRESSION_FLAG) == 0) as u8),
            C::NAME,
            "compression flag set on an uncompressed encoding",
        )?;

        if flags & INFINITY_FLAG != 0 {
            return Self::read_infinity(bytes, flags);
        }
        validate::encoding(
            Choice::from(((flags & SORT_FLAG) == 0) as u8),
            C::NAME,
            "sort flag set on an uncompressed encoding",
        )?;

        let x = read_masked::<C::Base>(&bytes[..n])?;
        let y = C::Base::from_slice(&bytes[n..])?;
        Ok(Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        })
    }

    /// The infinity encoding: no sort flag and every other bit zero
    fn read_infinity(bytes: &[u8], flags: u8) -> Result<Self> {
        validate::encoding(
            Choice::from(((flags & SORT_FLAG) == 0) as u8),
            C::NAME,
            "sort flag set on the point at infinity",
        )?;
        let rest = bytes[1..].iter().fold(bytes[0] & !FLAG_MASK, |acc, b| acc | b);
        validate::encoding(
            rest.ct_eq(&0u8),
            C::NAME,
            "point at infinity with non-zero coordinates",
        )?;
        Ok(Affine::identity())
    }
}

/// Decode a coordinate whose first byte carries the flag bits
fn read_masked<F: Field>(bytes: &[u8]) -> Result<F> {
    let mut tmp = [0u8; 96];
    let tmp = &mut tmp[..bytes.len()];
    tmp.copy_from_slice(bytes);
    tmp[0] &= !FLAG_MASK;
    F::from_slice(tmp)
}

// ============================================================================
// Projective
// ============================================================================

impl<C: CurveParams> Default for Projective<C> {
    fn default() -> Self {
        Projective::identity()
    }
}

impl<C: CurveParams> zeroize::DefaultIsZeroes for Projective<C> {}

impl<C: CurveParams> fmt::Display for Projective<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a, C: CurveParams> From<&'a Affine<C>> for Projective<C> {
    fn from(p: &'a Affine<C>) -> Projective<C> {
        Projective {
            x: p.x,
            y: p.y,
            z: C::Base::conditional_select(&C::Base::one(), &C::Base::zero(), p.infinity),
        }
    }
}

impl<C: CurveParams> From<Affine<C>> for Projective<C> {
    fn from(p: Affine<C>) -> Projective<C> {
        Projective::from(&p)
    }
}

impl<C: CurveParams> ConstantTimeEq for Projective<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 : Y1 : Z1) = (X2 : Y2 : Z2) iff X1·Z2 = X2·Z1 and Y1·Z2 = Y2·Z1
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl<C: CurveParams> ConditionallySelectable for Projective<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Projective {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            z: C::Base::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: CurveParams> Eq for Projective<C> {}
impl<C: CurveParams> PartialEq for Projective<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, C: CurveParams> Neg for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn neg(self) -> Projective<C> {
        Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<C: CurveParams> Neg for Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn neg(self) -> Projective<C> {
        -&self
    }
}

impl<C: CurveParams> Projective<C> {
    /// Point at infinity
    pub fn identity() -> Self {
        Projective {
            x: C::Base::zero(),
            y: C::Base::one(),
            z: C::Base::zero(),
        }
    }

    /// Fixed generator
    pub fn generator() -> Self {
        Projective {
            x: C::GENERATOR_X,
            y: C::GENERATOR_Y,
            z: C::Base::one(),
        }
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Uniformly random point of the order-r subgroup other than the identity
    pub fn random(mut rng: impl RngCore) -> Self {
        loop {
            let x = C::Base::random(&mut rng);
            let flip_sign = rng.next_u32() % 2 != 0;

            let p = (x.square() * x + C::B).sqrt().map(|y| Affine::<C> {
                x,
                y: if flip_sign { -y } else { y },
                infinity: Choice::from(0u8),
            });

            if let Some(p) = Option::<Affine<C>>::from(p) {
                let cleared = C::clear_cofactor(&Projective::from(p));
                if !bool::from(cleared.is_identity()) {
                    return cleared;
                }
            }
        }
    }

    /// Map a curve point into the order-r subgroup.
    pub fn clear_cofactor(&self) -> Self {
        C::clear_cofactor(self)
    }

    /// Curve membership: Y²Z = X³ + bZ³
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z).ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * C::B))
            | self.z.is_zero()
    }

    /// Normalize to affine coordinates with a single inversion.
    pub fn to_affine(&self) -> Affine<C> {
        let zinv = self.z.invert();
        let tmp = Affine {
            x: self.x * zinv,
            y: self.y * zinv,
            infinity: Choice::from(0u8),
        };

        Affine::conditional_select(&tmp, &Affine::identity(), zinv.is_zero())
    }

    /// Point doubling.
    pub fn double(&self) -> Self {
        // Algorithm 9 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = C::mul_by_3b(&t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = Projective { x: x3, y: y3, z: z3 };
        Projective::conditional_select(&tmp, &Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &Self) -> Self {
        // Algorithm 7 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = C::mul_by_3b(&t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = C::mul_by_3b(&y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        Projective { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition with an affine point.
    pub fn add_mixed(&self, rhs: &Affine<C>) -> Self {
        // Algorithm 8 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = C::mul_by_3b(&self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = C::mul_by_3b(&y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = Projective { x: x3, y: y3, z: z3 };
        Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Constant-time double-and-add over a little-endian 256-bit integer.
    ///
    /// Every bit costs one doubling and one addition; the addend is the
    /// identity or `self` as selected by the bit.
    pub(crate) fn multiply(&self, by: &[u8; 32]) -> Self {
        let mut acc = Projective::identity();
        for &byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.double();
                let bit = Choice::from((byte >> i) & 1u8);
                let addend = Projective::conditional_select(&Projective::identity(), self, bit);
                acc = acc.add(&addend);
            }
        }
        acc
    }

    /// Multiply by the curve parameter x (negative, public).
    pub(crate) fn mul_by_x(&self) -> Self {
        let mut xself = Projective::identity();
        // The lowest bit of |x| is zero
        let mut x = BLS_X >> 1;
        let mut tmp = *self;
        while x != 0 {
            tmp = tmp.double();
            if x % 2 == 1 {
                xself = xself.add(&tmp);
            }
            x >>= 1;
        }
        if BLS_X_IS_NEGATIVE {
            xself = -xself;
        }
        xself
    }

    /// Reference subgroup check: [r]P = O
    pub fn is_r_torsion(&self) -> Choice {
        let mut order = [0u8; 32];
        LittleEndian::write_u64_into(&scalar::MODULUS, &mut order);
        self.multiply(&order).is_identity()
    }

    /// Full membership: on the curve and in the order-r subgroup
    pub fn is_valid(&self) -> Choice {
        self.is_on_curve() & self.is_r_torsion()
    }

    /// Convert a batch of projective points to affine with one inversion.
    ///
    /// # Panics
    /// Panics if `p.len() != q.len()`.
    pub fn batch_normalize(p: &[Self], q: &mut [Affine<C>]) {
        assert_eq!(p.len(), q.len());

        // Prefix products of the non-identity Z coordinates, parked in q.x
        let mut acc = C::Base::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            acc = C::Base::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        acc = acc.invert();

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();
            let tmp = q.x * acc;
            acc = C::Base::conditional_select(&(acc * p.z), &acc, skip);
            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);
            *q = Affine::conditional_select(q, &Affine::identity(), skip);
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<'a, 'b, C: CurveParams> Add<&'b Projective<C>> for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn add(self, rhs: &'b Projective<C>) -> Projective<C> {
        self.add(rhs)
    }
}

impl<'a, 'b, C: CurveParams> Sub<&'b Projective<C>> for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn sub(self, rhs: &'b Projective<C>) -> Projective<C> {
        self + &(-rhs)
    }
}

impl<'a, 'b, C: CurveParams> Add<&'b Projective<C>> for &'a Affine<C> {
    type Output = Projective<C>;

    #[inline]
    fn add(self, rhs: &'b Projective<C>) -> Projective<C> {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b, C: CurveParams> Add<&'b Affine<C>> for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn add(self, rhs: &'b Affine<C>) -> Projective<C> {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b, C: CurveParams> Sub<&'b Projective<C>> for &'a Affine<C> {
    type Output = Projective<C>;

    #[inline]
    fn sub(self, rhs: &'b Projective<C>) -> Projective<C> {
        self + &(-rhs)
    }
}

impl<'a, 'b, C: CurveParams> Sub<&'b Affine<C>> for &'a Projective<C> {
    type Output = Projective<C>;

    #[inline]
    fn sub(self, rhs: &'b Affine<C>) -> Projective<C> {
        self + &(-rhs)
    }
}

impl<'a, 'b, C: CurveParams> Mul<&'b Scalar> for &'a Projective<C> {
    type Output = Projective<C>;

    fn mul(self, other: &'b Scalar) -> Projective<C> {
        self.multiply(&other.to_le_bytes())
    }
}

impl<'a, 'b, C: CurveParams> Mul<&'b Projective<C>> for &'a Scalar {
    type Output = Projective<C>;

    #[inline]
    fn mul(self, rhs: &'b Projective<C>) -> Projective<C> {
        rhs * self
    }
}

impl<'a, 'b, C: CurveParams> Mul<&'b Scalar> for &'a Affine<C> {
    type Output = Projective<C>;

    fn mul(self, other: &'b Scalar) -> Projective<C> {
        Projective::from(self).multiply(&other.to_le_bytes())
    }
}

impl<'a, 'b, C: CurveParams> Mul<&'b Affine<C>> for &'a Scalar {
    type Output = Projective<C>;

    #[inline]
    fn mul(self, rhs: &'b Affine<C>) -> Projective<C> {
        rhs * self
    }
}

/// Owned and assigning variants of a by-reference binary operator
macro_rules! impl_point_binop {
    ($tr:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
        impl<'b, C: CurveParams> $tr<&'b $rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: &'b $rhs) -> $out {
                <&$lhs as $tr<&$rhs>>::$method(&self, rhs)
            }
        }

        impl<'a, C: CurveParams> $tr<$rhs> for &'a $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $tr<&$rhs>>::$method(self, &rhs)
            }
        }

        impl<C: CurveParams> $tr<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                <&$lhs as $tr<&$rhs>>::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_point_assign {
    ($tr:ident, $method:ident, $optr:ident, $op:ident, $lhs:ty, $rhs:ty) => {
        impl<C: CurveParams> $tr<$rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = <&$lhs as $optr<&$rhs>>::$op(self, &rhs);
            }
        }

        impl<'b, C: CurveParams> $tr<&'b $rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: &'b $rhs) {
                *self = <&$lhs as $optr<&$rhs>>::$op(self, rhs);
            }
        }
    };
}

impl_point_binop!(Add, add, Projective<C>, Projective<C>, Projective<C>);
impl_point_binop!(Sub, sub, Projective<C>, Projective<C>, Projective<C>);
impl_point_binop!(Add, add, Projective<C>, Affine<C>, Projective<C>);
impl_point_binop!(Sub, sub, Projective<C>, Affine<C>, Projective<C>);
impl_point_binop!(Add, add, Affine<C>, Projective<C>, Projective<C>);
impl_point_binop!(Sub, sub, Affine<C>, Projective<C>, Projective<C>);
impl_point_binop!(Mul, mul, Projective<C>, Scalar, Projective<C>);
impl_point_binop!(Mul, mul, Affine<C>, Scalar, Projective<C>);
impl_point_binop!(Mul, mul, Scalar, Projective<C>, Projective<C>);
impl_point_binop!(Mul, mul, Scalar, Affine<C>, Projective<C>);

impl_point_assign!(AddAssign, add_assign, Add, add, Projective<C>, Projective<C>);
impl_point_assign!(SubAssign, sub_assign, Sub, sub, Projective<C>, Projective<C>);
impl_point_assign!(AddAssign, add_assign, Add, add, Projective<C>, Affine<C>);
impl_point_assign!(SubAssign, sub_assign, Sub, sub, Projective<C>, Affine<C>);
impl_point_assign!(MulAssign, mul_assign, Mul, mul, Projective<C>, Scalar);

impl<C: CurveParams, T> Sum<T> for Projective<C>
where
    T: Borrow<Projective<C>>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}
