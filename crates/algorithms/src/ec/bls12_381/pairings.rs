//! The optimal ate pairing on BLS12-381 and its target group Gt.
//!
//! `e: G₁ × G₂ → Gt` is a Miller loop over the bits of |x| followed by the
//! final exponentiation `f ↦ f^(3(p¹² − 1)/r)`.
//!
//! The hard part uses the chain for `3(p⁴ − p² + 1)/r` rather than
//! `(p⁴ − p² + 1)/r`, so every Gt value here is the cube of the textbook
//! reduced pairing. Since 3 is coprime to r this is still a non-degenerate
//! bilinear pairing, and it agrees with the e(G₁, G₂) value published for
//! other BLS12-381 libraries that use the same chain. Comparing against a
//! library that raises to `(p¹² − 1)/r` needs a cube (or a cube root) on
//! one side.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::{Cyclotomic, Field, Fp, Fp12, Fp2, Fp6};
use super::g1::G1Affine;
use super::curve::{CurveParams, Projective};
use super::g2::{G2Affine, G2Params, G2Projective};
use super::scalar::{self, Scalar};
use super::BLS_X;
use crate::error::{validate, Result};

/// Length of the Gt encoding
pub const GT_BYTES: usize = 576;

/// e(G₁ generator, G₂ generator)
const GENERATOR: Fp12 = Fp12 {
    c0: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x1972_e433_a01f_85c5,
                0x97d3_2b76_fd77_2538,
                0xc8ce_546f_c96b_cdf9,
                0xcef6_3e73_66d4_0614,
                0xa611_3427_8184_3780,
                0x13f3_448a_3fc6_d825,
            ]),
            c1: Fp::from_raw_unchecked([
                0xd263_31b0_2e9d_6995,
                0x9d68_a482_f779_7e7d,
                0x9c9b_2924_8d39_ea92,
                0xf480_1ca2_e131_07aa,
                0xa16c_0732_bdbc_b066,
                0x083c_a4af_ba36_0478,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x59e2_61db_0916_b641,
                0x2716_b6f4_b23e_960d,
                0xc8e5_5b10_a0bd_9c45,
                0x0bdb_0bd9_9c4d_eda8,
                0x8cf8_9ebf_57fd_aac5,
                0x12d6_b792_9e77_7a5e,
            ]),
            c1: Fp::from_raw_unchecked([
                0x5fc8_5188_b0e1_5f35,
                0x34a0_6e3a_8f09_6365,
                0xdb31_26a6_e02a_d62c,
                0xfc6f_5aa9_7d9a_990b,
                0xa12f_55f5_eb89_c210,
                0x1723_703a_926f_8889,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x9358_8f29_7182_8778,
                0x43f6_5b86_11ab_7585,
                0x3183_aaf5_ec27_9fdf,
                0xfa73_d7e1_8ac9_9df6,
                0x64e1_76a6_a64c_99b0,
                0x179f_a78c_5838_8f1f,
            ]),
            c1: Fp::from_raw_unchecked([
                0x672a_0a11_ca2a_ef12,
                0x0d11_b9b5_2aa3_f16b,
                0xa444_12d0_699d_056e,
                0xc01d_0177_221a_5ba5,
                0x66e0_cede_6c73_5529,
                0x05f5_a71e_9fdd_c339,
            ]),
        },
    },
    c1: Fp6 {
        c0: Fp2 {
            c0: Fp::from_raw_unchecked([
                0xd30a_88a1_b062_c679,
                0x5ac5_6a5d_35fc_8304,
                0xd0c8_34a6_a81f_290d,
                0xcd54_30c2_da37_07c7,
                0xf0c2_7ff7_8050_0af0,
                0x0924_5da6_e2d7_2eae,
            ]),
            c1: Fp::from_raw_unchecked([
                0x9f2e_0676_791b_5156,
                0xe2d1_c823_4918_fe13,
                0x4c9e_459f_3c56_1bf4,
                0xa3e8_5e53_b9d3_e3c1,
                0x820a_121e_21a7_0020,
                0x15af_6183_41c5_9acc,
            ]),
        },
        c1: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x7c95_658c_2499_3ab1,
                0x73eb_3872_1ca8_86b9,
                0x5256_d749_4774_34bc,
                0x8ba4_1902_ea50_4a8b,
                0x04a3_d3f8_0c86_ce6d,
                0x18a6_4a87_fb68_6eaa,
            ]),
            c1: Fp::from_raw_unchecked([
                0xbb83_e71b_b920_cf26,
                0x2a52_77ac_92a7_3945,
                0xfc0e_e59f_94f0_46a0,
                0x7158_cdf3_7860_58f7,
                0x7cc1_061b_82f9_45f6,
                0x03f8_47aa_9fdb_e567,
            ]),
        },
        c2: Fp2 {
            c0: Fp::from_raw_unchecked([
                0x8078_dba5_6134_e657,
                0x1cd7_ec9a_4399_8a6e,
                0xb1aa_599a_1a99_3766,
                0xc9a0_f62f_0842_ee44,
                0x8e15_9be3_b605_dffa,
                0x0c86_ba0d_4af1_3fc2,
            ]),
            c1: Fp::from_raw_unchecked([
                0xe80f_f2a0_6a52_ffb1,
                0x7694_ca48_721a_906c,
                0x7583_183e_03b0_8514,
                0xf567_afdd_40ce_e4e2,
                0x9a6d_96d2_e526_a5fc,
                0x197e_9f49_861f_2242,
            ]),
        },
    },
};

// ============================================================================
// Miller loop
// ============================================================================

/// Output of a Miller loop, before the final exponentiation.
///
/// Results multiply (written additively, like Gt) so several loops can share
/// one final exponentiation.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp12::one())
    }
}

impl zeroize::DefaultIsZeroes for MillerLoopResult {}

impl ConditionallySelectable for MillerLoopResult {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MillerLoopResult(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl<'a, 'b> core::ops::Add<&'b MillerLoopResult> for &'a MillerLoopResult {
    type Output = MillerLoopResult;

    #[inline]
    fn add(self, rhs: &'b MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl_add_binop_specify_output!(MillerLoopResult, MillerLoopResult, MillerLoopResult);

impl MillerLoopResult {
    /// Raise to `3(p¹² − 1)/r`, landing in Gt.
    ///
    /// The result is the cube of `f^((p¹² − 1)/r)`.
    pub fn final_exponentiation(&self) -> Gt {
        let g = Cyclotomic::from_easy_part(&self.0);

        // 3Φ₁₂(p)/r = (x − 1)²(x + p)(x² + p² − 1) + 3
        let t = g.pow_by_x() * g.conjugate(); // g^(x − 1)
        let t = t.pow_by_x() * t.conjugate(); // g^((x − 1)²)
        let t1 = t.pow_by_x() * t.frobenius_pow(1); // · (x + p)
        let t2 = t1.pow_by_x().pow_by_x() * t1.frobenius_pow(2) * t1.conjugate(); // · (x² + p² − 1)

        Gt((t2 * g.square() * g).into_fp12())
    }
}

/// Sparse line value: `l0·x + l1·y + l2`
struct Line {
    l0: Fp2,
    l1: Fp2,
    l2: Fp2,
}

impl Line {
    /// Multiply `f` by the line evaluated at the G₁ point `(x, y)`.
    fn evaluate(&self, f: &Fp12, p: &G1Affine) -> Fp12 {
        let lx = scale(&self.l0, &p.x);
        let ly = scale(&self.l1, &p.y);
        f.mul_by_014(&self.l2, &lx, &ly)
    }
}

/// Fp2 element times an Fp element
#[inline]
fn scale(a: &Fp2, s: &Fp) -> Fp2 {
    Fp2 {
        c0: a.c0 * s,
        c1: a.c1 * s,
    }
}

/// Double T and return the tangent line at T.
///
/// Homogeneous projective doubling on `y² = x³ + b′`, with every output
/// coordinate scaled by 4 to avoid halving.
fn doubling_step(t: &mut G2Projective) -> Line {
    let a = t.x.square();
    let b = t.y.square();
    let c = t.z.square();
    let d = G2Params::mul_by_3b(&c);
    let e = (t.x + t.y).square() - a - b;
    let f = (t.y + t.z).square() - b - c;
    let g = d + d + d;

    t.x = e * (b - g);
    t.y = (b + g).square() - (d.square() + d.square() + d.square()).double().double();
    t.z = (b * f).double().double();

    Line {
        l0: a + a + a,
        l1: -f,
        l2: d - b,
    }
}

/// Add the affine point Q to T and return the line through T and Q.
fn addition_step(t: &mut G2Projective, q: &G2Affine) -> Line {
    let theta = t.y - q.y * t.z;
    let lambda = t.x - q.x * t.z;

    let line = Line {
        l0: -theta,
        l1: lambda,
        l2: theta * q.x - lambda * q.y,
    };
    *t = t.add_mixed(q);
    line
}

/// Bits 62..0 of |x| set besides the top one
#[inline]
fn x_bit(i: u32) -> bool {
    (BLS_X >> i) & 1 == 1
}

/// Shared Miller loop over several pairs, squaring the accumulator once per bit.
fn miller_loop_pairs(pairs: &[(G1Affine, G2Affine)]) -> MillerLoopResult {
    // Pairs with an identity member contribute the neutral element; they run
    // on the generators and their lines are discarded.
    let prepared: Vec<(G1Affine, G2Affine, Choice)> = pairs
        .iter()
        .map(|(p, q)| {
            let skip = p.is_identity() | q.is_identity();
            let p = G1Affine::conditional_select(p, &G1Affine::generator(), skip);
            let q = G2Affine::conditional_select(q, &G2Affine::generator(), skip);
            (p, q, skip)
        })
        .collect();
    let mut ts: Vec<G2Projective> = prepared.iter().map(|(_, q, _)| Projective::from(q)).collect();

    let mut f = Fp12::one();
    for i in (0..63).rev() {
        f = f.square();
        for ((p, q, skip), t) in prepared.iter().zip(ts.iter_mut()) {
            let line = doubling_step(t);
            f = Fp12::conditional_select(&line.evaluate(&f, p), &f, *skip);
            if x_bit(i) {
                let line = addition_step(t, q);
                f = Fp12::conditional_select(&line.evaluate(&f, p), &f, *skip);
            }
        }
    }

    // x is negative
    MillerLoopResult(f.conjugate())
}

/// Miller loop of a single pair.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> MillerLoopResult {
    miller_loop_pairs(&[(*p, *q)])
}

/// Product of the Miller loops of all pairs, sharing the squarings.
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Affine)]) -> MillerLoopResult {
    let pairs: Vec<(G1Affine, G2Affine)> = terms.iter().map(|(p, q)| (**p, **q)).collect();
    miller_loop_pairs(&pairs)
}

/// The optimal ate pairing e(P, Q).
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    miller_loop(p, q).final_exponentiation()
}

/// `∏ e(Pᵢ, Qᵢ)^nᵢ` with one final exponentiation.
pub fn prod_pair(ps: &[G1Affine], qs: &[G2Affine], ns: &[Scalar]) -> Result<Gt> {
    validate::length("prod_pair", qs.len(), ps.len())?;
    validate::length("prod_pair", ns.len(), ps.len())?;

    let pairs: Vec<(G1Affine, G2Affine)> = ps
        .iter()
        .zip(qs.iter())
        .zip(ns.iter())
        .map(|((p, q), n)| (G1Affine::from(p * n), *q))
        .collect();
    Ok(miller_loop_pairs(&pairs).final_exponentiation())
}

/// `∏ e(Pᵢ, Qᵢ)^sᵢ` for signs `sᵢ ∈ {1, −1}`, with one final exponentiation.
pub fn prod_pair_frac(ps: &[G1Affine], qs: &[G2Affine], signs: &[i8]) -> Result<Gt> {
    validate::length("prod_pair_frac", qs.len(), ps.len())?;
    validate::length("prod_pair_frac", signs.len(), ps.len())?;
    validate::parameter(
        signs.iter().all(|s| *s == 1 || *s == -1),
        "signs",
        "each sign must be 1 or -1",
    )?;

    let pairs: Vec<(G1Affine, G2Affine)> = ps
        .iter()
        .zip(qs.iter())
        .zip(signs.iter())
        .map(|((p, q), s)| (if *s < 0 { -p } else { *p }, *q))
        .collect();
    Ok(miller_loop_pairs(&pairs).final_exponentiation())
}

// ============================================================================
// Gt
// ============================================================================

/// Element of the order-r target group, a subgroup of Fp12*.
///
/// The group law is written additively in the operators (`+`, `-`, `* Scalar`)
/// to match G₁ and G₂; the named methods use multiplicative language.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Gt {
    /// Group identity, the Fp12 one
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// e(G₁ generator, G₂ generator)
    pub fn generator() -> Gt {
        Gt(GENERATOR)
    }

    /// Check for the identity
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::identity())
    }

    fn cyclotomic(&self) -> Cyclotomic {
        Cyclotomic::from_fp12_unchecked(self.0)
    }

    /// Group operation
    pub fn mul(&self, rhs: &Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }

    /// `self²`, by cyclotomic squaring
    pub fn square(&self) -> Gt {
        Gt(self.cyclotomic().square().into_fp12())
    }

    /// Inverse, which is the conjugate
    pub fn invert(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// `self^k` in constant time: one squaring and one multiplication by a
    /// selected operand per bit of the 256-bit scalar.
    pub fn pow(&self, k: &Scalar) -> Gt {
        let by = k.to_le_bytes();
        let base = self.cyclotomic();
        let mut acc = Cyclotomic::one();
        for byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.square();
                let bit = Choice::from((byte >> i) & 1u8);
                acc = acc * Cyclotomic::conditional_select(&Cyclotomic::one(), &base, bit);
            }
        }
        Gt(acc.into_fp12())
    }

    /// `g^k` for a uniformly random exponent
    pub fn random(rng: impl RngCore) -> Gt {
        Self::generator().pow(&Scalar::random(rng))
    }

    /// Membership in the order-r subgroup: `self^r = 1`
    pub fn is_torsion_free(&self) -> Choice {
        self.0.pow_vartime(&scalar::MODULUS).ct_eq(&Fp12::one())
    }

    /// Serialize to 576 bytes, the Fp12 encoding (c1 ‖ c0).
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        let mut out = [0u8; GT_BYTES];
        self.0.write_to(&mut out);
        out
    }

    /// Deserialize 576 bytes, rejecting values outside the order-r subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Gt> {
        validate::length("Gt::from_bytes", bytes.len(), GT_BYTES)?;
        let f = Fp12::from_slice(bytes)?;
        let gt = Gt(f);
        validate::point(gt.is_torsion_free(), "Gt", "not in the order-r subgroup")?;
        Ok(gt)
    }
}

impl<'a> core::ops::Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        self.invert()
    }
}

impl core::ops::Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl<'a, 'b> core::ops::Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt::mul(self, rhs)
    }
}

impl<'a, 'b> core::ops::Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + &(-rhs)
    }
}

impl<'a, 'b> core::ops::Mul<&'b Scalar> for &'a Gt {
    type Output = Gt;

    fn mul(self, rhs: &'b Scalar) -> Gt {
        self.pow(rhs)
    }
}

impl_binops_additive!(Gt, Gt);
impl_binops_multiplicative!(Gt, Scalar);

impl<T> Sum<T> for Gt
where
    T: Borrow<Gt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl bls381_api::Serialize for Gt {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        Gt::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Gt::to_bytes(self).to_vec()
    }
}
