//! Isogenies from the curves the simplified SWU map targets onto E and E′.
//!
//! Neither BLS12-381 curve has `A ≠ 0`, which the simplified SWU map needs,
//! so hashing lands on an isogenous curve `y² = x³ + A′x + B′` first: an
//! 11-isogeny for G₁ and a 3-isogeny for G₂. The map is the rational function
//!
//! ```text
//! (x, y) ↦ (x_num(x) / x_den(x), y · y_num(x) / y_den(x))
//! ```
//!
//! evaluated on projective input without any inversion.

use super::curve::{CurveParams, Projective};
use super::field::Field;
use subtle::ConditionallySelectable;

pub(crate) mod g1;
pub(crate) mod g2;

/// Coefficients of the four polynomials of an isogeny, lowest degree first
#[derive(Debug)]
pub(crate) struct IsogenyMap<F: 'static> {
    pub(crate) xnum: &'static [F],
    pub(crate) xden: &'static [F],
    pub(crate) ynum: &'static [F],
    pub(crate) yden: &'static [F],
}

/// The isogenous curve `y² = x³ + a·x + b` together with its simplified SWU
/// constants and its isogeny onto the target curve
#[derive(Debug)]
pub(crate) struct IsoCurve<F: 'static> {
    pub(crate) a: F,
    pub(crate) b: F,
    pub(crate) z: F,
    pub(crate) minus_b_over_a: F,
    pub(crate) b_over_za: F,
    pub(crate) map: IsogenyMap<F>,
}

/// `Z^d · P(X / Z)` for `P` of degree `d`, by Horner's rule carrying a power of Z
fn eval_homogeneous<F: Field>(coeffs: &[F], x: &F, z: &F) -> F {
    let (leading, rest) = match coeffs.split_last() {
        Some(split) => split,
        None => return F::zero(),
    };

    let mut acc = *leading;
    let mut zpow = *z;
    for k in rest.iter().rev() {
        acc = acc * x + *k * zpow;
        zpow *= z;
    }
    acc
}

impl<F: Field> IsogenyMap<F> {
    /// Map the point (X : Y : Z) of the isogenous curve onto the target curve.
    ///
    /// Requires `deg x_num = deg x_den + 1` and `deg y_num = deg y_den`, so
    /// that the homogenized values combine as
    /// `(Nx·Dy : Y·Ny·Dx : Z·Dx·Dy)`.
    pub(crate) fn apply<C: CurveParams<Base = F>>(&self, x: &F, y: &F, z: &F) -> Projective<C> {
        let nx = eval_homogeneous(self.xnum, x, z);
        let dx = eval_homogeneous(self.xden, x, z);
        let ny = eval_homogeneous(self.ynum, x, z);
        let dy = eval_homogeneous(self.yden, x, z);

        let out = Projective {
            x: nx * dy,
            y: *y * ny * dx,
            z: *z * dx * dy,
        };

        // Kernel points collapse to (0 : 0 : 0)
        Projective::conditional_select(&out, &Projective::identity(), out.z.is_zero())
    }
}
