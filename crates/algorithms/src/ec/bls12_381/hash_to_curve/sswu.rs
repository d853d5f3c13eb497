//! Constant-time simplified Shallue–van de Woestijne–Ulas map onto the
//! isogenous curves `y² = x³ + A′x + B′`.

use crate::ec::bls12_381::field::SqrtField;
use crate::ec::bls12_381::isogeny::IsoCurve;

/// Map a field element to an affine point of the isogenous curve.
///
/// Both candidate abscissas are always computed and the square root is taken
/// of the selected `g(x)`, so the running time does not depend on `u`. The
/// sign of `y` follows `sgn0(u)`.
pub(crate) fn map_to_curve_simple_swu<F: SqrtField>(u: &F, curve: &IsoCurve<F>) -> (F, F) {
    let g = |x: &F| x.square() * x + curve.a * x + curve.b;

    // tv1 = inv0(Z²u⁴ + Zu²)
    let zu2 = curve.z * u.square();
    let tv1 = (zu2.square() + zu2).invert();

    // x1 = (−B/A)(1 + tv1), or B/(ZA) in the exceptional case tv1 = 0
    let x1 = curve.minus_b_over_a * (F::one() + tv1);
    let x1 = F::conditional_select(&x1, &curve.b_over_za, tv1.is_zero());
    let gx1 = g(&x1);

    // x2 = Zu²·x1, and g(x2) = Z³u⁶·g(x1) is a square whenever g(x1) is not
    let x2 = zu2 * x1;
    let gx2 = g(&x2);

    let gx1_square = gx1.is_square();
    let x = F::conditional_select(&x2, &x1, gx1_square);
    let y2 = F::conditional_select(&gx2, &gx1, gx1_square);
    let y = y2.sqrt().unwrap_or(F::zero());

    let y = F::conditional_select(&y, &-y, u.sgn0() ^ y.sgn0());
    (x, y)
}
