//! Multi-limb Montgomery arithmetic shared by `Fp` and `Scalar`.
//!
//! Every routine is a `const fn` over `N` little-endian 64-bit limbs so that
//! curve and field constants can be computed at compile time. None of them
//! branch on limb values.

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow mask)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Subtract `m` from the value `hi * 2^(64N) + t` when it is at least `m`.
#[inline(always)]
const fn reduce_once<const N: usize>(t: [u64; N], hi: u64, m: &[u64; N]) -> [u64; N] {
    let mut d = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(t[i], m[i], borrow);
        d[i] = v;
        borrow = b;
        i += 1;
    }
    // All ones when the subtraction underflowed, i.e. the input was below m
    let (_, borrow) = sbb(hi, 0, borrow);

    let mut i = 0;
    while i < N {
        d[i] = (t[i] & borrow) | (d[i] & !borrow);
        i += 1;
    }
    d
}

/// (a + b) mod m for a, b < m
#[inline]
pub(crate) const fn add_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut t = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(a[i], b[i], carry);
        t[i] = v;
        carry = c;
        i += 1;
    }
    reduce_once(t, carry, m)
}

/// (a - b) mod m for a, b < m
#[inline]
pub(crate) const fn sub_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut t = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(a[i], b[i], borrow);
        t[i] = v;
        borrow = b;
        i += 1;
    }

    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(t[i], m[i] & borrow, carry);
        t[i] = v;
        carry = c;
        i += 1;
    }
    t
}

/// (-a) mod m for a < m, mapping zero to zero
#[inline]
pub(crate) const fn neg_mod<const N: usize>(a: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut t = [0u64; N];
    let mut borrow = 0;
    let mut acc = 0;
    let mut i = 0;
    while i < N {
        let (v, b) = sbb(m[i], a[i], borrow);
        t[i] = v;
        borrow = b;
        acc |= a[i];
        i += 1;
    }

    let mask = ((acc == 0) as u64).wrapping_sub(1);
    let mut i = 0;
    while i < N {
        t[i] &= mask;
        i += 1;
    }
    t
}

/// Montgomery product a * b * 2^(-64N) mod m (CIOS).
///
/// Requires `m` odd with at least one spare top bit and `inv = -m^(-1) mod 2^64`.
/// At least one operand must be below `m`; the other may be any N-limb value.
#[inline]
pub(crate) const fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    m: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut t_hi = 0u64;

    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (top, top_hi) = adc(t_hi, carry, 0);

        let k = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], k, m[0], 0);
        let mut j = 1;
        while j < N {
            let (v, c) = mac(t[j], k, m[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(top, carry, 0);
        t[N - 1] = v;
        t_hi = top_hi + c;

        i += 1;
    }

    reduce_once(t, t_hi, m)
}

/// Returns all-ones when `a < b` as unsigned N-limb integers.
#[inline]
pub(crate) const fn lt_mask<const N: usize>(a: &[u64; N], b: &[u64; N]) -> u64 {
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (_, bb) = sbb(a[i], b[i], borrow);
        borrow = bb;
        i += 1;
    }
    borrow
}

/// Check `inv` against a modulus' lowest limb: `-m^(-1) mod 2^64`.
#[cfg(test)]
pub(crate) fn compute_inv(m0: u64) -> u64 {
    let mut inv = 1u64;
    for _ in 0..63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m0);
    }
    inv.wrapping_neg()
}
