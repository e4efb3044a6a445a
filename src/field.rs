//! Prime-field arithmetic over F_q, q = 3329.
//!
//! Coefficients are canonical `u16` values in `[0, q)`; every operation
//! returns a reduced result. Multiplication uses Barrett reduction sized for
//! 12-bit operands (k = 12, r = ⌊2²⁴/q⌋ = 5039), so no division by q ever
//! happens at runtime. Everything is `const fn` so the NTT twiddle tables can
//! be built at compile time.
//!
//! `add`, `sub`, `mul` are constant-time for fixed-width operands. `inv` and
//! `pow` branch on their inputs and are only used with public values
//! (twiddle-table setup).

/// Field modulus: q = 13·2⁸ + 1.
pub const Q: u16 = 3329;

/// Barrett reciprocal: ⌊2²⁴ / q⌋.
const BARRETT_R: u32 = 5039;

/// Addition in F_q: conditional subtract keeps the result in `[0, q)`.
#[inline]
#[must_use]
pub const fn add(a: u16, b: u16) -> u16 {
    let t = a + b;
    t - ((t >= Q) as u16) * Q
}

/// Subtraction in F_q: adds q before subtracting, then conditionally corrects.
#[inline]
#[must_use]
pub const fn sub(a: u16, b: u16) -> u16 {
    let t = a + Q - b;
    t - ((t >= Q) as u16) * Q
}

/// Barrett reduction of a product-sized value.
///
/// Input: `a < q²`. Output: `a mod q`, canonical.
#[inline]
#[must_use]
pub const fn barrett_reduce(a: u32) -> u16 {
    let quot = ((a as u64 * BARRETT_R as u64) >> 24) as u32;
    let r = (a - quot * Q as u32) as u16;
    r - ((r >= Q) as u16) * Q
}

/// Multiplication in F_q via Barrett reduction of the 24-bit product.
#[inline]
#[must_use]
pub const fn mul(a: u16, b: u16) -> u16 {
    barrett_reduce(a as u32 * b as u32)
}

/// Extended Euclid on `(x, y)`: returns `(s, t, g)` with `s·x + t·y = g`.
const fn xgcd(x: i32, y: i32) -> (i32, i32, i32) {
    let (mut old_r, mut r) = (x, y);
    let (mut old_s, mut s) = (1i32, 0i32);
    let (mut old_t, mut t) = (0i32, 1i32);

    while r != 0 {
        let quotient = old_r / r;
        let tmp = old_r;
        old_r = r;
        r = tmp - quotient * r;
        let tmp = old_s;
        old_s = s;
        s = tmp - quotient * s;
        let tmp = old_t;
        old_t = t;
        t = tmp - quotient * t;
    }

    (old_s, old_t, old_r)
}

/// Multiplicative inverse in F_q.
///
/// `inv(0)` returns the sentinel 0; callers never rely on it.
#[must_use]
pub const fn inv(a: u16) -> u16 {
    if a == 0 {
        return 0;
    }
    let (s, _, _) = xgcd(a as i32, Q as i32);
    let mut v = s % Q as i32;
    if v < 0 {
        v += Q as i32;
    }
    v as u16
}

/// Exponentiation by repeated squaring.
///
/// `pow(a, 0) = 1` for any a; `pow(0, n) = 0` for n > 0.
#[must_use]
pub const fn pow(a: u16, n: u64) -> u16 {
    if n == 0 {
        return 1;
    }
    if a == 0 {
        return 0;
    }
    let mut base = a;
    let mut exp = n;
    let mut r = 1u16;
    while exp > 0 {
        if exp & 1 == 1 {
            r = mul(r, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_at_q() {
        assert_eq!(add(Q - 1, 1), 0);
        assert_eq!(add(Q - 1, 2), 1);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn sub_wraps_below_zero() {
        assert_eq!(sub(0, 1), Q - 1);
        assert_eq!(sub(5, 5), 0);
        assert_eq!(sub(1, Q - 1), 2);
    }

    #[test]
    fn mul_matches_wide_modmul() {
        // Stride through the field; compare against plain u32 arithmetic.
        for a in (0..Q).step_by(23) {
            for b in (0..Q).step_by(29) {
                let expected = ((a as u32 * b as u32) % Q as u32) as u16;
                assert_eq!(mul(a, b), expected, "mul({a}, {b})");
            }
        }
    }

    #[test]
    fn mul_extremes() {
        assert_eq!(mul(Q - 1, Q - 1), 1); // (-1)·(-1) = 1
        assert_eq!(mul(Q - 1, 1), Q - 1);
        assert_eq!(mul(0, Q - 1), 0);
    }

    #[test]
    fn inv_times_self_is_one() {
        // Exhaustive over the multiplicative group.
        for a in 1..Q {
            assert_eq!(mul(a, inv(a)), 1, "a = {a}");
        }
    }

    #[test]
    fn inv_zero_sentinel() {
        assert_eq!(inv(0), 0);
    }

    #[test]
    fn pow_edge_cases() {
        assert_eq!(pow(0, 0), 1);
        assert_eq!(pow(0, 5), 0);
        assert_eq!(pow(1234, 0), 1);
        assert_eq!(pow(1234, 1), 1234);
    }

    #[test]
    fn pow_matches_fermat() {
        // a^(q-1) = 1 for a != 0, and a^(q-2) = a^{-1}.
        for a in [1u16, 3, 17, 256, 2020] {
            assert_eq!(pow(a, Q as u64 - 1), 1);
            assert_eq!(pow(a, Q as u64 - 2), inv(a));
        }
    }

    #[test]
    fn generator_order() {
        // 17 is a primitive 256-th root of unity: 17^128 = -1, 17^256 = 1.
        assert_eq!(pow(17, 128), Q - 1);
        assert_eq!(pow(17, 256), 1);
    }

    #[test]
    fn barrett_reduce_small_inputs() {
        assert_eq!(barrett_reduce(0), 0);
        assert_eq!(barrett_reduce(Q as u32), 0);
        assert_eq!(barrett_reduce(Q as u32 + 1), 1);
        assert_eq!(barrett_reduce(4095), 4095 - Q);
    }
}
