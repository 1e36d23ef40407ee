//! Float primitives built only from comparisons, addition and multiplication.
//!
//! Nothing here reads or writes the storage bytes of an `f64`. Powers of two are
//! produced by repeated doubling/halving in `const fn`s, so every constant is exact
//! and every scaling step is a plain multiplication.

use crate::layout::FloatClass;

/// 2^k for `0 <= k <= 1023`.
const fn pow2(k: u32) -> f64 {
    let mut res = 1.0;
    let mut i = 0;
    while i < k {
        res *= 2.0;
        i += 1;
    }
    res
}

/// 2^-k for `0 <= k <= 1022`.
const fn pow2_neg(k: u32) -> f64 {
    let mut res = 1.0;
    let mut i = 0;
    while i < k {
        res *= 0.5;
        i += 1;
    }
    res
}

/// Binary decomposition steps `(k, 2^k, 2^-k)`; the shifts sum to 1023.
const STEPS: [(i32, f64, f64); 10] = [
    (512, pow2(512), pow2_neg(512)),
    (256, pow2(256), pow2_neg(256)),
    (128, pow2(128), pow2_neg(128)),
    (64, pow2(64), pow2_neg(64)),
    (32, pow2(32), pow2_neg(32)),
    (16, pow2(16), pow2_neg(16)),
    (8, pow2(8), pow2_neg(8)),
    (4, pow2(4), pow2_neg(4)),
    (2, pow2(2), pow2_neg(2)),
    (1, pow2(1), pow2_neg(1)),
];

const TWO_52: f64 = pow2(52);
const TWO_54: f64 = pow2(54);
const TWO_1023: f64 = pow2(1023);
/// 2^-1022 * 2^53: keeps a pre-scaled value above the subnormal range.
const TWO_NEG_969: f64 = pow2_neg(969);

/// Exact 2^n for `-1022 <= n <= 1023`. Every partial product stays normal.
fn exp2i(n: i32) -> f64 {
    let mut rem = n.unsigned_abs() as i32;
    let mut res = 1.0;
    for &(k, up, down) in STEPS.iter() {
        if rem >= k {
            res *= if n >= 0 { up } else { down };
            rem -= k;
        }
    }
    res
}

/// Returns `true` if `x` carries a negative sign, including `-0.0` and `-inf`.
///
/// The sign of a NaN is not observable arithmetically, so NaN reports `false`.
#[inline]
pub fn is_sign_negative(x: f64) -> bool {
    x < 0.0 || (x == 0.0 && 1.0 / x < 0.0)
}

/// Returns `magnitude` with the sign of `sign`. Signed zeros and infinities on
/// either side behave as in IEEE-754 `copysign`.
#[inline]
pub fn copysign(magnitude: f64, sign: f64) -> f64 {
    if is_sign_negative(magnitude) != is_sign_negative(sign) {
        -magnitude
    } else {
        magnitude
    }
}

/// Absolute value, `-0.0` becomes `0.0`.
#[inline]
pub fn abs(x: f64) -> f64 {
    if is_sign_negative(x) { -x } else { x }
}

/// Classify a double without looking at its bits.
pub fn classify(x: f64) -> FloatClass {
    if x.is_nan() {
        FloatClass::Nan
    } else if x == 0.0 {
        FloatClass::Zero
    } else if x == f64::INFINITY || x == f64::NEG_INFINITY {
        FloatClass::Infinite
    } else if abs(x) < f64::MIN_POSITIVE {
        FloatClass::Subnormal
    } else {
        FloatClass::Normal
    }
}

/// Split `x` into a fraction with magnitude in `[0.5, 1)` and a binary exponent so
/// that `x == fraction * 2^exponent`. The fraction keeps the sign of `x`.
///
/// Zeros, infinities and NaN come back unchanged with an exponent of 0.
pub fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || x.is_nan() || x == f64::INFINITY || x == f64::NEG_INFINITY {
        return (x, 0);
    }
    let negative = x < 0.0;
    let mut m = if negative { -x } else { x };
    let mut exp = 0;
    if m < f64::MIN_POSITIVE {
        m *= TWO_54;
        exp -= 54;
    }
    if m >= 1.0 {
        for &(k, up, down) in STEPS.iter() {
            if m >= up {
                m *= down;
                exp += k;
            }
        }
        // m is now in [1, 2)
        m *= 0.5;
        exp += 1;
    } else {
        for &(k, up, down) in STEPS.iter() {
            if m < down {
                m *= up;
                exp -= k;
            }
        }
    }

    (if negative { -m } else { m }, exp)
}

/// Compute `x * 2^exp` with a single rounding.
///
/// Results beyond the finite range saturate to a signed infinity, results below
/// the smallest subnormal to a signed zero.
pub fn ldexp(x: f64, exp: i32) -> f64 {
    let mut y = x;
    let mut n = exp;
    if n > 1023 {
        y *= TWO_1023;
        n -= 1023;
        if n > 1023 {
            y *= TWO_1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // leave the final multiply with n < -53 so a subnormal result rounds once
        y *= TWO_NEG_969;
        n += 969;
        if n < -1022 {
            y *= TWO_NEG_969;
            n += 969;
            if n < -1022 {
                n = -1022;
            }
        }
    }

    y * exp2i(n)
}

/// Round to the nearest integer, ties to even.
///
/// Relies on the host's round-to-nearest-even arithmetic: adding and removing
/// 2^52 discards exactly the fractional bits. Magnitudes at or above 2^52 are
/// already integral and pass through, as do NaN and infinities.
pub fn round_ties_even(x: f64) -> f64 {
    if x == 0.0 || !(abs(x) < TWO_52) {
        return x;
    }
    let m = abs(x);
    let rounded = (m + TWO_52) - TWO_52;
    copysign(rounded, x)
}
