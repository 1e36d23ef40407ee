//! The double codec: [`encode_double`] and [`decode_double`].

use crate::layout::{
    CANONICAL_NAN, EncodedParts, FloatClass, IMPLICIT_BIT, INFINITY_BITS, MANTISSA_MASK,
    SIGN_MASK,
};
use crate::math::{classify, copysign, frexp, ldexp, round_ties_even};

/// 2^53
const SIGNIFICAND_SCALE: f64 = 9007199254740992.0;

/// Decode a u64 produced by [`encode_double`] (or any other u64) into a double.
///
/// Every input decodes. Encodings with an all-ones exponent and a nonzero mantissa
/// all decode to the same quiet NaN; their sign and payload are dropped.
pub fn decode_double(encoded: u64) -> f64 {
    let sign = if encoded & SIGN_MASK != 0 { -1.0 } else { 1.0 };
    let encoded = encoded & !SIGN_MASK;
    // Zero
    if encoded == 0 {
        return copysign(0.0, sign);
    }
    // Infinity
    if encoded == INFINITY_BITS {
        return copysign(f64::INFINITY, sign);
    }
    // Other numbers
    let parts = EncodedParts::from(encoded);
    match (parts.significand(), parts.exponent()) {
        (Some(significand), Some(exponent)) => copysign(ldexp(significand as f64, exponent), sign),
        // NaN
        _ => f64::NAN,
    }
}

/// Encode a double into a u64 using the IEEE-754 binary64 field layout.
///
/// The fields are computed from an exponent/fraction split, never read from the
/// value's storage. Every NaN encodes to [`CANONICAL_NAN`].
pub fn encode_double(value: f64) -> u64 {
    let class = classify(value);
    let mut value = value;
    let mut sign = 0;
    if copysign(1.0, value) == -1.0 {
        value = -value;
        sign = SIGN_MASK;
    }
    match class {
        FloatClass::Zero => sign,
        FloatClass::Infinite => sign | INFINITY_BITS,
        FloatClass::Nan => CANONICAL_NAN,
        FloatClass::Subnormal | FloatClass::Normal => {
            let (fraction, exponent) = frexp(value);
            pack_finite(sign, fraction, exponent)
        }
    }
}

/// Pack a positive `fraction` in `[0.5, 1)` and its binary exponent.
///
/// Exponents below -1084 collapse to zero, above 1024 to infinity.
pub(crate) fn pack_finite(sign: u64, fraction: f64, exponent: i32) -> u64 {
    let mut mantissa = round_ties_even(fraction * SIGNIFICAND_SCALE) as u64;
    let mut exponent = exponent;
    // rounding can carry into bit 53
    if mantissa > MANTISSA_MASK | IMPLICIT_BIT {
        mantissa >>= 1;
        exponent += 1;
    }
    if exponent < -1021 {
        // Too small to represent, encode 0
        if exponent < -1084 {
            return sign;
        }
        // Subnormal numbers; a carry lands in the exponent field as the min normal
        sign | (mantissa >> (-1021 - exponent))
    } else {
        // Too big to represent, encode infinity
        if exponent > 1024 {
            return sign | INFINITY_BITS;
        }
        // Normal numbers
        sign | (((1022 + exponent) as u64) << 52) | (mantissa & MANTISSA_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::is_sign_negative;

    #[test]
    fn test_concrete_values() {
        assert_eq!(encode_double(0.0), 0x0000_0000_0000_0000);
        assert_eq!(encode_double(1.0), 0x3FF0_0000_0000_0000);
        assert_eq!(decode_double(0x3FF0_0000_0000_0000), 1.0);
        assert_eq!(encode_double(-1.0), 0xBFF0_0000_0000_0000);
        assert_eq!(decode_double(0x7FF0_0000_0000_0000), f64::INFINITY);
        assert_eq!(encode_double(2.0), 0x4000_0000_0000_0000);
        assert_eq!(encode_double(0.1), 0x3FB9_9999_9999_999A);
        assert_eq!(encode_double(f64::MAX), 0x7FEF_FFFF_FFFF_FFFF);
        assert_eq!(encode_double(f64::MIN_POSITIVE), 0x0010_0000_0000_0000);
        assert_eq!(encode_double(5e-324), 1);
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(encode_double(-0.0), SIGN_MASK);
        let pos = decode_double(encode_double(0.0));
        let neg = decode_double(encode_double(-0.0));
        assert_eq!(pos, 0.0);
        assert_eq!(neg, 0.0);
        assert!(!is_sign_negative(pos));
        assert!(is_sign_negative(neg));
    }

    #[test]
    fn test_infinity() {
        assert_eq!(encode_double(f64::INFINITY), INFINITY_BITS);
        assert_eq!(encode_double(f64::NEG_INFINITY), SIGN_MASK | INFINITY_BITS);
        assert_eq!(decode_double(encode_double(f64::INFINITY)), f64::INFINITY);
        assert_eq!(decode_double(encode_double(f64::NEG_INFINITY)), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_canonical() {
        assert_eq!(encode_double(f64::NAN), CANONICAL_NAN);
        assert_eq!(encode_double(-f64::NAN), CANONICAL_NAN);
        assert_eq!(encode_double(f64::INFINITY - f64::INFINITY), CANONICAL_NAN);
        assert!(decode_double(CANONICAL_NAN).is_nan());
        assert!(decode_double(0xFFF0_0000_0000_0001).is_nan());
        assert!(decode_double(0x7FFF_FFFF_FFFF_FFFF).is_nan());
    }

    #[test]
    fn test_finite_round_trip() {
        for x in [
            1.0,
            -1.0,
            0.5,
            123456.789,
            -123456.789,
            5e-310,
            -5e-310,
            1.7976931348623157e308,
            -1.7976931348623157e308,
            f64::MIN_POSITIVE,
            2.225073858507201e-308,
            5e-324,
            core::f64::consts::PI,
        ] {
            assert_eq!(decode_double(encode_double(x)), x);
        }
    }

    #[test]
    fn test_subnormal_decode() {
        assert_eq!(decode_double(1), 5e-324);
        assert_eq!(decode_double(SIGN_MASK | 1), -5e-324);
        assert_eq!(decode_double(MANTISSA_MASK), 2.225073858507201e-308);
    }

    #[test]
    fn test_pack_boundaries() {
        // 0.5 * 2^-1073 is the smallest subnormal; past -1084 everything is dropped
        assert_eq!(pack_finite(0, 0.5, -1073), 1);
        assert_eq!(pack_finite(0, 0.5, -1084), 0);
        assert_eq!(pack_finite(0, 0.5, -1085), 0);
        assert_eq!(pack_finite(SIGN_MASK, 0.5, -1085), SIGN_MASK);
        assert_eq!(pack_finite(SIGN_MASK, 0.5, -2000), SIGN_MASK);
        // exponent 1024 is the top binade, 1025 overflows
        assert_eq!(pack_finite(0, 0.5, 1024), 0x7FE0_0000_0000_0000);
        assert_eq!(pack_finite(0, 0.5, 1025), INFINITY_BITS);
        assert_eq!(pack_finite(SIGN_MASK, 0.5, 1025), SIGN_MASK | INFINITY_BITS);
        // first subnormal/normal boundary
        assert_eq!(pack_finite(0, 0.5, -1021), 0x0010_0000_0000_0000);
        assert_eq!(pack_finite(0, 0.5, -1022), 0x0008_0000_0000_0000);
    }

    #[test]
    fn test_pack_rounding_carry() {
        // a fraction that rounds up to 1.0 carries into the next binade
        assert_eq!(pack_finite(0, 1.0, 1), 0x4000_0000_0000_0000);
        assert_eq!(pack_finite(0, 1.0, 1024), INFINITY_BITS);
        // and from the top of the subnormal range into the smallest normal
        assert_eq!(pack_finite(0, 1.0, -1022), 0x0010_0000_0000_0000);
        assert_eq!(pack_finite(0, 1.0, -1030), 0x0000_1000_0000_0000);
    }
}
