//! Field layout of an encoded double.
//!
//! ```text
//!  63 | 62 ........ 52 | 51 ..................... 0
//! sign  biased exponent            mantissa
//! ```

/// Bit 63.
pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
/// Bits 62-52.
pub const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
/// Bits 51-0.
pub const MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
/// The implicit leading significand bit of a normal number.
pub const IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000;
/// Exponent all ones, mantissa zero.
pub const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;
/// The only NaN encoding the codec produces.
pub const CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;
/// Bias added to the true binary exponent.
pub const EXPONENT_BIAS: i32 = 1023;
/// Width of the mantissa field.
pub const MANTISSA_BITS: u32 = 52;
/// Largest biased exponent; marks infinities and NaNs.
pub const MAX_BIASED_EXPONENT: u16 = 0x7FF;

/// Magnitude class of a double.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// `+0.0` or `-0.0`
    Zero,
    /// Nonzero, below the smallest normal magnitude; no implicit leading bit.
    Subnormal,
    /// Biased exponent in `1..=2046`.
    Normal,
    /// `+inf` or `-inf`
    Infinite,
    /// Not a number.
    Nan,
}

/// The three fields of an encoded double.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EncodedParts {
    /// Bit 63.
    pub negative: bool,
    /// 11-bit biased exponent.
    pub biased_exponent: u16,
    /// 52-bit mantissa, without the implicit bit.
    pub mantissa: u64,
}
impl EncodedParts {
    /// Build from raw fields. Values wider than their field are masked to it.
    pub fn new(negative: bool, biased_exponent: u16, mantissa: u64) -> Self {
        EncodedParts {
            negative,
            biased_exponent: biased_exponent & MAX_BIASED_EXPONENT,
            mantissa: mantissa & MANTISSA_MASK,
        }
    }

    /// Classify from the fields alone.
    pub fn class(&self) -> FloatClass {
        match (self.biased_exponent, self.mantissa) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (MAX_BIASED_EXPONENT, 0) => FloatClass::Infinite,
            (MAX_BIASED_EXPONENT, _) => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }

    /// Binary exponent `e` such that the magnitude is `significand * 2^e`.
    /// `None` for zeros, infinities and NaN.
    pub fn exponent(&self) -> Option<i32> {
        match self.class() {
            FloatClass::Subnormal => Some(1 - EXPONENT_BIAS - MANTISSA_BITS as i32),
            FloatClass::Normal => {
                Some(self.biased_exponent as i32 - EXPONENT_BIAS - MANTISSA_BITS as i32)
            }
            _ => None,
        }
    }

    /// Integer significand, implicit bit included for normal numbers.
    pub fn significand(&self) -> Option<u64> {
        match self.class() {
            FloatClass::Subnormal => Some(self.mantissa),
            FloatClass::Normal => Some(self.mantissa | IMPLICIT_BIT),
            _ => None,
        }
    }

    /// Every encoding except a non-canonical NaN is one `encode_double` can return.
    pub fn is_canonical(&self) -> bool {
        self.class() != FloatClass::Nan || u64::from(*self) == CANONICAL_NAN
    }
}
impl From<u64> for EncodedParts {
    fn from(val: u64) -> Self {
        EncodedParts {
            negative: val & SIGN_MASK != 0,
            biased_exponent: ((val & EXPONENT_MASK) >> MANTISSA_BITS) as u16,
            mantissa: val & MANTISSA_MASK,
        }
    }
}
impl From<EncodedParts> for u64 {
    fn from(parts: EncodedParts) -> Self {
        let sign = if parts.negative { SIGN_MASK } else { 0 };
        sign | (((parts.biased_exponent & MAX_BIASED_EXPONENT) as u64) << MANTISSA_BITS)
            | (parts.mantissa & MANTISSA_MASK)
    }
}
