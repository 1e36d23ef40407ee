//! All encoding and decoding is done via u64; [`BitCast`] is the seam for types that
//! travel that way.

use crate::codec::{decode_double, encode_double};
use crate::layout::EncodedParts;

/// Conversion to and from the u64 serialization.
/// Anything that stores or transmits encoded doubles as plain u64 values can be
/// generic over this trait.
pub trait BitCast: Sized {
    /// Convert the value to a u64.
    fn to_u64(&self) -> u64;
    /// Convert a u64 to the value.
    fn from_u64(value: u64) -> Self;
}
impl BitCast for u64 {
    fn to_u64(&self) -> u64 {
        *self
    }
    fn from_u64(value: u64) -> Self {
        value
    }
}
impl BitCast for f64 {
    fn to_u64(&self) -> u64 {
        encode_double(*self)
    }
    fn from_u64(value: u64) -> Self {
        decode_double(value)
    }
}
impl BitCast for EncodedParts {
    fn to_u64(&self) -> u64 {
        (*self).into()
    }
    fn from_u64(value: u64) -> Self {
        value.into()
    }
}
