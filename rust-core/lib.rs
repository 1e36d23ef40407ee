#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! Core of the `serfloat` crate: encode an `f64` as a u64 with the IEEE-754 binary64
//! field layout, and decode it back, using only arithmetic on the value itself.

pub mod bit_cast;
pub mod codec;
pub mod layout;
pub mod math;

pub use bit_cast::BitCast;
pub use codec::{decode_double, encode_double};
pub use layout::*;

#[cfg(test)]
#[macro_use]
extern crate std;
