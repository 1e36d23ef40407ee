#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! The `serfloat` Rust crate serializes `f64` values to and from a single `u64`, bit for
//! bit in the IEEE-754 binary64 layout, without ever reading or writing the native
//! storage of a double. The fields are derived from an exponent/fraction split and
//! values are rebuilt by scaling with exact powers of two, so the encoding is the same
//! on every host. This crate is a 0 dependency package that uses `no_std` and is
//! intended to be used in embedded systems and WASM applications.
//!
//! Byte order and framing are up to the caller: the codec only ever produces and
//! consumes the integer.
//!
//! ## Usage
//!
//! ```rust
//! use serfloat::{decode_double, encode_double};
//!
//! assert_eq!(encode_double(1.0), 0x3FF0_0000_0000_0000);
//! assert_eq!(encode_double(-1.0), 0xBFF0_0000_0000_0000);
//! assert_eq!(decode_double(0x3FF0_0000_0000_0000), 1.0);
//! assert_eq!(decode_double(0x7FF0_0000_0000_0000), f64::INFINITY);
//!
//! let x = 123456.789;
//! assert_eq!(decode_double(encode_double(x)), x);
//! ```
//!
//! Both functions are total. A few inputs are deliberately lossy:
//!
//! - every NaN encodes to [`CANONICAL_NAN`], dropping its sign and payload, and every
//!   NaN encoding decodes to the same quiet NaN;
//! - signed zeros and signed infinities keep their sign.
//!
//! ```rust
//! use serfloat::{decode_double, encode_double, math::is_sign_negative, CANONICAL_NAN};
//!
//! assert_eq!(encode_double(-f64::NAN), CANONICAL_NAN);
//! assert!(decode_double(0xFFF0_0000_0000_0001).is_nan());
//!
//! let neg_zero = decode_double(encode_double(-0.0));
//! assert!(is_sign_negative(neg_zero));
//! ```
//!
//! The encoded value can be taken apart with [`EncodedParts`]:
//!
//! ```rust
//! use serfloat::{encode_double, EncodedParts, FloatClass};
//!
//! let parts = EncodedParts::from(encode_double(5e-310));
//! assert_eq!(parts.class(), FloatClass::Subnormal);
//! assert_eq!(parts.biased_exponent, 0);
//! assert_eq!(parts.exponent(), Some(-1074));
//! ```
//!
//! Anything that moves u64 values around can be generic over [`BitCast`]:
//!
//! ```rust
//! use serfloat::BitCast;
//!
//! fn store<T: BitCast>(values: &[T]) -> Vec<u64> {
//!     values.iter().map(|v| v.to_u64()).collect()
//! }
//!
//! let stored = store(&[0.5_f64, -2.0]);
//! assert_eq!(stored, vec![0x3FE0_0000_0000_0000, 0xC000_0000_0000_0000]);
//! assert_eq!(f64::from_u64(stored[1]), -2.0);
//! ```

extern crate serfloat_core;

pub use serfloat_core::*;
