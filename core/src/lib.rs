//! Multi-base arbitrary-precision integers and exact fractions.
//!
//! [`BigInt`] stores a sign and little-endian digits in a radix chosen by a
//! [`Radix`] policy, so the same arithmetic runs in base 10 for output that
//! has to match reference digit sequences, or in a dense power-of-two base
//! for speed. [`Fraction`] pairs two integers and can be expanded to any
//! number of digits in any radix.
//!
//! ```
//! use seqnum_core::{DecBigInt, DenseBigInt, Fraction};
//!
//! let mut n = DenseBigInt::from(1_000_000_000);
//! n = &n * &n + 1;
//! n *= 123_456;
//! assert_eq!(DecBigInt::from_radix(&n).to_string(), "123456000000000000123456");
//!
//! let third = Fraction::new(DenseBigInt::from(1), DenseBigInt::from(3));
//! assert_eq!(third.expansion::<seqnum_core::Decimal>(5).to_string(), "0.33333");
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod math;
mod num;

#[cfg(test)]
mod proptests;

pub use error::NumError;
pub use num::{
    BigInt, Binary, Byte, DecBigInt, Decimal, Dense, DenseBigInt, Digit, Expansion, Fraction,
    Hex, Integer, MulStrategy, Radix,
};
