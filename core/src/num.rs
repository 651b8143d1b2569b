mod bigint;
mod digits;
mod fraction;
mod integer;
mod radix;

pub use bigint::{BigInt, DecBigInt, DenseBigInt, MulStrategy};
pub use fraction::{Expansion, Fraction};
pub use integer::Integer;
pub use radix::{Binary, Byte, Decimal, Dense, Digit, Hex, Radix};
