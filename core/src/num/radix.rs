use std::fmt;
use std::hash::Hash;

/// Storage type for a single digit.
pub trait Digit:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const MAX: u64;

    fn to_u64(self) -> u64;

    /// `value` must not exceed `Self::MAX`.
    fn from_u64(value: u64) -> Self;
}

macro_rules! impl_digit {
    ($($t:ty),*) => {$(
        impl Digit for $t {
            #[allow(clippy::as_conversions)]
            const MAX: u64 = <$t>::MAX as u64;

            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
            fn from_u64(value: u64) -> Self {
                debug_assert!(value <= <Self as Digit>::MAX);
                value as $t
            }
        }
    )*};
}

impl_digit!(u8, u16, u32, u64);

/// A digit-base policy: the radix `BASE` and the type each digit is stored in.
///
/// All arithmetic accumulates in `u128`, so any `BASE` that fits in a `u64`
/// keeps `(BASE - 1)^2 + 2 * (BASE - 1)` inside the accumulator. The only
/// remaining constraint is that `BASE - 1` fits the digit type, which is
/// checked at compile time the first time a `BigInt` of this radix is built.
pub trait Radix:
    Copy + Clone + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    type Digit: Digit;
    const BASE: u64;

    /// Operands shorter than this many digits are multiplied with the
    /// schoolbook algorithm even when Karatsuba is selected.
    const KARATSUBA_THRESHOLD: usize = 32;

    #[doc(hidden)]
    const ASSERT_VALID: () = assert!(
        Self::BASE >= 2 && Self::BASE - 1 <= <Self::Digit as Digit>::MAX,
        "radix must be at least 2 and its largest digit must fit the digit type"
    );
}

/// Declares a new digit-base policy.
///
/// ```
/// seqnum_core::radix!(
///     /// Base 1000, stored in `u16`.
///     Kilo, u16, 1000
/// );
/// let n = seqnum_core::BigInt::<Kilo>::from(1_234_567);
/// assert_eq!(n.digits(), &[567, 234, 1]);
/// ```
///
/// A base whose largest digit does not fit the digit type is rejected when
/// the radix is first used:
///
/// ```compile_fail
/// seqnum_core::radix!(Oversized, u8, 300);
/// let _ = seqnum_core::BigInt::<Oversized>::from(5);
/// ```
///
/// So is a base below 2:
///
/// ```compile_fail
/// seqnum_core::radix!(Unary, u8, 1);
/// let _ = seqnum_core::BigInt::<Unary>::from(5);
/// ```
#[macro_export]
macro_rules! radix {
    ($(#[$meta:meta])* $name:ident, $digit:ty, $base:expr) => {
        $crate::radix!($(#[$meta])* $name, $digit, $base, 32);
    };
    ($(#[$meta:meta])* $name:ident, $digit:ty, $base:expr, $threshold:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $crate::Radix for $name {
            type Digit = $digit;
            const BASE: u64 = $base;
            const KARATSUBA_THRESHOLD: usize = $threshold;
        }
    };
}

radix!(
    /// Base 2, one bit per `u8`.
    Binary, u8, 2, 256
);
radix!(
    /// Base 10, the radix reference b-files are written in.
    Decimal, u16, 10, 64
);
radix!(
    /// Base 16.
    Hex, u16, 16, 64
);
radix!(
    /// Base 256, one byte per digit.
    Byte, u8, 256
);
radix!(
    /// Base 2^31 in `u32`; the dense radix used for heavy arithmetic.
    Dense, u32, 1 << 31
);

pub(crate) fn assert_valid<R: Radix>() {
    #[allow(clippy::let_unit_value)]
    let () = R::ASSERT_VALID;
}

/// Writes one digit: bare when the radix is at most 10, otherwise in
/// parentheses so multi-character digits stay unambiguous.
pub(crate) fn write_digit<R: Radix>(f: &mut fmt::Formatter<'_>, digit: u64) -> fmt::Result {
    if R::BASE <= 10 {
        write!(f, "{}", digit)
    } else {
        write!(f, "({})", digit)
    }
}
