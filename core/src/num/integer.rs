use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// The integer operations a [`Fraction`](super::Fraction) needs from its
/// numerator and denominator type.
pub trait Integer:
    Clone
    + Ord
    + fmt::Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    fn is_negative(&self) -> bool;

    /// Additive inverse. Only called on values of signed types.
    fn negate(self) -> Self;

    /// Additive inverse, or `None` if it is not representable.
    fn checked_negate(self) -> Option<Self>;

    fn into_abs(self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self
        }
    }

    fn to_f64(&self) -> f64;

    /// Approximates `num / den` as a float.
    #[allow(clippy::float_arithmetic)]
    fn ratio_f64(num: &Self, den: &Self) -> f64 {
        num.to_f64() / den.to_f64()
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            fn is_negative(&self) -> bool {
                *self < 0
            }

            fn negate(self) -> Self {
                -self
            }

            fn checked_negate(self) -> Option<Self> {
                self.checked_neg()
            }

            #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Integer for $t {
            fn is_negative(&self) -> bool {
                false
            }

            fn negate(self) -> Self {
                unreachable!("unsigned values are never negative")
            }

            fn checked_negate(self) -> Option<Self> {
                self.checked_neg()
            }

            #[allow(clippy::as_conversions, clippy::cast_precision_loss)]
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    )*};
}

impl_signed!(i32, i64, i128);
impl_unsigned!(u32, u64, u128);
