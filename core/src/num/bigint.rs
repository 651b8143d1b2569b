use super::digits;
use super::integer::Integer;
use super::radix::{self, Decimal, Digit, Radix};
use crate::error::NumError;
use log::trace;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::str::FromStr;

mod sign {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) enum Sign {
        Positive,
        Negative,
    }

    impl Sign {
        pub(crate) const fn flip(self) -> Self {
            match self {
                Self::Positive => Self::Negative,
                Self::Negative => Self::Positive,
            }
        }

        pub(crate) const fn sign_of_product(a: Self, b: Self) -> Self {
            match (a, b) {
                (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => {
                    Self::Positive
                }
                (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive) => {
                    Self::Negative
                }
            }
        }
    }
}

use sign::Sign;

/// How two magnitudes get multiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulStrategy {
    Schoolbook,
    /// Divide and conquer down to operands shorter than `threshold` digits.
    Karatsuba { threshold: usize },
}

impl MulStrategy {
    /// The strategy `*` uses for radix `R`.
    pub fn default_for<R: Radix>() -> Self {
        if cfg!(feature = "karatsuba") {
            Self::Karatsuba {
                threshold: R::KARATSUBA_THRESHOLD,
            }
        } else {
            Self::Schoolbook
        }
    }
}

/// Arbitrary-precision signed integer stored as little-endian digits of
/// radix `R`.
///
/// Digits are kept normalized: there is always at least one digit, the most
/// significant digit is non-zero unless the value is zero, and zero is never
/// negative.
#[derive(Clone)]
pub struct BigInt<R: Radix> {
    sign: Sign,
    // little-endian, len >= 1
    digits: Vec<R::Digit>,
}

pub type DecBigInt = BigInt<Decimal>;
pub type DenseBigInt = BigInt<radix::Dense>;

impl<R: Radix> BigInt<R> {
    fn from_parts(sign: Sign, digits: Vec<R::Digit>) -> Self {
        radix::assert_valid::<R>();
        let mut res = Self { sign, digits };
        res.normalize();
        res
    }

    fn normalize(&mut self) {
        digits::trim(&mut self.digits);
        if digits::is_zero(&self.digits) {
            self.sign = Sign::Positive;
        }
    }

    /// Little-endian digits of the magnitude.
    pub fn digits(&self) -> &[R::Digit] {
        &self.digits
    }

    pub fn is_neg(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0].to_u64() == 0
    }

    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_neg() {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            digits: self.digits.clone(),
        }
    }

    /// Compares magnitudes, ignoring signs.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        digits::cmp(&self.digits, &other.digits)
    }

    /// Converts a value of another radix by accumulating its digits into
    /// this radix, most significant digit first.
    pub fn from_radix<S: Radix>(other: &BigInt<S>) -> Self {
        if S::BASE == R::BASE {
            let copied = other
                .digits
                .iter()
                .map(|d| R::Digit::from_u64(d.to_u64()))
                .collect();
            return Self::from_parts(other.sign, copied);
        }
        trace!(
            "converting {} digits from base {} to base {}",
            other.digits.len(),
            S::BASE,
            R::BASE
        );
        let source_base = digits::from_u128::<R>(u128::from(S::BASE));
        let mut acc = digits::zero();
        for d in other.digits.iter().rev() {
            acc = digits::mul_schoolbook::<R>(&acc, &source_base);
            digits::add_assign::<R>(&mut acc, &digits::from_u128::<R>(u128::from(d.to_u64())));
        }
        Self::from_parts(other.sign, acc)
    }

    pub fn convert<S: Radix>(&self) -> BigInt<S> {
        BigInt::<S>::from_radix(self)
    }

    fn from_decimal_digits(sign: Sign, mut msf: Vec<<Decimal as Radix>::Digit>) -> Self {
        msf.reverse();
        Self::from_radix(&BigInt::<Decimal>::from_parts(sign, msf))
    }

    /// Parses decimal digits, skipping every character that is not an ASCII
    /// digit. A leading `-` makes the value negative; an input without any
    /// digits is zero.
    pub fn parse_lenient(s: &str) -> Self {
        let (sign, rest) = split_sign(s);
        let msf = rest
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .map(|d| <Decimal as Radix>::Digit::from_u64(u64::from(d)))
            .collect();
        Self::from_decimal_digits(sign, msf)
    }

    /// computes `self += other`, or `self -= other` if `negate_other` is set
    fn signed_add(&mut self, other: &Self, negate_other: bool) {
        let other_sign = if negate_other {
            other.sign.flip()
        } else {
            other.sign
        };
        if self.sign == other_sign {
            digits::add_assign::<R>(&mut self.digits, &other.digits);
        } else {
            match self.abs_cmp(other) {
                Ordering::Equal => {
                    self.digits = digits::zero();
                    self.sign = Sign::Positive;
                }
                Ordering::Greater => digits::sub_assign::<R>(&mut self.digits, &other.digits),
                Ordering::Less => {
                    let mut res = other.digits.clone();
                    digits::sub_assign::<R>(&mut res, &self.digits);
                    self.digits = res;
                    self.sign = other_sign;
                }
            }
        }
        self.normalize();
    }

    pub fn mul_with(&self, other: &Self, strategy: MulStrategy) -> Self {
        let res = match strategy {
            MulStrategy::Schoolbook => digits::mul_schoolbook::<R>(&self.digits, &other.digits),
            MulStrategy::Karatsuba { threshold } => {
                if self.digits.len().min(other.digits.len()) >= threshold {
                    trace!(
                        "karatsuba on {}x{} digits",
                        self.digits.len(),
                        other.digits.len()
                    );
                }
                digits::mul_karatsuba::<R>(&self.digits, &other.digits, threshold)
            }
        };
        Self::from_parts(Sign::sign_of_product(self.sign, other.sign), res)
    }

    /// Truncating division: the quotient rounds toward zero and the
    /// remainder takes the sign of the dividend.
    pub fn divmod(&self, other: &Self) -> Result<(Self, Self), NumError> {
        if other.is_zero() {
            return Err(NumError::DivideByZero);
        }
        Ok(self.divmod_nonzero(other))
    }

    pub(crate) fn divmod_nonzero(&self, other: &Self) -> (Self, Self) {
        let (q, r) = digits::divmod::<R>(&self.digits, &other.digits);
        (
            Self::from_parts(Sign::sign_of_product(self.sign, other.sign), q),
            Self::from_parts(self.sign, r),
        )
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumError> {
        Ok(self.divmod(other)?.0)
    }

    pub fn checked_rem(&self, other: &Self) -> Result<Self, NumError> {
        Ok(self.divmod(other)?.1)
    }

    pub fn pow(&self, exponent: u64) -> Self {
        crate::math::pow(self.clone(), exponent)
    }

    // Note: 0! = 1, 1! = 1
    pub fn factorial(n: u64) -> Self {
        let mut res = Self::one();
        for k in 2..=n {
            res *= &Self::from(k);
        }
        res
    }

    /// computes `self * BASE^k`
    pub fn shl_digits(&mut self, k: usize) {
        digits::shl(&mut self.digits, k);
    }

    /// computes `self / BASE^k`, rounding toward zero
    pub fn shr_digits(&mut self, k: usize) {
        digits::shr(&mut self.digits, k);
        self.normalize();
    }

    #[allow(
        clippy::as_conversions,
        clippy::cast_precision_loss,
        clippy::float_arithmetic
    )]
    pub fn to_f64(&self) -> f64 {
        let base = R::BASE as f64;
        let mut res = 0.0;
        for d in self.digits.iter().rev() {
            res = res * base + d.to_u64() as f64;
        }
        if self.is_neg() {
            -res
        } else {
            res
        }
    }

    pub fn try_as_i64(&self) -> Result<i64, NumError> {
        let magnitude = digits::to_u128::<R>(&self.digits).ok_or(NumError::ValueTooLarge)?;
        let signed = i128::try_from(magnitude).map_err(|_| NumError::ValueTooLarge)?;
        let signed = if self.is_neg() { -signed } else { signed };
        i64::try_from(signed).map_err(|_| NumError::ValueTooLarge)
    }
}

fn split_sign(s: &str) -> (Sign, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (Sign::Negative, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (Sign::Positive, rest)
    } else {
        (Sign::Positive, s)
    }
}

impl<R: Radix> FromStr for BigInt<R> {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, NumError> {
        let (sign, rest) = split_sign(s);
        let mut msf = Vec::with_capacity(rest.len());
        for ch in rest.chars() {
            match ch.to_digit(10) {
                Some(d) => msf.push(<Decimal as Radix>::Digit::from_u64(u64::from(d))),
                None => return Err(NumError::ExpectedADigit(ch)),
            }
        }
        if msf.is_empty() {
            return Err(NumError::MissingDigits);
        }
        Ok(Self::from_decimal_digits(sign, msf))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl<R: Radix> From<$t> for BigInt<R> {
            #[allow(clippy::as_conversions)]
            fn from(value: $t) -> Self {
                Self::from_parts(Sign::Positive, digits::from_u128::<R>(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl<R: Radix> From<$t> for BigInt<R> {
            #[allow(clippy::as_conversions)]
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                let magnitude = (value as i128).unsigned_abs();
                Self::from_parts(sign, digits::from_u128::<R>(magnitude))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl<R: Radix> Default for BigInt<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Radix> Zero for BigInt<R> {
    fn zero() -> Self {
        Self::from_parts(Sign::Positive, digits::zero())
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl<R: Radix> One for BigInt<R> {
    fn one() -> Self {
        Self::from(1_u8)
    }
}

impl<R: Radix> Ord for BigInt<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => self.abs_cmp(other),
            (Sign::Negative, Sign::Negative) => self.abs_cmp(other).reverse(),
        }
    }
}

impl<R: Radix> PartialOrd for BigInt<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> PartialEq for BigInt<R> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: Radix> Eq for BigInt<R> {}

impl<R: Radix> Hash for BigInt<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.digits.hash(state);
    }
}

impl<'a, R: Radix> AddAssign<&'a BigInt<R>> for BigInt<R> {
    fn add_assign(&mut self, other: &'a Self) {
        self.signed_add(other, false);
    }
}

impl<'a, R: Radix> SubAssign<&'a BigInt<R>> for BigInt<R> {
    fn sub_assign(&mut self, other: &'a Self) {
        self.signed_add(other, true);
    }
}

impl<'a, R: Radix> MulAssign<&'a BigInt<R>> for BigInt<R> {
    fn mul_assign(&mut self, other: &'a Self) {
        *self = self.mul_with(other, MulStrategy::default_for::<R>());
    }
}

impl<'a, R: Radix> DivAssign<&'a BigInt<R>> for BigInt<R> {
    fn div_assign(&mut self, other: &'a Self) {
        *self = match self.divmod(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        };
    }
}

impl<'a, R: Radix> RemAssign<&'a BigInt<R>> for BigInt<R> {
    fn rem_assign(&mut self, other: &'a Self) {
        *self = match self.divmod(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        };
    }
}

macro_rules! forward_binop {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl<R: Radix> $op_assign for BigInt<R> {
            fn $f_assign(&mut self, other: Self) {
                self.$f_assign(&other);
            }
        }

        impl<R: Radix> $op_assign<i64> for BigInt<R> {
            fn $f_assign(&mut self, other: i64) {
                self.$f_assign(&Self::from(other));
            }
        }

        impl<R: Radix> $op for BigInt<R> {
            type Output = Self;

            fn $f(mut self, other: Self) -> Self {
                self.$f_assign(&other);
                self
            }
        }

        impl<'a, R: Radix> $op<&'a BigInt<R>> for BigInt<R> {
            type Output = Self;

            fn $f(mut self, other: &'a Self) -> Self {
                self.$f_assign(other);
                self
            }
        }

        impl<R: Radix> $op<i64> for BigInt<R> {
            type Output = Self;

            fn $f(mut self, other: i64) -> Self {
                self.$f_assign(&Self::from(other));
                self
            }
        }

        impl<'a, 'b, R: Radix> $op<&'b BigInt<R>> for &'a BigInt<R> {
            type Output = BigInt<R>;

            fn $f(self, other: &'b BigInt<R>) -> BigInt<R> {
                let mut res = self.clone();
                res.$f_assign(other);
                res
            }
        }

        impl<'a, R: Radix> $op<BigInt<R>> for &'a BigInt<R> {
            type Output = BigInt<R>;

            fn $f(self, other: BigInt<R>) -> BigInt<R> {
                let mut res = self.clone();
                res.$f_assign(&other);
                res
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl<R: Radix> Neg for BigInt<R> {
    type Output = Self;

    fn neg(mut self) -> Self {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl<'a, R: Radix> Neg for &'a BigInt<R> {
    type Output = BigInt<R>;

    fn neg(self) -> BigInt<R> {
        -self.clone()
    }
}

impl<R: Radix> Sum for BigInt<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<R: Radix> Product for BigInt<R> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<R: Radix> Integer for BigInt<R> {
    fn is_negative(&self) -> bool {
        self.is_neg()
    }

    fn negate(self) -> Self {
        -self
    }

    fn checked_negate(self) -> Option<Self> {
        Some(-self)
    }

    fn to_f64(&self) -> f64 {
        Self::to_f64(self)
    }

    // Drops the same number of low digits from both sides so neither
    // conversion overflows.
    #[allow(clippy::as_conversions, clippy::float_arithmetic)]
    fn ratio_f64(num: &Self, den: &Self) -> f64 {
        let bits_per_digit = u64::BITS - (R::BASE - 1).leading_zeros();
        let keep = (64 / bits_per_digit) as usize + 2;
        let drop = den.digits.len().saturating_sub(keep);
        let mut num = num.clone();
        let mut den = den.clone();
        num.shr_digits(drop);
        den.shr_digits(drop);
        num.to_f64() / den.to_f64()
    }
}

/// Prints digits most significant first. Radixes above 10 wrap each digit
/// in parentheses.
impl<R: Radix> fmt::Display for BigInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_neg() {
            write!(f, "-")?;
        }
        for d in self.digits.iter().rev() {
            radix::write_digit::<R>(f, d.to_u64())?;
        }
        Ok(())
    }
}

impl<R: Radix> fmt::Debug for BigInt<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::{BigInt, DecBigInt, DenseBigInt, MulStrategy};
    use crate::error::NumError;
    use crate::num::radix::{Binary, Byte, Hex};
    use num_traits::Zero;

    #[test]
    fn test_construction() {
        assert_eq!(DecBigInt::default(), DecBigInt::from(0));
        assert_eq!("12345".parse::<DecBigInt>().unwrap(), DecBigInt::from(12345));
        assert_eq!("-987".parse::<DecBigInt>().unwrap(), DecBigInt::from(-987));
        assert_eq!("000123".parse::<DecBigInt>().unwrap(), DecBigInt::from(123));
        assert_eq!("-00456".parse::<DecBigInt>().unwrap(), DecBigInt::from(-456));
        assert_eq!("+77".parse::<DenseBigInt>().unwrap(), DenseBigInt::from(77));
        assert_eq!(DecBigInt::from(1_234_567).digits(), &[7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_i64_min() {
        let n = DecBigInt::from(i64::MIN);
        assert_eq!(n.to_string(), "-9223372036854775808");
        assert_eq!(n.try_as_i64(), Ok(i64::MIN));
        assert_eq!((n - 1).try_as_i64(), Err(NumError::ValueTooLarge));
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            "12a3".parse::<DecBigInt>(),
            Err(NumError::ExpectedADigit('a'))
        );
        assert_eq!(
            "1_000".parse::<DecBigInt>(),
            Err(NumError::ExpectedADigit('_'))
        );
        assert_eq!("".parse::<DecBigInt>(), Err(NumError::MissingDigits));
        assert_eq!("-".parse::<DecBigInt>(), Err(NumError::MissingDigits));
    }

    #[test]
    fn test_lenient_parse() {
        assert_eq!(DecBigInt::parse_lenient("1,000,000"), DecBigInt::from(1_000_000));
        assert_eq!(DecBigInt::parse_lenient("-12 34"), DecBigInt::from(-1234));
        assert_eq!(DecBigInt::parse_lenient("abc"), DecBigInt::from(0));
        assert!(!DecBigInt::parse_lenient("-0").is_neg());
    }

    #[test]
    fn test_display() {
        let s = format!("{} {}", "000123".parse::<DecBigInt>().unwrap(), DecBigInt::from(-456));
        assert_eq!(s, "123 -456");
        assert_eq!(BigInt::<Hex>::from(255).to_string(), "(15)(15)");
        assert_eq!(BigInt::<Binary>::from(-5).to_string(), "-101");
        assert_eq!(DenseBigInt::from(7).to_string(), "(7)");
    }

    #[test]
    fn test_comparison() {
        let a = DecBigInt::from(123);
        let b = DecBigInt::from(123);
        let c = DecBigInt::from(456);
        let d = DecBigInt::from(-123);
        assert!(a == b);
        assert!(a < c);
        assert!(c > a);
        assert!(d < a);
        assert!(d < c);
        assert!(a == -&d);
        assert!(-&a == d);
        assert!(DecBigInt::from(-1000) < DecBigInt::from(-999));
    }

    #[test]
    fn test_addition() {
        let mut a = DecBigInt::from(123);
        a += DecBigInt::from(456);
        assert_eq!(a, DecBigInt::from(579));
        let mut b = DecBigInt::from(-100);
        b += 50;
        assert_eq!(b, DecBigInt::from(-50));
        let mut c = DecBigInt::from(0);
        c += DecBigInt::from(0);
        assert_eq!(c, DecBigInt::from(0));
    }

    #[test]
    fn test_zero_is_never_negative() {
        let a = DecBigInt::from(-5) + DecBigInt::from(5);
        assert!(!a.is_neg());
        let b = DecBigInt::from(-5) * DecBigInt::from(0);
        assert!(!b.is_neg());
        let c = DecBigInt::from(-3) / DecBigInt::from(7);
        assert!(c.is_zero() && !c.is_neg());
        let d = DecBigInt::from(-14) % DecBigInt::from(7);
        assert!(d.is_zero() && !d.is_neg());
        assert!(!(-DecBigInt::from(0)).is_neg());
        let mut e = DecBigInt::from(-9);
        e.shr_digits(1);
        assert!(!e.is_neg());
    }

    #[test]
    fn test_truncating_division() {
        let check = |n: i64, m: i64| {
            let (q, r) = DecBigInt::from(n).divmod(&DecBigInt::from(m)).unwrap();
            assert_eq!(q, DecBigInt::from(n / m), "{} / {}", n, m);
            assert_eq!(r, DecBigInt::from(n % m), "{} % {}", n, m);
        };
        check(7, 2);
        check(-7, 2);
        check(7, -2);
        check(-7, -2);
        check(126_668_449_623, -789);
        check(0, 5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            DecBigInt::from(1).divmod(&DecBigInt::from(0)),
            Err(NumError::DivideByZero)
        );
        assert_eq!(
            DenseBigInt::from(1).checked_rem(&DenseBigInt::from(0)),
            Err(NumError::DivideByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_divide_by_zero_operator() {
        let _ = DecBigInt::from(1) / DecBigInt::from(0);
    }

    #[test]
    fn test_powers_of_two_length() {
        let mut g = DecBigInt::from(2);
        for _ in 0..100 {
            g *= 2;
        }
        assert_eq!(g.digits().len(), 31);
    }

    #[test]
    fn test_strategies_agree() {
        let a = DenseBigInt::factorial(300);
        let b = -DenseBigInt::factorial(250) + 12345;
        let school = a.mul_with(&b, MulStrategy::Schoolbook);
        let kara = a.mul_with(&b, MulStrategy::Karatsuba { threshold: 4 });
        assert_eq!(school.digits(), kara.digits());
        assert!(kara.is_neg());
    }

    #[test]
    fn test_base_conversion() {
        for n in [1_234_285_u64, 8_234_692_643, 6_529_385_728_935] {
            let dec = DecBigInt::from(n);
            let bin = BigInt::<Binary>::from_radix(&dec);
            let hex: BigInt<Hex> = dec.convert();
            assert_eq!(DecBigInt::from_radix(&bin), dec);
            assert_eq!(DecBigInt::from_radix(&hex), dec);
            assert_eq!(bin, BigInt::<Binary>::from(n));
            assert_eq!(hex, BigInt::<Hex>::from(n));

            let dense = DenseBigInt::from(n);
            let bin_from_dense = BigInt::<Binary>::from_radix(&dense);
            assert_eq!(bin, bin_from_dense);
            assert_eq!(DenseBigInt::from_radix(&bin_from_dense), dense);
        }
        let neg = DecBigInt::from(-300);
        assert_eq!(BigInt::<Byte>::from_radix(&neg).digits(), &[44, 1]);
        assert!(BigInt::<Byte>::from_radix(&neg).is_neg());
    }

    #[test]
    fn test_full_width_u64_digits() {
        crate::radix!(Huge, u64, u64::MAX);
        crate::radix!(Big63, u64, 1 << 63);

        fn check<R: crate::Radix>() {
            let a = BigInt::<R>::factorial(200);
            let b = BigInt::<R>::factorial(150) - 1;
            let dense_a = DenseBigInt::factorial(200);
            let dense_b = DenseBigInt::factorial(150) - 1;
            assert_eq!(DenseBigInt::from_radix(&a), dense_a);

            let school = a.mul_with(&b, MulStrategy::Schoolbook);
            let kara = a.mul_with(&b, MulStrategy::Karatsuba { threshold: 2 });
            assert_eq!(school, kara);
            assert_eq!(DenseBigInt::from_radix(&school), &dense_a * &dense_b);
            assert_eq!(DenseBigInt::from_radix(&(&a * &a)), &dense_a * &dense_a);

            let (q, r) = a.divmod(&b).unwrap();
            let (dense_q, dense_r) = dense_a.divmod(&dense_b).unwrap();
            assert_eq!(DenseBigInt::from_radix(&q), dense_q);
            assert_eq!(DenseBigInt::from_radix(&r), dense_r);
            assert_eq!(BigInt::<R>::from_radix(&dense_r), r);
        }

        check::<Huge>();
        check::<Big63>();
    }

    #[test]
    fn test_small_and_wide_digit_types_agree() {
        crate::radix!(Narrow, u8, 128);
        crate::radix!(Wide, u64, 128);
        let build = || {
            let mut a = BigInt::<Narrow>::from(127);
            for _ in 0..128 {
                a *= 128;
                a += 127;
            }
            a.clone() * a
        };
        let c = build();
        let wide = BigInt::<Wide>::from_radix(&c);
        assert_eq!(c.digits().len(), wide.digits().len());
        for (x, y) in c.digits().iter().zip(wide.digits()) {
            assert_eq!(u64::from(*x), *y);
        }
    }

    #[test]
    fn test_shifts() {
        let mut n = DecBigInt::from(-42);
        n.shl_digits(3);
        assert_eq!(n, DecBigInt::from(-42000));
        n.shr_digits(4);
        assert_eq!(n, DecBigInt::from(-4));
    }

    #[test]
    fn test_factorial_and_pow() {
        assert_eq!(DecBigInt::factorial(0), DecBigInt::from(1));
        assert_eq!(
            DecBigInt::factorial(25).to_string(),
            "15511210043330985984000000"
        );
        assert_eq!(DecBigInt::from(-3).pow(3), DecBigInt::from(-27));
        assert_eq!(DenseBigInt::from(7).pow(0), DenseBigInt::from(1));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(DecBigInt::from(-1234).to_f64(), -1234.0);
        assert_eq!(DenseBigInt::from(1_u64 << 40).to_f64(), 1_099_511_627_776.0);
    }

    #[test]
    fn test_sum_and_product() {
        let total: DecBigInt = (1..=10).map(DecBigInt::from).sum();
        assert_eq!(total, DecBigInt::from(55));
        let product: DecBigInt = (1..=10).map(DecBigInt::from).product();
        assert_eq!(product, DecBigInt::factorial(10));
    }

    #[test]
    fn test_zero_trait() {
        assert!(Zero::is_zero(&DenseBigInt::zero()));
        assert_eq!(DenseBigInt::zero().signum(), 0);
        assert_eq!(DenseBigInt::from(-3).signum(), -1);
    }
}
