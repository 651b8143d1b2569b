use super::bigint::BigInt;
use super::integer::Integer;
use super::radix::{self, Digit, Radix};
use crate::error::NumError;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Exact rational number `num / den`.
///
/// The denominator is always positive; a negative value carries its sign on
/// the numerator. Arithmetic does not reduce the result, call
/// [`Fraction::normalize`] or [`Fraction::reduce`] when a reduced form is
/// needed. Comparison and equality are by value, so `1/2 == 2/4`.
#[derive(Clone)]
pub struct Fraction<I: Integer> {
    num: I,
    den: I,
}

impl<I: Integer> Fraction<I> {
    /// # Panics
    ///
    /// Panics if `den` is zero, or if moving the sign off a negative `den`
    /// overflows `I` (for example a denominator of `i64::MIN`).
    pub fn new(num: I, den: I) -> Self {
        match Self::try_new(num, den) {
            Ok(res) => res,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(num: I, den: I) -> Result<Self, NumError> {
        if den.is_zero() {
            return Err(NumError::ZeroDenominator);
        }
        Self::from_parts(num, den)
    }

    // den must be non-zero
    fn from_parts(num: I, den: I) -> Result<Self, NumError> {
        if den.is_negative() {
            Ok(Self {
                num: num.checked_negate().ok_or(NumError::ValueTooLarge)?,
                den: den.checked_negate().ok_or(NumError::ValueTooLarge)?,
            })
        } else {
            Ok(Self { num, den })
        }
    }

    pub fn numerator(&self) -> &I {
        &self.num
    }

    pub fn denominator(&self) -> &I {
        &self.den
    }

    pub fn into_parts(self) -> (I, I) {
        (self.num, self.den)
    }

    /// Divides numerator and denominator by `gcd(num, den)`.
    pub fn normalize(&mut self, gcd: impl FnOnce(&I, &I) -> I) {
        let g = gcd(&self.num, &self.den);
        if g.is_zero() {
            return;
        }
        // a positive divisor keeps den positive
        let g = g.into_abs();
        let num = self.num.clone() / g.clone();
        let den = self.den.clone() / g;
        *self = Self { num, den };
    }

    /// Returns the fraction in lowest terms.
    #[must_use]
    pub fn reduce(mut self) -> Self {
        self.normalize(|a, b| crate::math::gcd(a.clone(), b.clone()));
        self
    }

    pub fn recip(&self) -> Result<Self, NumError> {
        Self::try_new(self.den.clone(), self.num.clone())
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumError> {
        if other.num.is_zero() {
            return Err(NumError::DivideByZero);
        }
        Self::from_parts(
            self.num.clone() * other.den.clone(),
            self.den.clone() * other.num.clone(),
        )
    }

    pub fn estimate(&self) -> f64 {
        I::ratio_f64(&self.num, &self.den)
    }

    fn add_internal(&self, other: &Self, subtract: bool) -> Self {
        // a/b + c/d = (ad + cb) / bd
        let ad = self.num.clone() * other.den.clone();
        let cb = other.num.clone() * self.den.clone();
        let num = if subtract { ad - cb } else { ad + cb };
        Self {
            num,
            den: self.den.clone() * other.den.clone(),
        }
    }

    fn mul_internal(&self, other: &Self) -> Self {
        Self {
            num: self.num.clone() * other.num.clone(),
            den: self.den.clone() * other.den.clone(),
        }
    }
}

impl<I: Integer> Default for Fraction<I> {
    fn default() -> Self {
        Self {
            num: I::zero(),
            den: I::one(),
        }
    }
}

impl<I: Integer> From<I> for Fraction<I> {
    fn from(num: I) -> Self {
        Self { num, den: I::one() }
    }
}

impl<I: Integer> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // both denominators are positive
        let lhs = self.num.clone() * other.den.clone();
        let rhs = other.num.clone() * self.den.clone();
        lhs.cmp(&rhs)
    }
}

impl<I: Integer> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: Integer> PartialEq for Fraction<I> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<I: Integer> Eq for Fraction<I> {}

impl<'a, I: Integer> AddAssign<&'a Fraction<I>> for Fraction<I> {
    fn add_assign(&mut self, other: &'a Self) {
        *self = self.add_internal(other, false);
    }
}

impl<'a, I: Integer> SubAssign<&'a Fraction<I>> for Fraction<I> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self = self.add_internal(other, true);
    }
}

impl<'a, I: Integer> MulAssign<&'a Fraction<I>> for Fraction<I> {
    fn mul_assign(&mut self, other: &'a Self) {
        *self = self.mul_internal(other);
    }
}

impl<'a, I: Integer> DivAssign<&'a Fraction<I>> for Fraction<I> {
    fn div_assign(&mut self, other: &'a Self) {
        *self = match self.checked_div(other) {
            Ok(res) => res,
            Err(e) => panic!("{}", e),
        };
    }
}

macro_rules! forward_binop {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident) => {
        impl<I: Integer> $op_assign for Fraction<I> {
            fn $f_assign(&mut self, other: Self) {
                self.$f_assign(&other);
            }
        }

        impl<I: Integer> $op for Fraction<I> {
            type Output = Self;

            fn $f(mut self, other: Self) -> Self {
                self.$f_assign(&other);
                self
            }
        }

        impl<'a, I: Integer> $op<&'a Fraction<I>> for Fraction<I> {
            type Output = Self;

            fn $f(mut self, other: &'a Self) -> Self {
                self.$f_assign(other);
                self
            }
        }

        impl<'a, 'b, I: Integer> $op<&'b Fraction<I>> for &'a Fraction<I> {
            type Output = Fraction<I>;

            fn $f(self, other: &'b Fraction<I>) -> Fraction<I> {
                let mut res = self.clone();
                res.$f_assign(other);
                res
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);

impl<I: Integer + Neg<Output = I>> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<I: Integer> fmt::Display for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.num, self.den)
    }
}

impl<I: Integer> fmt::Debug for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A fraction's value written out in radix `R` to a fixed number of
/// fractional digits, truncated toward zero.
///
/// `mantissa` holds the integer part followed by `fraction_len` fractional
/// digits, so the radix point sits `fraction_len` digits from the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion<R: Radix> {
    mantissa: BigInt<R>,
    integer_len: usize,
    fraction_len: usize,
}

impl<R: Radix> Expansion<R> {
    pub fn mantissa(&self) -> &BigInt<R> {
        &self.mantissa
    }

    /// Number of digits in the integer part; zero when the integer part is 0.
    pub fn integer_len(&self) -> usize {
        self.integer_len
    }

    pub fn fraction_len(&self) -> usize {
        self.fraction_len
    }

    /// Mantissa and integer part length.
    pub fn into_parts(self) -> (BigInt<R>, usize) {
        (self.mantissa, self.integer_len)
    }

    /// Mantissa digits, most significant first.
    pub fn digits_msf(&self) -> Vec<R::Digit> {
        self.mantissa.digits().iter().rev().copied().collect()
    }

    fn digit_at(&self, idx: usize) -> u64 {
        self.mantissa.digits().get(idx).map_or(0, |d| d.to_u64())
    }
}

impl<R: Radix> fmt::Display for Expansion<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa.is_neg() {
            write!(f, "-")?;
        }
        let len = self.mantissa.digits().len();
        if len <= self.fraction_len {
            radix::write_digit::<R>(f, 0)?;
        } else {
            for idx in (self.fraction_len..len).rev() {
                radix::write_digit::<R>(f, self.digit_at(idx))?;
            }
        }
        if self.fraction_len > 0 {
            write!(f, ".")?;
            for idx in (0..self.fraction_len).rev() {
                radix::write_digit::<R>(f, self.digit_at(idx))?;
            }
        }
        Ok(())
    }
}

impl<R: Radix> Fraction<BigInt<R>> {
    /// Writes the value out in radix `S` with `digits` fractional digits.
    ///
    /// The integer part is converted directly; each fractional digit is the
    /// quotient of the running remainder scaled by `S::BASE`, divided by the
    /// denominator.
    pub fn expansion<S: Radix>(&self, digits: usize) -> Expansion<S> {
        debug!(
            "expanding {}-digit / {}-digit fraction to {} base-{} digits",
            self.num.digits().len(),
            self.den.digits().len(),
            digits,
            S::BASE
        );
        let num = self.num.abs();
        let den = self.den.abs();
        let (int_part, mut rem) = num.divmod_nonzero(&den);

        let mut mantissa = BigInt::<S>::from_radix(&int_part);
        let integer_len = if mantissa.is_zero() {
            0
        } else {
            mantissa.digits().len()
        };

        let scale = BigInt::<R>::from(S::BASE);
        for _ in 0..digits {
            rem *= &scale;
            let (digit, next) = rem.divmod_nonzero(&den);
            mantissa.shl_digits(1);
            mantissa += &BigInt::<S>::from_radix(&digit);
            rem = next;
        }
        if self.num.is_neg() {
            mantissa = -mantissa;
        }
        debug!("expansion finished with {} digits", mantissa.digits().len());
        Expansion {
            mantissa,
            integer_len,
            fraction_len: digits,
        }
    }
}
