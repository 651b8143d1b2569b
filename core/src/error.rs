use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumError {
    DivideByZero,
    ZeroDenominator,
    ExpectedADigit(char),
    MissingDigits,
    ValueTooLarge,
}

impl fmt::Display for NumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "division by zero"),
            Self::ZeroDenominator => write!(f, "denominator must not be zero"),
            Self::ExpectedADigit(ch) => write!(f, "expected a digit, found '{}'", ch),
            Self::MissingDigits => write!(f, "expected at least one digit"),
            Self::ValueTooLarge => write!(f, "value too large"),
        }
    }
}

impl error::Error for NumError {}
