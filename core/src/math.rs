//! Generic integer helpers shared by machine integers and `BigInt`.

use crate::num::Integer;
use num_traits::One;
use std::ops::{Mul, MulAssign, Rem};

/// Binary exponentiation for any type with a multiplicative identity.
pub fn pow<T>(mut base: T, mut exponent: u64) -> T
where
    T: Clone + One + for<'a> MulAssign<&'a T>,
{
    let mut result = T::one();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= &base;
        }
        exponent >>= 1;
        if exponent > 0 {
            let square = base.clone();
            base *= &square;
        }
    }
    result
}

/// computes `base^exponent mod modulus`
pub fn pow_mod<T>(base: T, mut exponent: u64, modulus: &T) -> T
where
    T: Clone + One + Mul<Output = T> + Rem<Output = T>,
{
    let mut result = T::one() % modulus.clone();
    let mut base = base % modulus.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = (result * base.clone()) % modulus.clone();
        }
        exponent >>= 1;
        base = (base.clone() * base) % modulus.clone();
    }
    result
}

/// Greatest common divisor, always non-negative. `gcd(0, 0)` is zero.
pub fn gcd<T: Integer>(a: T, b: T) -> T {
    let mut a = a.into_abs();
    let mut b = b.into_abs();
    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while !b.is_zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, always non-negative. `lcm(0, x)` is zero.
pub fn lcm<T: Integer>(a: T, b: T) -> T {
    if a.is_zero() || b.is_zero() {
        return T::zero();
    }
    let g = gcd(a.clone(), b.clone());
    (a.into_abs() / g) * b.into_abs()
}
