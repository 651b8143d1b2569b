//! Magnitude arithmetic on little-endian digit sequences.
//!
//! Every function here ignores signs. Inputs are expected in normalized form
//! (no most-significant zero digits, zero is `[0]`) and outputs are returned
//! in normalized form.

use super::radix::{Digit, Radix};
use std::cmp::Ordering;

fn base<R: Radix>() -> u128 {
    u128::from(R::BASE)
}

fn digit<R: Radix>(value: u128) -> R::Digit {
    // callers only pass values below BASE
    #[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
    R::Digit::from_u64(value as u64)
}

fn wide<D: Digit>(d: D) -> u128 {
    u128::from(d.to_u64())
}

pub(crate) fn zero<D: Digit>() -> Vec<D> {
    vec![D::default()]
}

pub(crate) fn is_zero<D: Digit>(v: &[D]) -> bool {
    v.iter().all(|d| d.to_u64() == 0)
}

pub(crate) fn trim<D: Digit>(v: &mut Vec<D>) {
    while v.len() > 1 && v.last().map_or(false, |d| d.to_u64() == 0) {
        v.pop();
    }
    if v.is_empty() {
        v.push(D::default());
    }
}

/// Splits `value` into little-endian digits of radix `R`.
pub(crate) fn from_u128<R: Radix>(mut value: u128) -> Vec<R::Digit> {
    if value == 0 {
        return zero();
    }
    let mut res = vec![];
    while value > 0 {
        res.push(digit::<R>(value % base::<R>()));
        value /= base::<R>();
    }
    res
}

/// Returns the value if it fits in a `u128`.
pub(crate) fn to_u128<R: Radix>(v: &[R::Digit]) -> Option<u128> {
    let mut res: u128 = 0;
    for &d in v.iter().rev() {
        res = res.checked_mul(base::<R>())?.checked_add(wide(d))?;
    }
    Some(res)
}

/// Compares two magnitudes: longer wins, then most significant digit first.
pub(crate) fn cmp<D: Digit>(a: &[D], b: &[D]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// computes `a += b`
pub(crate) fn add_assign<R: Radix>(a: &mut Vec<R::Digit>, b: &[R::Digit]) {
    add_assign_shifted::<R>(a, b, 0);
}

/// computes `a += b * BASE^shift`
pub(crate) fn add_assign_shifted<R: Radix>(a: &mut Vec<R::Digit>, b: &[R::Digit], shift: usize) {
    if is_zero(b) {
        return;
    }
    if a.len() < b.len() + shift {
        a.resize(b.len() + shift, R::Digit::default());
    }
    let mut carry = 0;
    for (i, &d) in b.iter().enumerate() {
        let sum = wide(a[i + shift]) + wide(d) + carry;
        a[i + shift] = digit::<R>(sum % base::<R>());
        carry = sum / base::<R>();
    }
    let mut i = b.len() + shift;
    while carry != 0 {
        if i == a.len() {
            a.push(R::Digit::default());
        }
        let sum = wide(a[i]) + carry;
        a[i] = digit::<R>(sum % base::<R>());
        carry = sum / base::<R>();
        i += 1;
    }
    trim(a);
}

/// computes `a -= b`, requires `a >= b`
pub(crate) fn sub_assign<R: Radix>(a: &mut Vec<R::Digit>, b: &[R::Digit]) {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude would be negative");
    let mut borrow = 0;
    let mut i = 0;
    while i < b.len() || borrow != 0 {
        let sub = borrow + b.get(i).map_or(0, |&d| wide(d));
        let cur = wide(a[i]);
        if cur >= sub {
            a[i] = digit::<R>(cur - sub);
            borrow = 0;
        } else {
            a[i] = digit::<R>(cur + base::<R>() - sub);
            borrow = 1;
        }
        i += 1;
    }
    trim(a);
}

/// computes `a * d` for a single digit value `d < BASE`
pub(crate) fn mul_digit<R: Radix>(a: &[R::Digit], d: u64) -> Vec<R::Digit> {
    if d == 0 || is_zero(a) {
        return zero();
    }
    let mut res = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &x in a {
        let cur = wide(x) * u128::from(d) + carry;
        res.push(digit::<R>(cur % base::<R>()));
        carry = cur / base::<R>();
    }
    while carry != 0 {
        res.push(digit::<R>(carry % base::<R>()));
        carry /= base::<R>();
    }
    res
}

/// Schoolbook multiplication: accumulate digit products row by row into a
/// wide buffer, then run a single carry pass to produce digits.
pub(crate) fn mul_schoolbook<R: Radix>(a: &[R::Digit], b: &[R::Digit]) -> Vec<R::Digit> {
    if is_zero(a) || is_zero(b) {
        return zero();
    }
    let mut acc = vec![0_u128; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let x = wide(x);
        if x == 0 {
            continue;
        }
        // each cell stays below BASE, so cell + x * y + carry < BASE^2
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let cur = acc[i + j] + x * wide(y) + carry;
            acc[i + j] = cur % base::<R>();
            carry = cur / base::<R>();
        }
        acc[i + b.len()] = carry;
    }
    let mut res = Vec::with_capacity(acc.len());
    let mut carry = 0;
    for cell in acc {
        let cur = cell + carry;
        res.push(digit::<R>(cur % base::<R>()));
        carry = cur / base::<R>();
    }
    debug_assert_eq!(carry, 0);
    trim(&mut res);
    res
}

fn split<D: Digit>(v: &[D], at: usize) -> (Vec<D>, Vec<D>) {
    if at >= v.len() {
        return (v.to_vec(), zero());
    }
    let mut low = v[..at].to_vec();
    trim(&mut low);
    (low, v[at..].to_vec())
}

/// Karatsuba multiplication, falling back to schoolbook once the shorter
/// operand has fewer than `threshold` digits.
pub(crate) fn mul_karatsuba<R: Radix>(
    a: &[R::Digit],
    b: &[R::Digit],
    threshold: usize,
) -> Vec<R::Digit> {
    let shorter = a.len().min(b.len());
    if shorter < threshold.max(2) {
        return mul_schoolbook::<R>(a, b);
    }
    let shift = shorter / 2;
    let (a0, a1) = split(a, shift);
    let (b0, b1) = split(b, shift);

    let z0 = mul_karatsuba::<R>(&a0, &b0, threshold);
    let z2 = mul_karatsuba::<R>(&a1, &b1, threshold);

    let mut sa = a0;
    add_assign::<R>(&mut sa, &a1);
    let mut sb = b0;
    add_assign::<R>(&mut sb, &b1);
    // (a0 + a1)(b0 + b1) - z0 - z2 == a0 * b1 + a1 * b0
    let mut z1 = mul_karatsuba::<R>(&sa, &sb, threshold);
    sub_assign::<R>(&mut z1, &z0);
    sub_assign::<R>(&mut z1, &z2);

    let mut res = z0;
    add_assign_shifted::<R>(&mut res, &z1, shift);
    add_assign_shifted::<R>(&mut res, &z2, 2 * shift);
    res
}

/// Long division of magnitudes. `b` must be non-zero.
///
/// Dividend digits are brought down most significant first; each quotient
/// digit is the largest `x` in `[0, BASE)` with `x * b <= remainder`, found
/// by binary search.
pub(crate) fn divmod<R: Radix>(
    a: &[R::Digit],
    b: &[R::Digit],
) -> (Vec<R::Digit>, Vec<R::Digit>) {
    debug_assert!(!is_zero(b));
    if cmp(a, b) == Ordering::Less {
        return (zero(), a.to_vec());
    }
    if b.len() == 1 {
        return divmod_digit::<R>(a, b[0].to_u64());
    }
    let mut quotient = vec![R::Digit::default(); a.len()];
    let mut rem: Vec<R::Digit> = zero();
    for i in (0..a.len()).rev() {
        rem.insert(0, a[i]);
        trim(&mut rem);
        if cmp(&rem, b) == Ordering::Less {
            continue;
        }
        // rem < b * BASE here, so the answer lies in [1, BASE)
        let mut lo = 1;
        let mut hi = R::BASE - 1;
        let mut x = 1;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if cmp(&mul_digit::<R>(b, mid), &rem) == Ordering::Greater {
                hi = mid - 1;
            } else {
                x = mid;
                lo = mid + 1;
            }
        }
        sub_assign::<R>(&mut rem, &mul_digit::<R>(b, x));
        quotient[i] = R::Digit::from_u64(x);
    }
    trim(&mut quotient);
    (quotient, rem)
}

fn divmod_digit<R: Radix>(a: &[R::Digit], d: u64) -> (Vec<R::Digit>, Vec<R::Digit>) {
    let d = u128::from(d);
    let mut quotient = vec![R::Digit::default(); a.len()];
    let mut rem = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * base::<R>() + wide(a[i]);
        quotient[i] = digit::<R>(cur / d);
        rem = cur % d;
    }
    trim(&mut quotient);
    (quotient, from_u128::<R>(rem))
}

/// computes `v * BASE^k`
pub(crate) fn shl<D: Digit>(v: &mut Vec<D>, k: usize) {
    if is_zero(v) || k == 0 {
        return;
    }
    v.splice(0..0, std::iter::repeat(D::default()).take(k));
}

/// computes `v / BASE^k`, truncating
pub(crate) fn shr<D: Digit>(v: &mut Vec<D>, k: usize) {
    if k >= v.len() {
        *v = zero();
        return;
    }
    v.drain(..k);
    trim(v);
}
