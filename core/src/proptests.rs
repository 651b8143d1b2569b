//! Property-based tests for the integer and fraction arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, Binary, DecBigInt, DenseBigInt, Fraction, Hex, MulStrategy};

    fn machine_int() -> impl Strategy<Value = i64> {
        -3_000_000_000i64..3_000_000_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-3_000_000i64..=-1i64), (1i64..=3_000_000i64)]
    }

    // Wide values built from a few random limbs.
    fn big_dense() -> impl Strategy<Value = DenseBigInt> {
        (prop::collection::vec(any::<u64>(), 1..12), any::<bool>()).prop_map(|(limbs, neg)| {
            let shift = DenseBigInt::from(u64::MAX) + 1;
            let mut res = DenseBigInt::from(0);
            for limb in limbs {
                res = res * &shift + DenseBigInt::from(limb);
            }
            if neg {
                -res
            } else {
                res
            }
        })
    }

    proptest! {
        #[test]
        fn matches_machine_add_sub_mul(n in machine_int(), m in machine_int()) {
            prop_assert_eq!(DecBigInt::from(n) + DecBigInt::from(m), DecBigInt::from(n + m));
            prop_assert_eq!(DecBigInt::from(n) - DecBigInt::from(m), DecBigInt::from(n - m));
            prop_assert_eq!(DecBigInt::from(n) * DecBigInt::from(m), DecBigInt::from(n * m));
            prop_assert_eq!(DenseBigInt::from(n) * DenseBigInt::from(m), DenseBigInt::from(n * m));
        }

        #[test]
        fn matches_machine_div_rem(n in machine_int(), m in non_zero_int()) {
            prop_assert_eq!(DecBigInt::from(n) / DecBigInt::from(m), DecBigInt::from(n / m));
            prop_assert_eq!(DecBigInt::from(n) % DecBigInt::from(m), DecBigInt::from(n % m));
            prop_assert_eq!(DenseBigInt::from(n) / DenseBigInt::from(m), DenseBigInt::from(n / m));
            prop_assert_eq!(DenseBigInt::from(n) % DenseBigInt::from(m), DenseBigInt::from(n % m));
        }

        #[test]
        fn ordering_matches_machine(n in machine_int(), m in machine_int()) {
            prop_assert_eq!(DecBigInt::from(n).cmp(&DecBigInt::from(m)), n.cmp(&m));
            prop_assert_eq!(DenseBigInt::from(n).cmp(&DenseBigInt::from(m)), n.cmp(&m));
        }

        #[test]
        fn mul_commutative_associative(a in big_dense(), b in big_dense(), c in big_dense()) {
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn schoolbook_matches_karatsuba(a in big_dense(), b in big_dense(), threshold in 2usize..6) {
            let school = a.mul_with(&b, MulStrategy::Schoolbook);
            let kara = a.mul_with(&b, MulStrategy::Karatsuba { threshold });
            prop_assert_eq!(school.digits(), kara.digits());
            prop_assert_eq!(school.is_neg(), kara.is_neg());
        }

        #[test]
        fn divmod_reconstructs(a in big_dense(), b in big_dense()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.divmod(&b).unwrap();
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_neg() == a.is_neg());
            prop_assert_eq!(q * &b + r, a);
        }

        #[test]
        fn base_round_trip(a in big_dense()) {
            let dec = DecBigInt::from_radix(&a);
            let hex = BigInt::<Hex>::from_radix(&dec);
            let bin = BigInt::<Binary>::from_radix(&hex);
            let back = DenseBigInt::from_radix(&bin);
            prop_assert_eq!(back.digits(), a.digits());
            prop_assert_eq!(DenseBigInt::from_radix(&dec), a);
        }

        #[test]
        fn decimal_string_round_trip(a in big_dense()) {
            let text = DecBigInt::from_radix(&a).to_string();
            prop_assert_eq!(text.parse::<DenseBigInt>().unwrap(), a);
        }

        #[test]
        fn zero_results_are_not_negative(n in machine_int()) {
            let a = DecBigInt::from(n);
            prop_assert!(!(&a - &a).is_neg());
            prop_assert!(!(&a * DecBigInt::from(0)).is_neg());
            prop_assert!(!(-a.clone() + &a).is_neg());
        }

        #[test]
        fn fraction_field_ops(a in non_zero_int(), b in non_zero_int(), c in non_zero_int(), d in non_zero_int()) {
            let x = Fraction::new(DenseBigInt::from(a), DenseBigInt::from(b));
            let y = Fraction::new(DenseBigInt::from(c), DenseBigInt::from(d));
            prop_assert_eq!(&(&x + &y) - &y, x.clone());
            prop_assert_eq!(&(&x * &y) / &y, x.clone());
            prop_assert_eq!(x < y, (a as i128) * (d as i128) * i128::from(b.signum() * d.signum())
                < (c as i128) * (b as i128) * i128::from(b.signum() * d.signum()));
        }
    }
}
