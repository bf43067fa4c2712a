use float_radix::{f32_to_key, f64_to_key, key_to_f64, radix_sort};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
        | prop::num::f64::INFINITE
}

proptest! {
    #[test]
    fn prop_sorted_and_permutation(data in prop::collection::vec(finite_f64(), 0..600)) {
        let mut actual = data.clone();
        radix_sort(&mut actual).unwrap();

        let mut expected = data;
        expected.sort_unstable_by(f64::total_cmp);

        prop_assert!(actual.is_sorted());
        let actual_bits = actual.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        let expected_bits = expected.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(actual_bits, expected_bits);
    }

    #[test]
    fn prop_idempotent(data in prop::collection::vec(finite_f64(), 0..300)) {
        let mut once = data;
        radix_sort(&mut once).unwrap();
        let mut twice = once.clone();
        radix_sort(&mut twice).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_f64_key_preserves_order(a in finite_f64(), b in finite_f64()) {
        if a < b {
            prop_assert!(f64_to_key(a) < f64_to_key(b));
        } else if a > b {
            prop_assert!(f64_to_key(a) > f64_to_key(b));
        } else if a.to_bits() == b.to_bits() {
            prop_assert_eq!(f64_to_key(a), f64_to_key(b));
        }
        prop_assert_eq!(key_to_f64(f64_to_key(a)).to_bits(), a.to_bits());
    }

    #[test]
    fn prop_f32_key_preserves_order(a in prop::num::f32::NORMAL, b in prop::num::f32::NORMAL) {
        prop_assert_eq!(a.partial_cmp(&b), Some(f32_to_key(a).cmp(&f32_to_key(b))));
    }

    #[test]
    fn prop_f32_sorted(data in prop::collection::vec(prop::num::f32::NORMAL, 0..400)) {
        let mut actual = data;
        radix_sort(&mut actual).unwrap();
        prop_assert!(actual.is_sorted());
    }
}
