//! Property-based tests for tessera-constrained.

use proptest::prelude::*;
use tessera_constrained::prelude::*;

// ============================================================================
// CONSTRUCTION: a valid value is stored unchanged
// ============================================================================

proptest! {
    #[test]
    fn valid_value_is_stored_unchanged(x in 0_i64..=1000) {
        let v = make_bounded(x, 0, 1000);
        prop_assert_eq!(*v.get(), x);

        let c = make_clamped(x, 0, 1000);
        prop_assert_eq!(c.into_inner(), x);
    }

    #[test]
    fn rejecting_accepts_iff_satisfied(x in any::<i32>()) {
        type Small = ConstrainedValue<i32, Less<Const<42>>, RejectingVerifier>;
        prop_assert_eq!(Small::try_new(x).is_ok(), x < 42);
    }
}

// ============================================================================
// CLAMP LAW: clamp(x) is x inside [lo, hi], else the nearest bound
// ============================================================================

proptest! {
    #[test]
    fn clamp_law(lo in -1000_i32..1000, width in 0_i32..1000, x in any::<i32>()) {
        let hi = lo + width;
        let v = make_clamped(x, lo, hi);
        let expected = if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        };
        prop_assert_eq!(*v, expected);
    }

    #[test]
    fn clamp_is_idempotent(x in any::<i16>()) {
        type Byte = ClampedValue<i16, Const<0>, Const<255>>;
        let once = Byte::new(x).into_inner();
        let twice = Byte::new(once).into_inner();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clamped_assign_stays_in_range(start in 0_u8..=100, next in any::<u8>()) {
        let mut v = make_clamped(start, 10, 90);
        v.assign(next);
        prop_assert!((10..=90).contains(v.get()));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_holds_iff_both_hold(x in any::<i32>()) {
        let a = greater(-10);
        let b = less(10);
        prop_assert_eq!(a.and(b).is_satisfied(&x), a.is_satisfied(&x) && b.is_satisfied(&x));
    }

    #[test]
    fn not_not_is_identity(x in any::<i32>()) {
        let c = less_equal(7);
        prop_assert_eq!(c.not().not().is_satisfied(&x), c.is_satisfied(&x));
    }

    #[test]
    fn static_and_dynamic_bounds_agree(x in any::<i64>()) {
        prop_assert_eq!(
            Less::<Const<-3>>::default().is_satisfied(&x),
            less(-3_i64).is_satisfied(&x)
        );
        prop_assert_eq!(
            OpenInterval::<Const<-5>, Const<5>>::default().is_satisfied(&x),
            OpenInterval::new(-5_i64, 5).is_satisfied(&x)
        );
    }
}

// ============================================================================
// MODIFIER IDEMPOTENCE: writing back the same value changes nothing
// ============================================================================

proptest! {
    #[test]
    fn modify_write_back_is_identity(x in -100_i32..=100) {
        let mut v = make_bounded(x, -100, 100);
        {
            let mut m = v.modify();
            let same = *m;
            *m = same;
        }
        prop_assert_eq!(*v.get(), x);
        prop_assert!(v.constraint().is_satisfied(v.get()));
    }

    #[test]
    fn modify_write_back_is_bitwise_identity(bits in any::<u64>()) {
        let x = f64::from_bits(bits);
        prop_assume!(x.is_finite());
        let mut v: ConstrainedValue<f64, Finite, RejectingVerifier> =
            ConstrainedValue::try_new(x).unwrap();
        v.with(|inner| {
            let same = *inner;
            *inner = same;
        })
        .unwrap();
        prop_assert_eq!(v.get().to_bits(), bits);
    }
}
