//! One-sided comparison constraints: `less`, `less_equal`, `greater`,
//! `greater_equal`.
//!
//! Each is generic over a [`Bound`] provider, so `LessEqual<Dynamic<u32>>`
//! stores its bound while `LessEqual<Const<42>>` is zero-sized.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::bound::{Bound, Dynamic};
use crate::constraint::Constraint;
use crate::verifier::Clamp;

macro_rules! comparison_constraint {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $op:tt, $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name<B> {
            bound: B,
        }

        impl<B> $name<B> {
            /// Creates the constraint from a bound provider.
            pub const fn new(bound: B) -> Self {
                Self { bound }
            }

            /// Returns the bound provider.
            pub const fn bound(&self) -> &B {
                &self.bound
            }
        }

        impl<T: PartialOrd, B: Bound<T>> Constraint<T> for $name<B> {
            #[inline]
            fn is_satisfied(&self, value: &T) -> bool {
                *value $op self.bound.get()
            }

            fn name(&self) -> Cow<'_, str> {
                Cow::Borrowed($label)
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] with a dynamic bound.")]
        pub const fn $factory<T>(bound: T) -> $name<Dynamic<T>> {
            $name::new(Dynamic(bound))
        }
    };
}

comparison_constraint! {
    /// `value < bound`.
    Less, less, <, "less"
}

comparison_constraint! {
    /// `value <= bound`. Clampable.
    LessEqual, less_equal, <=, "less_equal"
}

comparison_constraint! {
    /// `value > bound`.
    Greater, greater, >, "greater"
}

comparison_constraint! {
    /// `value >= bound`. Clampable.
    GreaterEqual, greater_equal, >=, "greater_equal"
}

impl<T: PartialOrd, B: Bound<T>> Clamp<T> for LessEqual<B> {
    fn clamp(&self, value: &mut T) {
        let bound = self.bound.get();
        if (*value).partial_cmp(&bound).is_none_or(Ordering::is_gt) {
            *value = bound;
        }
    }
}

impl<T: PartialOrd, B: Bound<T>> Clamp<T> for GreaterEqual<B> {
    fn clamp(&self, value: &mut T) {
        let bound = self.bound.get();
        if (*value).partial_cmp(&bound).is_none_or(Ordering::is_lt) {
            *value = bound;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Const;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(40, true)]
    #[case(42, false)]
    #[case(50, false)]
    fn less_is_strict(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(less(42).is_satisfied(&value), expected);
        assert_eq!(Less::<Const<42>>::default().is_satisfied(&value), expected);
    }

    #[rstest]
    #[case(42, true)]
    #[case(43, false)]
    #[case(-1, true)]
    fn less_equal_includes_bound(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(less_equal(42).is_satisfied(&value), expected);
    }

    #[rstest]
    #[case(5, false)]
    #[case(6, true)]
    fn greater_is_strict(#[case] value: u8, #[case] expected: bool) {
        assert_eq!(greater(5_u8).is_satisfied(&value), expected);
        assert_eq!(GreaterEqual::<Const<6>>::default().is_satisfied(&value), expected);
    }

    #[test]
    fn clamp_moves_to_bound() {
        let mut v = 100_i64;
        less_equal(10_i64).clamp(&mut v);
        assert_eq!(v, 10);

        let mut w = -3_i64;
        greater_equal(0_i64).clamp(&mut w);
        assert_eq!(w, 0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn clamp_replaces_nan() {
        let mut v = f64::NAN;
        less_equal(1.5).clamp(&mut v);
        assert_eq!(v, 1.5);
    }

    #[test]
    fn works_on_non_copy_types() {
        let c = less(String::from("m"));
        assert!(c.is_satisfied(&String::from("apple")));
        assert!(!c.is_satisfied(&String::from("zebra")));
        assert_eq!(c.bound().value(), "m");
    }

    #[test]
    fn clamp_works_on_non_copy_types() {
        let mut v = String::from("zebra");
        less_equal(String::from("m")).clamp(&mut v);
        assert_eq!(v, "m");

        let mut w = String::from("b");
        greater_equal(String::from("a")).clamp(&mut w);
        assert_eq!(w, "b");
    }
}
