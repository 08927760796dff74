//! Bound providers for the comparison constraints.
//!
//! A bound is either captured at construction ([`Dynamic`]) or fixed in the
//! type ([`Const`], zero-sized). Both answer [`Bound::get`], so every
//! comparison constraint has the same contract regardless of where its bound
//! lives.

/// Something that yields the bound value of a comparison constraint.
pub trait Bound<T> {
    /// Returns the bound.
    fn get(&self) -> T;
}

/// A bound stored at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dynamic<T>(pub T);

impl<T> Dynamic<T> {
    /// Captures `value` as a bound.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns a reference to the stored bound.
    pub const fn value(&self) -> &T {
        &self.0
    }
}

impl<T: Clone> Bound<T> for Dynamic<T> {
    #[inline]
    fn get(&self) -> T {
        self.0.clone()
    }
}

/// A bound fixed at compile time. Zero-sized.
///
/// `Const<N>` is a bound for every primitive integer type. Using it with a
/// type that cannot represent `N` fails to compile:
///
/// ```compile_fail
/// use tessera_constrained::{Bound, Const};
///
/// let _: u8 = Const::<300>.get();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Const<const N: i128>;

impl<const N: i128> Const<N> {
    /// The bound as an `i128`.
    pub const VALUE: i128 = N;
}

macro_rules! impl_const_bound {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<const N: i128> Bound<$ty> for Const<N> {
                #[inline(always)]
                fn get(&self) -> $ty {
                    const {
                        assert!(
                            N >= <$ty>::MIN as i128 && N <= <$ty>::MAX as i128,
                            "static bound does not fit the bounded type"
                        );
                    }
                    N as $ty
                }
            }
        )+
    };
}

impl_const_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<const N: i128> Bound<u128> for Const<N> {
    #[inline(always)]
    fn get(&self) -> u128 {
        const {
            assert!(N >= 0, "static bound does not fit the bounded type");
        }
        N as u128
    }
}

impl<const N: i128> Bound<i128> for Const<N> {
    #[inline(always)]
    fn get(&self) -> i128 {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_returns_stored_value() {
        let b = Dynamic::new(String::from("m"));
        assert_eq!(Bound::<String>::get(&b), "m");
        assert_eq!(b.value(), "m");
    }

    #[test]
    fn const_converts_to_each_integer_type() {
        assert_eq!(Bound::<u8>::get(&Const::<42>), 42_u8);
        assert_eq!(Bound::<i64>::get(&Const::<-7>), -7_i64);
        assert_eq!(Bound::<u128>::get(&Const::<0>), 0_u128);
        assert_eq!(Bound::<i128>::get(&Const::<{ i128::MIN }>), i128::MIN);
        assert_eq!(Const::<9>::VALUE, 9);
    }

    #[test]
    fn const_is_zero_sized() {
        assert_eq!(size_of::<Const<1_000>>(), 0);
    }
}
