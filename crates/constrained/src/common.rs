//! Ready-made constraints for common invariants.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::constraint::Constraint;

// ============================================================================
// NON NULL
// ============================================================================

/// The value is not null: `Some` for `Option`, non-null for raw pointers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonNull;

impl<T> Constraint<Option<T>> for NonNull {
    #[inline]
    fn is_satisfied(&self, value: &Option<T>) -> bool {
        value.is_some()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("non_null")
    }
}

impl<T: ?Sized> Constraint<*const T> for NonNull {
    #[inline]
    fn is_satisfied(&self, value: &*const T) -> bool {
        !value.is_null()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("non_null")
    }
}

impl<T: ?Sized> Constraint<*mut T> for NonNull {
    #[inline]
    fn is_satisfied(&self, value: &*mut T) -> bool {
        !value.is_null()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("non_null")
    }
}

// ============================================================================
// NON EMPTY
// ============================================================================

/// Containers that can report emptiness.
pub trait IsEmpty {
    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool;
}

macro_rules! impl_is_empty {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> IsEmpty for $ty {
                #[inline]
                fn is_empty(&self) -> bool {
                    <$ty>::is_empty(self)
                }
            }
        )+
    };
}

impl_is_empty! {
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
}

/// The container has at least one element.
///
/// ```
/// use tessera_constrained::{Constraint, NonEmpty};
///
/// assert!(NonEmpty.is_satisfied("x"));
/// assert!(!NonEmpty.is_satisfied(&Vec::<u8>::new()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonEmpty;

impl<T: IsEmpty + ?Sized> Constraint<T> for NonEmpty {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        !IsEmpty::is_empty(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("non_empty")
    }
}

// ============================================================================
// NON DEFAULT
// ============================================================================

/// The value differs from `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonDefault;

impl<T: Default + PartialEq> Constraint<T> for NonDefault {
    fn is_satisfied(&self, value: &T) -> bool {
        *value != T::default()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("non_default")
    }
}

// ============================================================================
// TAG
// ============================================================================

/// Marker constraint that is always satisfied.
///
/// Distinguishes otherwise identical types, e.g. sanitized and raw strings.
/// Paired with [`NullVerifier`](crate::NullVerifier) in [`Tagged`](crate::Tagged).
pub struct Tag<M: ?Sized>(PhantomData<fn() -> M>);

impl<M: ?Sized> Tag<M> {
    /// Creates the tag.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M: ?Sized> Clone for Tag<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for Tag<M> {}

impl<M: ?Sized> Default for Tag<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ?Sized> PartialEq for Tag<M> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<M: ?Sized> Eq for Tag<M> {}

impl<M: ?Sized> Hash for Tag<M> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<M: ?Sized> fmt::Debug for Tag<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>", std::any::type_name::<M>())
    }
}

impl<T: ?Sized, M: ?Sized> Constraint<T> for Tag<M> {
    #[inline(always)]
    fn is_satisfied(&self, _value: &T) -> bool {
        true
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("tag")
    }
}

// ============================================================================
// FINITE
// ============================================================================

crate::constraint! {
    /// A floating point value that is neither NaN nor infinite.
    pub Finite for f64 as "finite";
    rule(input) { input.is_finite() }
    fn finite();
}

impl Constraint<f32> for Finite {
    #[inline]
    fn is_satisfied(&self, value: &f32) -> bool {
        value.is_finite()
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("finite")
    }
}
