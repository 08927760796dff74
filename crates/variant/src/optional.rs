//! [`Optional<T>`]: a nullable single-alternative variant.
//!
//! Same storage and transitions as a [`NullableVariant<(T,)>`], with the
//! `Option`-like surface that a one-alternative list makes natural.
//! Converts to and from `Option<T>` for free.
//!
//! ```
//! use tessera_variant::{Optional, NULLVAR};
//!
//! let port = Optional::some(8080_u16);
//! assert_eq!(*port.value(), 8080);
//! assert_eq!(port.map(|p| p + 1).value_or(0), 8081);
//!
//! let missing: Optional<u16> = NULLVAR.into();
//! assert!(missing < Optional::some(0));
//! ```

use std::cmp::Ordering;

use tessera_precheck::precheck;

use crate::index::I0;
use crate::nullvar::Nullvar;
use crate::variant::{NullableVariant, Variant};
use crate::visitor::Visit;

const EMPTY_ACCESS: &str = "optional does not hold a value";

/// Zero or one `T`. Empty compares less than any value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Optional<T>(NullableVariant<(T,)>);

/// An optional reference.
pub type OptionalRef<'a, T> = Optional<&'a T>;

impl<T> Optional<T> {
    /// An empty optional.
    pub const fn none() -> Self {
        Self(Variant::empty())
    }

    /// An optional holding `value`.
    pub fn some(value: T) -> Self {
        Self(Variant::new::<T, I0>(value))
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.0.has_value()
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Precheck violation if empty.
    #[track_caller]
    pub fn value(&self) -> &T {
        precheck!(self.has_value(), "{}", EMPTY_ACCESS);
        self.0.value::<T, I0>()
    }

    /// Returns the held value mutably.
    ///
    /// # Panics
    ///
    /// Precheck violation if empty.
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        precheck!(self.has_value(), "{}", EMPTY_ACCESS);
        self.0.value_mut::<T, I0>()
    }

    /// Returns the held value, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.0.get::<T, I0>()
    }

    /// Returns the held value mutably, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.get_mut::<T, I0>()
    }

    /// Returns the held value, or `default` if empty.
    pub fn value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Returns the held value, or computes one if empty.
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.into_option().unwrap_or_else(f)
    }

    /// Stores `value`, replacing any held one, and returns it.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.0.emplace::<T, I0>(value);
        self.0.value_mut::<T, I0>()
    }

    /// Drops the held value, if any.
    pub fn reset(&mut self) {
        self.0.reset();
    }

    /// Moves the held value into a new optional, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        self.0.take::<T, I0>().into()
    }

    /// Applies `f` to the held value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        self.into_option().map(f).into()
    }

    /// Applies `f` to the held value and flattens the result.
    pub fn bind<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self.into_option() {
            Some(value) => f(value),
            None => Optional::none(),
        }
    }

    /// Alias of [`bind`](Self::bind).
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.bind(f)
    }

    /// Calls `visitor.visit` with the held value, or `visit_empty`.
    pub fn visit<V: Visit<T>>(&self, visitor: &mut V) -> V::Output {
        self.0.visit(visitor)
    }

    /// Borrows the held value.
    pub fn as_ref(&self) -> Optional<&T> {
        self.get().into()
    }

    /// Borrows the held value mutably.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        self.get_mut().into()
    }

    /// Converts into an `Option`.
    pub fn into_option(mut self) -> Option<T> {
        self.0.take::<T, I0>()
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the referenced value.
    pub fn cloned(self) -> Optional<T> {
        self.map(Clone::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Copies the referenced value.
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Nullvar> for Optional<T> {
    fn from(_: Nullvar) -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::none, Self::some)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> PartialEq<Nullvar> for Optional<T> {
    fn eq(&self, _: &Nullvar) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<Optional<T>> for Nullvar {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_none()
    }
}

impl<T> PartialOrd<Nullvar> for Optional<T> {
    fn partial_cmp(&self, _: &Nullvar) -> Option<Ordering> {
        Some(if self.has_value() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<T> PartialOrd<Optional<T>> for Nullvar {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        Some(if other.has_value() {
            Ordering::Less
        } else {
            Ordering::Equal
        })
    }
}
