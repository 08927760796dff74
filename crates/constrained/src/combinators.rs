//! Logical combinators over constraints.
//!
//! ```
//! use tessera_constrained::{Constraint, ConstraintExt, greater, less};
//!
//! let digit = greater(-1_i32).and(less(10_i32));
//! assert!(digit.is_satisfied(&7));
//! assert!(!digit.is_satisfied(&10));
//!
//! let outside = digit.not();
//! assert!(outside.is_satisfied(&42));
//! ```

use std::borrow::Cow;

use crate::constraint::Constraint;

/// Both constraints must hold. Short-circuits on the left one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left constraint.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right constraint.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right constraints.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, L: Constraint<T>, R: Constraint<T>> Constraint<T> for And<L, R> {
    fn is_satisfied(&self, value: &T) -> bool {
        self.left.is_satisfied(value) && self.right.is_satisfied(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({} and {})", self.left.name(), self.right.name()))
    }
}

/// At least one constraint must hold. Short-circuits on the left one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left constraint.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right constraint.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right constraints.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T: ?Sized, L: Constraint<T>, R: Constraint<T>> Constraint<T> for Or<L, R> {
    fn is_satisfied(&self, value: &T) -> bool {
        self.left.is_satisfied(value) || self.right.is_satisfied(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("({} or {})", self.left.name(), self.right.name()))
    }
}

/// Inverts a constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Not<C> {
    inner: C,
}

impl<C> Not<C> {
    /// Creates a new `Not` combinator.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inverted constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Extracts the inverted constraint.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Not<C> {
    fn is_satisfied(&self, value: &T) -> bool {
        !self.inner.is_satisfied(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("not {}", self.inner.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{ConstraintExt, predicate};
    use std::cell::Cell;

    #[test]
    fn and_requires_both() {
        let c = predicate(|v: &i32| *v > 0).and(predicate(|v: &i32| *v < 10));
        assert!(c.is_satisfied(&5));
        assert!(!c.is_satisfied(&0));
        assert!(!c.is_satisfied(&10));
    }

    #[test]
    fn or_requires_either() {
        let c = predicate(|v: &i32| *v < 0).or(predicate(|v: &i32| *v > 100));
        assert!(c.is_satisfied(&-1));
        assert!(c.is_satisfied(&101));
        assert!(!c.is_satisfied(&50));
    }

    #[test]
    fn not_inverts() {
        let c = predicate(|v: &i32| *v == 0).not();
        assert!(c.is_satisfied(&1));
        assert!(!c.is_satisfied(&0));
    }

    #[test]
    fn and_short_circuits() {
        let calls = Cell::new(0);
        let counting = predicate(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        let c = predicate(|_: &i32| false).and(counting);
        assert!(!c.is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn names_compose() {
        let c = predicate(|v: &i32| *v > 0)
            .named("positive")
            .and(predicate(|v: &i32| *v % 2 == 0).named("even").not());
        assert_eq!(Constraint::<i32>::name(&c), "(positive and not even)");
    }

    #[test]
    fn into_parts_returns_both_sides() {
        let (l, r) = And::new(1, 2).into_parts();
        assert_eq!((l, r), (1, 2));
        assert_eq!(Not::new(3).into_inner(), 3);
    }
}
