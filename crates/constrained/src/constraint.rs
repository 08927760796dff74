//! The [`Constraint`] trait and closure adapters.

use std::borrow::Cow;
use std::fmt;

use crate::combinators::{And, Not, Or};

// ============================================================================
// CORE CONSTRAINT TRAIT
// ============================================================================

/// A predicate over values of type `T`.
///
/// Constraints may carry state, e.g. a bound captured at construction.
/// They must be pure: the same value always yields the same answer.
///
/// # Examples
///
/// ```
/// use tessera_constrained::Constraint;
///
/// struct Even;
///
/// impl Constraint<u32> for Even {
///     fn is_satisfied(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// assert!(Even.is_satisfied(&4));
/// assert!(!Even.is_satisfied(&5));
/// ```
pub trait Constraint<T: ?Sized> {
    /// Returns `true` if `value` satisfies this constraint.
    fn is_satisfied(&self, value: &T) -> bool;

    /// Name used in diagnostics and in [`ConstraintError`](crate::ConstraintError).
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for &C {
    fn is_satisfied(&self, value: &T) -> bool {
        (**self).is_satisfied(value)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

// ============================================================================
// CLOSURE ADAPTER
// ============================================================================

/// Adapts a closure `Fn(&T) -> bool` into a [`Constraint`].
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    predicate: F,
    name: &'static str,
}

impl<F> Predicate<F> {
    /// Wraps `predicate`.
    pub const fn new(predicate: F) -> Self {
        Self {
            predicate,
            name: "predicate",
        }
    }

    /// Sets the diagnostic name.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Constraint<T> for Predicate<F> {
    fn is_satisfied(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }
}

/// Creates a [`Predicate`] from a closure.
///
/// ```
/// use tessera_constrained::{Constraint, predicate};
///
/// let short = predicate(|s: &str| s.len() < 8).named("short");
/// assert!(short.is_satisfied("abc"));
/// assert_eq!(Constraint::<str>::name(&short), "short");
/// ```
pub const fn predicate<F>(f: F) -> Predicate<F> {
    Predicate::new(f)
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every constraint.
pub trait ConstraintExt<T: ?Sized>: Constraint<T> + Sized {
    /// Both constraints must hold.
    fn and<C: Constraint<T>>(self, other: C) -> And<Self, C> {
        And::new(self, other)
    }

    /// At least one constraint must hold.
    fn or<C: Constraint<T>>(self, other: C) -> Or<Self, C> {
        Or::new(self, other)
    }

    /// Inverts the constraint.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: ?Sized, C: Constraint<T>> ConstraintExt<T> for C {}
