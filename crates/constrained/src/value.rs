//! [`ConstrainedValue`]: a value bundled with a constraint that is
//! re-verified on every mutation.
//!
//! # Construction and mutation
//!
//! | Operation | Ordering | Guarantee on failure |
//! |-----------|----------|----------------------|
//! | `new` / `try_new` | verify, then store | no object is created |
//! | `assign` / `try_assign` | verify, then commit | stored value unchanged |
//! | `modify` | mutate, verify on release | verifier decides |
//!
//! Which failure is possible depends on the verifier `V`. The infallible
//! entry points (`new`, `with_constraint`, `assign`) exist only for
//! verifiers whose `Error` is [`Infallible`].
//!
//! ```
//! use tessera_constrained::{ClampedValue, make_clamped};
//!
//! let mut volume: ClampedValue<i32> = make_clamped(7, 0, 10);
//! volume.assign(25);
//! assert_eq!(*volume, 10);
//!
//! *volume.modify() -= 15;
//! assert_eq!(*volume, 0);
//! ```

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::bound::Dynamic;
use crate::bounded::{Bounded, ClosedInterval};
use crate::common::Tag;
use crate::constraint::Constraint;
use crate::error::ConstraintResult;
use crate::verifier::{AssertionVerifier, ClampingVerifier, NullVerifier, Verifier};

#[inline(always)]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

// ============================================================================
// CONSTRAINED VALUE
// ============================================================================

/// A `T` that always satisfies `C`, as enforced by the verifier `V`.
///
/// The constraint takes no part in comparisons or hashing.
pub struct ConstrainedValue<T, C, V = AssertionVerifier> {
    value: T,
    constraint: C,
    _verifier: PhantomData<fn() -> V>,
}

impl<T, C, V> ConstrainedValue<T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C, Error = Infallible>,
{
    /// Creates a value with the default constraint.
    #[track_caller]
    pub fn new(value: T) -> Self
    where
        C: Default,
    {
        Self::with_constraint(value, C::default())
    }

    /// Creates a value with an explicit constraint.
    #[track_caller]
    pub fn with_constraint(value: T, constraint: C) -> Self {
        into_ok(Self::try_with_constraint(value, constraint))
    }

    /// Replaces the value. The new value is verified before it is stored.
    #[track_caller]
    pub fn assign(&mut self, value: T) {
        into_ok(self.try_assign(value));
    }
}

impl<T, C, V> ConstrainedValue<T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    /// Creates a value with the default constraint, reporting the verifier's
    /// error.
    #[track_caller]
    pub fn try_new(value: T) -> Result<Self, V::Error>
    where
        C: Default,
    {
        Self::try_with_constraint(value, C::default())
    }

    /// Creates a value with an explicit constraint, reporting the verifier's
    /// error.
    #[track_caller]
    pub fn try_with_constraint(mut value: T, constraint: C) -> Result<Self, V::Error> {
        V::verify(&mut value, &constraint)?;
        Ok(Self {
            value,
            constraint,
            _verifier: PhantomData,
        })
    }

    /// Creates a value from untrusted input.
    ///
    /// Uses [`Verifier::admit`], so an invalid value is an error for every
    /// verifier that cannot repair it, including [`AssertionVerifier`].
    pub fn admit(value: T) -> ConstraintResult<Self>
    where
        C: Default,
    {
        Self::admit_with_constraint(value, C::default())
    }

    /// [`admit`](Self::admit) with an explicit constraint.
    pub fn admit_with_constraint(mut value: T, constraint: C) -> ConstraintResult<Self> {
        V::admit(&mut value, &constraint)?;
        Ok(Self {
            value,
            constraint,
            _verifier: PhantomData,
        })
    }

    /// Replaces the value if it passes verification.
    ///
    /// On error the stored value is unchanged.
    #[track_caller]
    pub fn try_assign(&mut self, mut value: T) -> Result<(), V::Error> {
        V::verify(&mut value, &self.constraint)?;
        self.value = value;
        Ok(())
    }

    /// Grants mutable access to the value. The value is re-verified exactly
    /// once, when the returned [`Modifier`] is committed or dropped.
    #[must_use = "the value is re-verified as soon as the modifier is dropped"]
    pub fn modify(&mut self) -> Modifier<'_, T, C, V> {
        Modifier {
            value: &mut self.value,
            constraint: &self.constraint,
            verified: false,
            _verifier: PhantomData,
        }
    }

    /// Runs `f` on the value and commits the modification.
    ///
    /// ```
    /// use tessera_constrained::{ConstrainedValue, RejectingVerifier, NonEmpty};
    ///
    /// let mut name: ConstrainedValue<String, NonEmpty, RejectingVerifier> =
    ///     ConstrainedValue::try_new("ada".into()).unwrap();
    /// name.with(|s| s.push_str(" lovelace")).unwrap();
    /// assert_eq!(name.get(), "ada lovelace");
    /// ```
    pub fn with<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, V::Error> {
        let mut modifier = self.modify();
        let result = f(&mut *modifier);
        modifier.commit()?;
        Ok(result)
    }
}

impl<T, C, V> ConstrainedValue<T, C, V> {
    /// Returns the value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Returns the constraint.
    #[inline]
    pub const fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Releases the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Releases the value and the constraint.
    pub fn into_parts(self) -> (T, C) {
        (self.value, self.constraint)
    }
}

impl<T, C, V> Deref for ConstrainedValue<T, C, V> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, C, V> AsRef<T> for ConstrainedValue<T, C, V> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, C: Clone, V> Clone for ConstrainedValue<T, C, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            constraint: self.constraint.clone(),
            _verifier: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
        self.constraint.clone_from(&source.constraint);
    }
}

impl<T: Copy, C: Copy, V> Copy for ConstrainedValue<T, C, V> {}

impl<T: fmt::Debug, C: fmt::Debug, V> fmt::Debug for ConstrainedValue<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstrainedValue")
            .field("value", &self.value)
            .field("constraint", &self.constraint)
            .finish()
    }
}

impl<T: fmt::Display, C, V> fmt::Display for ConstrainedValue<T, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: PartialEq, C, V> PartialEq for ConstrainedValue<T, C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, C, V> Eq for ConstrainedValue<T, C, V> {}

impl<T: PartialOrd, C, V> PartialOrd for ConstrainedValue<T, C, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, C, V> Ord for ConstrainedValue<T, C, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, C, V> Hash for ConstrainedValue<T, C, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// MODIFIER
// ============================================================================

/// Scoped mutable access to a [`ConstrainedValue`].
///
/// Re-verifies the value exactly once: on [`commit`](Self::commit), or on
/// drop if it was never committed. A verifier error on drop has nowhere to
/// go and is reported as a precheck violation.
pub struct Modifier<'a, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    value: &'a mut T,
    constraint: &'a C,
    verified: bool,
    _verifier: PhantomData<fn() -> V>,
}

impl<T, C, V> Modifier<'_, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    /// Verifies the modified value now and returns the verifier's verdict.
    pub fn commit(mut self) -> Result<(), V::Error> {
        self.verified = true;
        V::verify(&mut *self.value, self.constraint)
    }
}

impl<T, C, V> Deref for Modifier<'_, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    type Target = T;

    fn deref(&self) -> &T {
        &*self.value
    }
}

impl<T, C, V> DerefMut for Modifier<'_, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.value
    }
}

impl<T, C, V> Drop for Modifier<'_, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn drop(&mut self) {
        if self.verified {
            return;
        }
        self.verified = true;
        if V::verify(&mut *self.value, self.constraint).is_err() {
            tessera_precheck::violation(format_args!(
                "modified value violates constraint `{}`",
                self.constraint.name()
            ));
        }
    }
}

impl<T: fmt::Debug, C, V> fmt::Debug for Modifier<'_, T, C, V>
where
    C: Constraint<T>,
    V: Verifier<T, C>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("value", &self.value)
            .field("verified", &self.verified)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ALIASES
// ============================================================================

/// A value distinguished by the marker `M` only. Never checked.
///
/// ```
/// use tessera_constrained::Tagged;
///
/// enum Sanitized {}
/// enum Raw {}
///
/// let raw: Tagged<String, Raw> = Tagged::new("<b>".into());
/// let clean: Tagged<String, Sanitized> = Tagged::new(raw.get().replace('<', "&lt;"));
/// assert_eq!(clean.get(), "&lt;b>");
/// ```
pub type Tagged<T, M> = ConstrainedValue<T, Tag<M>, NullVerifier>;

/// A value kept inside an interval by a debug precheck.
pub type BoundedValue<
    T,
    L = Dynamic<T>,
    U = Dynamic<T>,
    const LOWER_INCLUSIVE: bool = true,
    const UPPER_INCLUSIVE: bool = true,
> = ConstrainedValue<T, Bounded<L, U, LOWER_INCLUSIVE, UPPER_INCLUSIVE>, AssertionVerifier>;

/// A value clamped into a closed interval.
pub type ClampedValue<T, L = Dynamic<T>, U = Dynamic<T>> =
    ConstrainedValue<T, ClosedInterval<L, U>, ClampingVerifier>;

/// Creates a [`BoundedValue`] in `[lower, upper]`.
#[track_caller]
pub fn make_bounded<T: PartialOrd + Clone>(value: T, lower: T, upper: T) -> BoundedValue<T> {
    ConstrainedValue::with_constraint(value, ClosedInterval::new(lower, upper))
}

/// Creates a [`ClampedValue`] in `[lower, upper]`, clamping `value` if needed.
#[track_caller]
pub fn make_clamped<T: PartialOrd + Clone>(value: T, lower: T, upper: T) -> ClampedValue<T> {
    ConstrainedValue::with_constraint(value, ClosedInterval::new(lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{Less, less};
    use crate::common::NonEmpty;
    use crate::error::ConstraintError;
    use crate::verifier::RejectingVerifier;

    type Small = ConstrainedValue<i32, Less<Dynamic<i32>>, RejectingVerifier>;

    #[test]
    fn construction_keeps_valid_value() {
        let v = make_bounded(5, 0, 10);
        assert_eq!(*v.get(), 5);
        assert_eq!(v.constraint().lower_bound().value(), &0);
    }

    #[test]
    fn rejecting_construction_returns_error() {
        let err = Small::try_with_constraint(50, less(42)).unwrap_err();
        assert_eq!(err, ConstraintError::violated("less"));
    }

    #[test]
    fn try_assign_keeps_old_value_on_failure() {
        let mut v = Small::try_with_constraint(1, less(42)).unwrap();
        assert!(v.try_assign(100).is_err());
        assert_eq!(*v, 1);
        assert!(v.try_assign(41).is_ok());
        assert_eq!(*v, 41);
    }

    #[test]
    fn commit_reports_error_once() {
        let mut v = Small::try_with_constraint(1, less(42)).unwrap();
        let mut m = v.modify();
        *m = 99;
        assert!(m.commit().is_err());
        // the modification itself is not rolled back
        assert_eq!(*v, 99);
    }

    #[test]
    fn with_returns_closure_result() {
        let mut v = Small::try_with_constraint(1, less(42)).unwrap();
        let doubled = v.with(|x| {
            *x *= 2;
            *x
        });
        assert_eq!(doubled, Ok(2));
    }

    #[test]
    #[should_panic(expected = "modified value violates constraint `non_empty`")]
    fn dropped_modifier_reports_rejection() {
        let mut v: ConstrainedValue<String, NonEmpty, RejectingVerifier> =
            ConstrainedValue::try_new("x".into()).unwrap();
        v.modify().clear();
    }

    #[test]
    fn clamped_assign_and_modify() {
        let mut v = make_clamped(7, 0, 10);
        v.assign(-4);
        assert_eq!(*v, 0);
        *v.modify() += 30;
        assert_eq!(*v, 10);
    }

    #[test]
    fn admit_rejects_under_assertion_verifier() {
        type Percent = BoundedValue<u8, crate::Const<0>, crate::Const<100>>;
        assert!(Percent::admit(50).is_ok());
        assert_eq!(
            Percent::admit(150).unwrap_err(),
            ConstraintError::violated("bounded")
        );
    }

    #[test]
    fn comparisons_ignore_constraint() {
        let a = make_bounded(3, 0, 10);
        let b = make_bounded(3, -100, 100);
        assert_eq!(a, b);
        assert!(make_bounded(2, 0, 10) < b);
    }

    #[test]
    fn into_parts_releases_both() {
        let (value, constraint) = make_clamped(15, 0, 20).into_parts();
        assert_eq!(value, 15);
        assert_eq!(constraint.upper_bound().value(), &20);
    }

    #[test]
    fn display_and_debug() {
        let v = make_bounded(7, 0, 10);
        assert_eq!(v.to_string(), "7");
        assert!(format!("{v:?}").starts_with("ConstrainedValue { value: 7"));
    }
}
