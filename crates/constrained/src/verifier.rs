//! Verifier strategies: what happens when a constraint does not hold.
//!
//! | Verifier | On failure | `Error` |
//! |----------|------------|---------|
//! | [`AssertionVerifier`] | precheck violation (debug builds) | `Infallible` |
//! | [`NullVerifier`] | nothing, the constraint is a marker | `Infallible` |
//! | [`ClampingVerifier`] | value moved to the nearest bound | `Infallible` |
//! | [`RejectingVerifier`] | error returned to the caller | [`ConstraintError`] |
//!
//! The verifier is chosen independently of the constraint, with one
//! restriction: [`ClampingVerifier`] only exists for constraints that
//! implement [`Clamp`].
//!
//! ```compile_fail
//! use tessera_constrained::{ClampingVerifier, ConstrainedValue, Less, Dynamic, less};
//!
//! // `Less` has no closed bound to clamp to.
//! let _ = ConstrainedValue::<i32, Less<Dynamic<i32>>, ClampingVerifier>::with_constraint(5, less(3));
//! ```

use std::convert::Infallible;

use tessera_precheck::debug_precheck;

use crate::constraint::Constraint;
use crate::error::{ConstraintError, ConstraintResult};

/// Strategy invoked whenever a constrained value is created or mutated.
pub trait Verifier<T, C: Constraint<T>> {
    /// Error reported for a value that cannot be made valid.
    type Error;

    /// Verifies `value` against `constraint`.
    ///
    /// May correct `value` in place. On `Ok` the value satisfies the
    /// constraint.
    fn verify(value: &mut T, constraint: &C) -> Result<(), Self::Error>;

    /// Verifies input that did not come from the program itself.
    ///
    /// Never aborts. The default rejects any value that does not satisfy the
    /// constraint.
    fn admit(value: &mut T, constraint: &C) -> ConstraintResult<()> {
        if constraint.is_satisfied(value) {
            Ok(())
        } else {
            Err(ConstraintError::violated(constraint.name()))
        }
    }
}

/// Constraints with a closed bound that an invalid value can be moved to.
pub trait Clamp<T>: Constraint<T> {
    /// Moves `value` to the nearest admissible value.
    ///
    /// Values that do not compare to the bounds (NaN) go to the lower bound,
    /// or to the only bound for one-sided constraints.
    fn clamp(&self, value: &mut T);
}

/// A failing constraint is a programming error.
///
/// Checked through [`debug_precheck!`], so the check disappears in release
/// builds and with the `trusted` feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AssertionVerifier;

impl<T, C: Constraint<T>> Verifier<T, C> for AssertionVerifier {
    type Error = Infallible;

    #[inline]
    #[track_caller]
    fn verify(value: &mut T, constraint: &C) -> Result<(), Infallible> {
        debug_precheck!(
            constraint.is_satisfied(value),
            "value violates constraint `{}`",
            constraint.name()
        );
        Ok(())
    }
}

/// Performs no check at all. For constraints that only tag a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullVerifier;

impl<T, C: Constraint<T>> Verifier<T, C> for NullVerifier {
    type Error = Infallible;

    #[inline(always)]
    fn verify(_value: &mut T, _constraint: &C) -> Result<(), Infallible> {
        Ok(())
    }

    fn admit(_value: &mut T, _constraint: &C) -> ConstraintResult<()> {
        Ok(())
    }
}

/// Moves an invalid value to the nearest bound of the constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClampingVerifier;

impl<T, C: Clamp<T>> Verifier<T, C> for ClampingVerifier {
    type Error = Infallible;

    #[inline]
    fn verify(value: &mut T, constraint: &C) -> Result<(), Infallible> {
        if !constraint.is_satisfied(value) {
            constraint.clamp(value);
            tracing::trace!(constraint = %constraint.name(), "value clamped");
        }
        Ok(())
    }

    fn admit(value: &mut T, constraint: &C) -> ConstraintResult<()> {
        match Self::verify(value, constraint) {
            Ok(()) => Ok(()),
            Err(never) => match never {},
        }
    }
}

/// Reports a failing constraint as [`ConstraintError::Violated`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RejectingVerifier;

impl<T, C: Constraint<T>> Verifier<T, C> for RejectingVerifier {
    type Error = ConstraintError;

    #[inline]
    fn verify(value: &mut T, constraint: &C) -> ConstraintResult<()> {
        Self::admit(value, constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{LessEqual, greater, less_equal};

    #[test]
    fn null_verifier_accepts_anything() {
        let mut v = 100;
        assert!(NullVerifier::verify(&mut v, &less_equal(1)).is_ok());
        assert!(NullVerifier::admit(&mut v, &less_equal(1)).is_ok());
        assert_eq!(v, 100);
    }

    #[test]
    fn rejecting_verifier_names_constraint() {
        let mut v = 0;
        let err = RejectingVerifier::verify(&mut v, &greater(5)).unwrap_err();
        assert_eq!(err, ConstraintError::violated("greater"));
    }

    #[test]
    fn clamping_verifier_corrects_value() {
        let c: LessEqual<_> = less_equal(10);
        let mut v = 11;
        assert!(ClampingVerifier::verify(&mut v, &c).is_ok());
        assert_eq!(v, 10);

        let mut w = 3;
        assert!(ClampingVerifier::admit(&mut w, &c).is_ok());
        assert_eq!(w, 3);
    }

    #[test]
    fn assertion_verifier_admit_rejects_without_panicking() {
        let mut v = 50;
        assert!(AssertionVerifier::admit(&mut v, &less_equal(42)).is_err());
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "value violates constraint `less_equal`")]
    fn assertion_verifier_panics_in_debug() {
        let mut v = 50;
        let _ = AssertionVerifier::verify(&mut v, &less_equal(42));
    }
}
