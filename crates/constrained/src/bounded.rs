//! Two-sided interval constraints.
//!
//! [`Bounded`] takes a lower and an upper [`Bound`] provider plus two const
//! flags selecting inclusive or exclusive ends. The four aliases cover the
//! usual intervals:
//!
//! | Alias | Interval |
//! |-------|----------|
//! | [`ClosedInterval`] | `[lo, hi]` |
//! | [`OpenInterval`] | `(lo, hi)` |
//! | [`RightOpen`] | `[lo, hi)` |
//! | [`LeftOpen`] | `(lo, hi]` |
//!
//! ```
//! use tessera_constrained::{ClosedInterval, Const, Constraint};
//!
//! let percent = ClosedInterval::new(0, 100);
//! assert!(percent.is_satisfied(&100));
//!
//! // Zero-sized, bounds live in the type.
//! let byte: ClosedInterval<Const<0>, Const<255>> = ClosedInterval::default();
//! assert!(!byte.is_satisfied(&256_i32));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Debug;

use tessera_precheck::debug_precheck;

use crate::bound::{Bound, Dynamic};
use crate::constraint::Constraint;
use crate::error::{ConstraintError, ConstraintResult};
use crate::verifier::Clamp;

/// `lo <(=) value <(=) hi`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounded<L, U, const LOWER_INCLUSIVE: bool, const UPPER_INCLUSIVE: bool> {
    lower: L,
    upper: U,
}

/// `[lo, hi]`. The only interval that supports clamping.
pub type ClosedInterval<L, U = L> = Bounded<L, U, true, true>;

/// `(lo, hi)`.
pub type OpenInterval<L, U = L> = Bounded<L, U, false, false>;

/// `[lo, hi)`.
pub type RightOpen<L, U = L> = Bounded<L, U, true, false>;

/// `(lo, hi]`.
pub type LeftOpen<L, U = L> = Bounded<L, U, false, true>;

impl<L, U, const LI: bool, const UI: bool> Bounded<L, U, LI, UI> {
    /// Creates the interval without checking that `lower <= upper`.
    ///
    /// An inverted interval is never satisfied.
    pub const fn from_bounds(lower: L, upper: U) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower bound provider.
    pub const fn lower_bound(&self) -> &L {
        &self.lower
    }

    /// Returns the upper bound provider.
    pub const fn upper_bound(&self) -> &U {
        &self.upper
    }
}

impl<T: PartialOrd, const LI: bool, const UI: bool> Bounded<Dynamic<T>, Dynamic<T>, LI, UI> {
    /// Creates an interval with dynamic bounds.
    ///
    /// `lower <= upper` is a debug precheck.
    #[track_caller]
    pub fn new(lower: T, upper: T) -> Self {
        debug_precheck!(
            lower <= upper,
            "interval lower bound is greater than its upper bound"
        );
        Self::from_bounds(Dynamic(lower), Dynamic(upper))
    }
}

impl<T: PartialOrd + Debug, const LI: bool, const UI: bool>
    Bounded<Dynamic<T>, Dynamic<T>, LI, UI>
{
    /// Creates an interval with dynamic bounds, rejecting `lower > upper`.
    pub fn try_new(lower: T, upper: T) -> ConstraintResult<Self> {
        if lower.partial_cmp(&upper).is_none_or(Ordering::is_gt) {
            return Err(ConstraintError::InvalidInterval {
                lower: format!("{lower:?}"),
                upper: format!("{upper:?}"),
            });
        }
        Ok(Self::from_bounds(Dynamic(lower), Dynamic(upper)))
    }
}

impl<T, L, U, const LI: bool, const UI: bool> Constraint<T> for Bounded<L, U, LI, UI>
where
    T: PartialOrd,
    L: Bound<T>,
    U: Bound<T>,
{
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        let lower = self.lower.get();
        let above = if LI { *value >= lower } else { *value > lower };
        above && {
            let upper = self.upper.get();
            if UI { *value <= upper } else { *value < upper }
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("bounded")
    }
}

impl<T, L, U> Clamp<T> for Bounded<L, U, true, true>
where
    T: PartialOrd,
    L: Bound<T>,
    U: Bound<T>,
{
    fn clamp(&self, value: &mut T) {
        let lower = self.lower.get();
        if (*value).partial_cmp(&lower).is_none_or(Ordering::is_lt) {
            *value = lower;
            return;
        }
        let upper = self.upper.get();
        if (*value).partial_cmp(&upper).is_some_and(Ordering::is_gt) {
            *value = upper;
        }
    }
}
