//! # tessera-constrained
//!
//! Values bundled with a constraint that holds for the value's whole
//! lifetime.
//!
//! A [`ConstrainedValue<T, C, V>`] stores a `T` and a [`Constraint`] `C`. Every
//! construction and mutation runs the [`Verifier`] `V`, which decides what a
//! failing constraint means:
//!
//! - [`AssertionVerifier`] (default): a programming error, caught by a debug
//!   precheck.
//! - [`RejectingVerifier`]: a recoverable [`ConstraintError`].
//! - [`ClampingVerifier`]: the value is moved to the nearest bound.
//! - [`NullVerifier`]: no check, the constraint only tags the type.
//!
//! # Quick start
//!
//! ```
//! use tessera_constrained::prelude::*;
//!
//! // Rejecting: invalid input is an error value.
//! type Port = ConstrainedValue<u16, GreaterEqual<Const<1024>>, RejectingVerifier>;
//!
//! let port = Port::try_new(8080).unwrap();
//! assert_eq!(*port, 8080);
//! assert!(Port::try_new(80).is_err());
//!
//! // Clamping: invalid input is corrected.
//! let mut level = make_clamped(3, 0, 5);
//! level.assign(9);
//! assert_eq!(*level, 5);
//! ```
//!
//! # Mutation
//!
//! Whole-value assignment verifies before committing, so a failed
//! [`try_assign`](ConstrainedValue::try_assign) leaves the old value in
//! place. In-place mutation goes through [`ConstrainedValue::modify`], which
//! re-verifies exactly once when the [`Modifier`] is committed or dropped.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize`; deserialization re-verifies |
//! | `always-check` | keep debug prechecks in release builds |
//! | `trusted` | compile debug prechecks out |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bound;
mod bounded;
mod combinators;
mod common;
mod comparison;
mod constraint;
mod error;
mod macros;
pub mod prelude;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;
mod verifier;

pub use bound::{Bound, Const, Dynamic};
pub use bounded::{Bounded, ClosedInterval, LeftOpen, OpenInterval, RightOpen};
pub use combinators::{And, Not, Or};
pub use common::{Finite, IsEmpty, NonDefault, NonEmpty, NonNull, Tag, finite};
pub use comparison::{
    Greater, GreaterEqual, Less, LessEqual, greater, greater_equal, less, less_equal,
};
pub use constraint::{Constraint, ConstraintExt, Predicate, predicate};
pub use error::{ConstraintError, ConstraintResult};
pub use value::{
    BoundedValue, ClampedValue, ConstrainedValue, Modifier, Tagged, make_bounded, make_clamped,
};
pub use verifier::{
    AssertionVerifier, Clamp, ClampingVerifier, NullVerifier, RejectingVerifier, Verifier,
};
