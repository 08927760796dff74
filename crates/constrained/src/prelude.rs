//! Prelude module for convenient imports.
//!
//! ```
//! use tessera_constrained::prelude::*;
//!
//! let port: BoundedValue<u16> = make_bounded(8080, 1024, 49151);
//! assert!(greater(0_u16).and(less(u16::MAX)).is_satisfied(port.get()));
//! ```

// ============================================================================
// CORE: traits, wrapper, errors
// ============================================================================

pub use crate::constraint::{Constraint, ConstraintExt, Predicate, predicate};
pub use crate::error::{ConstraintError, ConstraintResult};
pub use crate::value::{
    BoundedValue, ClampedValue, ConstrainedValue, Modifier, Tagged, make_bounded, make_clamped,
};
pub use crate::verifier::{
    AssertionVerifier, Clamp, ClampingVerifier, NullVerifier, RejectingVerifier, Verifier,
};

// ============================================================================
// CONSTRAINTS
// ============================================================================

pub use crate::bound::{Bound, Const, Dynamic};
pub use crate::bounded::{Bounded, ClosedInterval, LeftOpen, OpenInterval, RightOpen};
pub use crate::combinators::{And, Not, Or};
pub use crate::common::{Finite, IsEmpty, NonDefault, NonEmpty, NonNull, Tag, finite};
pub use crate::comparison::{
    Greater, GreaterEqual, Less, LessEqual, greater, greater_equal, less, less_equal,
};
