//! Prelude module for convenient imports.
//!
//! ```
//! use tessera_variant::prelude::*;
//!
//! let v = NullableVariant::<(u8, char)>::new('x');
//! assert_eq!(v.value_or::<char, I1>('?'), 'x');
//! assert!(Optional::<u8>::none() == NULLVAR);
//! ```

// ============================================================================
// CONTAINERS
// ============================================================================

pub use crate::optional::{Optional, OptionalRef};
pub use crate::tagged_union::TaggedUnion;
pub use crate::variant::{FallbackVariant, NullableVariant, Variant};

// ============================================================================
// POLICIES, POSITIONS, VISITORS
// ============================================================================

pub use crate::index::{I0, I1, I2, I3, I4, I5, I6, I7};
pub use crate::list::{Member, TypeList};
pub use crate::nullvar::{NULLVAR, Nullvar};
pub use crate::policy::{EmptyOnFailure, Fallback, NullablePolicy, Strong, VariantPolicy};
pub use crate::visitor::{IncompleteVisitor, Visit, VisitMut, Visitor};
pub use crate::skip_alternatives;
