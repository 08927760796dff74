//! # tessera-variant
//!
//! Sum types over closed type lists, with explicit guarantees for what
//! happens when changing the held alternative fails.
//!
//! - [`TaggedUnion<L>`]: raw storage for one alternative of the tuple `L`
//!   plus a discriminant. Does not manage lifetimes.
//! - [`Variant<L, P>`]: owns its value. The [`VariantPolicy`] `P` decides
//!   the state after a failed type-changing transition.
//! - [`Optional<T>`]: the one-alternative nullable case.
//!
//! # Quick start
//!
//! ```
//! use tessera_variant::prelude::*;
//!
//! type Setting = Variant<(bool, i64, String)>;
//!
//! let mut s = Setting::new(true);
//! s.emplace(42_i64);
//! assert!(s.holds::<i64, _>());
//!
//! // A failed construction leaves a `Strong` variant untouched.
//! let failed = s.try_emplace_with(|| "x".parse::<bool>().map(|_| String::new()));
//! assert!(failed.is_err());
//! assert_eq!(*s.value::<i64, _>(), 42);
//! ```
//!
//! # Alternatives and positions
//!
//! `L` is a tuple of 1 to 8 types. Generic methods take the alternative `T`
//! and its position `I`; the position is inferred unless `T` appears more
//! than once, in which case it is spelled out with [`I0`]..[`I7`].
//!
//! # Policies
//!
//! | Policy | Alias | Failed transition leaves |
//! |--------|-------|--------------------------|
//! | [`Strong`] | [`Variant<L>`] | the old value |
//! | [`EmptyOnFailure`] | [`NullableVariant<L>`] | an empty variant |
//! | [`Fallback`] | [`FallbackVariant<L>`] | `Default` of the first alternative |
//!
//! Policies are type parameters; the choice is static.
//!
//! # Checks
//!
//! Accessing an alternative that is not held is a memory-safety precondition
//! and is checked in every build. Logic preconditions (e.g. emplacing into a
//! full [`TaggedUnion`]) are debug prechecks; see `tessera-precheck` for the
//! `always-check` and `trusted` features.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for `Optional` |
//! | `always-check` | keep debug prechecks in release builds |
//! | `trusted` | compile debug prechecks out |

#![warn(missing_docs)]

mod index;
mod list;
mod nullvar;
mod optional;
mod policy;
pub mod prelude;
#[cfg(feature = "serde")]
mod serde_impl;
mod tagged_union;
mod variant;
mod visitor;

pub use index::{Here, I0, I1, I2, I3, I4, I5, I6, I7, Index, There};
#[doc(hidden)]
pub use list::{
    CloneList, DebugList, DefaultFirst, EqList, HashList, OrdList, PartialEqList, PartialOrdList,
    VisitList, VisitMutList,
};
pub use list::{Member, TypeList};
pub use nullvar::{NULLVAR, Nullvar};
pub use optional::{Optional, OptionalRef};
pub use policy::{EmptyOnFailure, Fallback, NullablePolicy, Strong, VariantPolicy};
pub use tagged_union::TaggedUnion;
pub use variant::{FallbackVariant, NullableVariant, Variant};
pub use visitor::{IncompleteVisitor, Visit, VisitMut, Visitor};
