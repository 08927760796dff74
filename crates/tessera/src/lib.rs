//! # tessera
//!
//! Wrapper types that carry their invariants in the type.
//!
//! This crate re-exports the workspace members:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`precheck`] | `tessera-precheck` | contract checks for programming errors |
//! | [`constrained`] | `tessera-constrained` | values that always satisfy a constraint |
//! | [`variant`] | `tessera-variant` | tagged unions, variants, optionals |
//!
//! ```
//! use tessera::prelude::*;
//!
//! type Percent = ClampedValue<u8, Const<0>, Const<100>>;
//! type Reading = Variant<(Percent, String)>;
//!
//! let mut r = Reading::new(Percent::new(250));
//! assert_eq!(**r.value::<Percent, _>(), 100);
//!
//! r.emplace("sensor offline".to_owned());
//! assert!(r.holds::<String, _>());
//! ```

#![forbid(unsafe_code)]

pub use tessera_constrained as constrained;
pub use tessera_precheck as precheck;
pub use tessera_variant as variant;

pub mod prelude {
    //! Everything from the member preludes, plus the precheck entry points.

    pub use tessera_constrained::prelude::*;
    pub use tessera_precheck::{PrecheckMode, check, debug_check, debug_precheck, precheck};
    pub use tessera_variant::prelude::*;
}
