//! Visitors over the held alternative.
//!
//! A visitor implements [`Visitor`] once, for the empty case and the output
//! type, and [`Visit<T>`] (or [`VisitMut<T>`]) once per alternative.
//! [`Variant::visit`](crate::Variant::visit) requires an impl for every
//! alternative of the list, so a missing case is a compile error:
//!
//! ```compile_fail
//! use tessera_variant::{Variant, Visit, Visitor};
//!
//! struct Describe;
//!
//! impl Visitor for Describe {
//!     type Output = &'static str;
//!     fn visit_empty(&mut self) -> &'static str { "empty" }
//! }
//!
//! impl Visit<i32> for Describe {
//!     fn visit(&mut self, _: &i32) -> &'static str { "int" }
//! }
//!
//! let v = Variant::<(i32, String)>::new(1_i32);
//! v.visit(&mut Describe); // no `Visit<String>` impl
//! ```
//!
//! Visitors that only care about some alternatives opt in explicitly with
//! [`IncompleteVisitor`] and [`skip_alternatives!`](crate::skip_alternatives),
//! which fills in no-op impls for the rest.

/// Output type and empty-case handling shared by all `Visit` impls.
pub trait Visitor {
    /// Value produced by every visit method.
    type Output;

    /// Called when the variant is empty.
    fn visit_empty(&mut self) -> Self::Output;
}

/// Visits an alternative of type `T` by reference.
pub trait Visit<T: ?Sized>: Visitor {
    /// Called when the variant holds a `T`.
    fn visit(&mut self, value: &T) -> Self::Output;
}

/// Visits an alternative of type `T` by mutable reference.
pub trait VisitMut<T: ?Sized>: Visitor {
    /// Called when the variant holds a `T`.
    fn visit_mut(&mut self, value: &mut T) -> Self::Output;
}

/// Marks a visitor that ignores some alternatives.
///
/// Required by [`skip_alternatives!`](crate::skip_alternatives). Skipped
/// alternatives and the empty case produce `()`.
pub trait IncompleteVisitor: Visitor<Output = ()> {}

/// Generates no-op [`Visit`] and [`VisitMut`] impls for alternatives an
/// [`IncompleteVisitor`] does not handle.
///
/// ```
/// use tessera_variant::{skip_alternatives, IncompleteVisitor, Variant, Visit, Visitor};
///
/// #[derive(Default)]
/// struct SumInts(i64);
///
/// impl Visitor for SumInts {
///     type Output = ();
///     fn visit_empty(&mut self) {}
/// }
/// impl IncompleteVisitor for SumInts {}
///
/// impl Visit<i64> for SumInts {
///     fn visit(&mut self, value: &i64) {
///         self.0 += value;
///     }
/// }
///
/// skip_alternatives!(SumInts => String, bool);
///
/// let mut sum = SumInts::default();
/// Variant::<(i64, String, bool)>::new(4_i64).visit(&mut sum);
/// Variant::<(i64, String, bool)>::new(true).visit(&mut sum);
/// assert_eq!(sum.0, 4);
/// ```
#[macro_export]
macro_rules! skip_alternatives {
    ($visitor:ty => $($skipped:ty),+ $(,)?) => {
        $(
            impl $crate::Visit<$skipped> for $visitor
            where
                $visitor: $crate::IncompleteVisitor,
            {
                #[inline]
                fn visit(&mut self, _value: &$skipped) {}
            }

            impl $crate::VisitMut<$skipped> for $visitor
            where
                $visitor: $crate::IncompleteVisitor,
            {
                #[inline]
                fn visit_mut(&mut self, _value: &mut $skipped) {}
            }
        )+
    };
}
