//! Closed type lists.
//!
//! A tuple `(A, B, ...)` of 1 to 8 types is a [`TypeList`]. Each position is
//! addressed through [`Member<T, I>`], where `I` is a type-level
//! [`Index`](crate::Index).
//!
//! Besides the storage layout, the list implements one dispatch trait per
//! capability (clone, compare, hash, debug, visit). Each dispatches on the
//! runtime discriminant and forwards to the matching alternative through the
//! typed [`TaggedUnion`] API. The traits are implemented only when every
//! alternative has the capability, so e.g. `Variant<(i32, f32)>` is
//! `PartialOrd` but not `Ord`.

#![allow(unsafe_code)]

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::ManuallyDrop;

use crate::index::{Here, Index, There};
use crate::policy::VariantPolicy;
use crate::tagged_union::TaggedUnion;
use crate::visitor::{Visit, VisitMut, Visitor};

mod sealed {
    pub trait Sealed {}
}

/// A closed list of alternatives, implemented for tuples of arity 1 to 8.
pub trait TypeList: Sized + sealed::Sealed {
    /// Number of alternatives.
    const LEN: usize;

    /// Layout large and aligned enough for every alternative.
    #[doc(hidden)]
    type Storage;

    /// Destroys the held alternative, if any.
    #[doc(hidden)]
    fn destroy_active(union: &mut TaggedUnion<Self>);

    /// Type name of the alternative at `discriminant`, or `"Nullvar"`.
    fn alternative_name(discriminant: usize) -> &'static str;
}

/// `T` is the alternative at position `I` of the list.
///
/// # Safety
///
/// `Self::Storage` must be a `#[repr(C)]` union with a `ManuallyDrop<T>`
/// field, and `INDEX` must be `I::VALUE`. Sealed: implemented only for the
/// tuple lists of this crate.
pub unsafe trait Member<T, I>: TypeList {
    /// Discriminant of the alternative.
    const INDEX: usize;
}

/// Every alternative is `Clone`.
#[doc(hidden)]
pub trait CloneList: TypeList {
    /// Clones the held alternative into a fresh union.
    fn clone_active(src: &TaggedUnion<Self>) -> TaggedUnion<Self>;

    /// Makes `dst` a copy of the non-empty `src`. Reuses `clone_from` when
    /// both hold the same alternative, otherwise goes through `P`.
    fn clone_into<P: VariantPolicy<Self>>(dst: &mut TaggedUnion<Self>, src: &TaggedUnion<Self>);
}

/// Every alternative is `PartialEq`.
#[doc(hidden)]
pub trait PartialEqList: TypeList {
    /// Compares the held alternatives. Both unions hold the same one.
    fn eq_active(a: &TaggedUnion<Self>, b: &TaggedUnion<Self>) -> bool;
}

/// Every alternative is `Eq`.
#[doc(hidden)]
pub trait EqList: PartialEqList {}

/// Every alternative is `PartialOrd`.
#[doc(hidden)]
pub trait PartialOrdList: PartialEqList {
    /// Orders the held alternatives. Both unions hold the same one.
    fn partial_cmp_active(a: &TaggedUnion<Self>, b: &TaggedUnion<Self>) -> Option<Ordering>;
}

/// Every alternative is `Ord`.
#[doc(hidden)]
pub trait OrdList: PartialOrdList + EqList {
    /// Orders the held alternatives. Both unions hold the same one.
    fn cmp_active(a: &TaggedUnion<Self>, b: &TaggedUnion<Self>) -> Ordering;
}

/// Every alternative is `Hash`.
#[doc(hidden)]
pub trait HashList: TypeList {
    /// Hashes the held alternative, if any.
    fn hash_active<S: Hasher>(union: &TaggedUnion<Self>, state: &mut S);
}

/// Every alternative is `Debug`.
#[doc(hidden)]
pub trait DebugList: TypeList {
    /// Formats the held alternative, or `Nullvar`.
    fn fmt_active(union: &TaggedUnion<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `V` visits every alternative.
#[doc(hidden)]
pub trait VisitList<V: Visitor>: TypeList {
    /// Calls the visitor method matching the held alternative.
    fn visit_active(union: &TaggedUnion<Self>, visitor: &mut V) -> V::Output;
}

/// `V` visits every alternative mutably.
#[doc(hidden)]
pub trait VisitMutList<V: Visitor>: TypeList {
    /// Calls the visitor method matching the held alternative.
    fn visit_active_mut(union: &mut TaggedUnion<Self>, visitor: &mut V) -> V::Output;
}

/// The first alternative is `Default`.
#[doc(hidden)]
pub trait DefaultFirst: TypeList {
    /// Emplaces `Default::default()` of the first alternative into an empty
    /// union.
    fn emplace_default_first(union: &mut TaggedUnion<Self>);
}

#[inline(always)]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Implements every list trait for one tuple arity.
///
/// Alternatives are first paired with their type-level index, then the
/// parameter list is passed around as a single bracketed `tt` so it can be
/// expanded inside the per-alternative repetitions.
macro_rules! type_list {
    ($union:ident: $($T:ident),+) => {
        type_list!(@enumerate $union [$($T),+] [] Here; $($T)+);
    };

    (@enumerate $union:ident $all:tt [$($done:tt)*] $idx:ty; $head:ident $($rest:ident)*) => {
        type_list!(@enumerate $union $all [$($done)* ($head, $idx)] There<$idx>; $($rest)*);
    };

    (@enumerate $union:ident $all:tt [$($done:tt)*] $idx:ty;) => {
        type_list!(@storage $union $all);
        type_list!(@list $union $all $($done)*);
        $(type_list!(@member $all $done);)*
    };

    (@storage $union:ident [$($T:ident),+]) => {
        #[doc(hidden)]
        #[repr(C)]
        #[allow(non_snake_case, dead_code)]
        pub union $union<$($T),+> {
            $($T: ManuallyDrop<$T>,)+
        }
    };

    (@member [$($all:ident),+] ($T:ident, $I:ty)) => {
        // SAFETY: `$T` is a field of the `#[repr(C)]` storage union and
        // `INDEX` is the position it was enumerated at.
        unsafe impl<$($all),+> Member<$T, $I> for ($($all,)+) {
            const INDEX: usize = <$I as Index>::VALUE;
        }
    };

    (@list $union:ident [$first:ident $(, $rest:ident)*] $(($T:ident, $I:ty))+) => {
        impl<$first $(, $rest)*> sealed::Sealed for ($first, $($rest,)*) {}

        impl<$first $(, $rest)*> TypeList for ($first, $($rest,)*) {
            const LEN: usize = [$(stringify!($T)),+].len();

            type Storage = $union<$first $(, $rest)*>;

            fn destroy_active(union: &mut TaggedUnion<Self>) {
                $(
                    if union.holds::<$T, $I>() {
                        union.destroy::<$T, $I>();
                        return;
                    }
                )+
            }

            fn alternative_name(discriminant: usize) -> &'static str {
                $(
                    if discriminant == <$I as Index>::VALUE {
                        return std::any::type_name::<$T>();
                    }
                )+
                "Nullvar"
            }
        }

        impl<$first: Clone $(, $rest: Clone)*> CloneList for ($first, $($rest,)*) {
            fn clone_active(src: &TaggedUnion<Self>) -> TaggedUnion<Self> {
                let mut out = TaggedUnion::new();
                $(
                    if let Some(value) = src.get::<$T, $I>() {
                        out.emplace::<$T, $I>(value.clone());
                        return out;
                    }
                )+
                out
            }

            fn clone_into<P: VariantPolicy<Self>>(
                dst: &mut TaggedUnion<Self>,
                src: &TaggedUnion<Self>,
            ) {
                $(
                    if let Some(value) = src.get::<$T, $I>() {
                        if let Some(slot) = dst.get_mut::<$T, $I>() {
                            slot.clone_from(value);
                        } else {
                            into_ok(P::change_value::<$T, $I, Infallible, _>(dst, || {
                                Ok(value.clone())
                            }));
                        }
                        return;
                    }
                )+
            }
        }

        impl<$first: PartialEq $(, $rest: PartialEq)*> PartialEqList for ($first, $($rest,)*) {
            fn eq_active(a: &TaggedUnion<Self>, b: &TaggedUnion<Self>) -> bool {
                $(
                    if let (Some(a), Some(b)) = (a.get::<$T, $I>(), b.get::<$T, $I>()) {
                        return a == b;
                    }
                )+
                false
            }
        }

        impl<$first: Eq $(, $rest: Eq)*> EqList for ($first, $($rest,)*) {}

        impl<$first: PartialOrd $(, $rest: PartialOrd)*> PartialOrdList for ($first, $($rest,)*) {
            fn partial_cmp_active(
                a: &TaggedUnion<Self>,
                b: &TaggedUnion<Self>,
            ) -> Option<Ordering> {
                $(
                    if let (Some(a), Some(b)) = (a.get::<$T, $I>(), b.get::<$T, $I>()) {
                        return a.partial_cmp(b);
                    }
                )+
                None
            }
        }

        impl<$first: Ord $(, $rest: Ord)*> OrdList for ($first, $($rest,)*) {
            fn cmp_active(a: &TaggedUnion<Self>, b: &TaggedUnion<Self>) -> Ordering {
                $(
                    if let (Some(a), Some(b)) = (a.get::<$T, $I>(), b.get::<$T, $I>()) {
                        return a.cmp(b);
                    }
                )+
                Ordering::Equal
            }
        }

        impl<$first: Hash $(, $rest: Hash)*> HashList for ($first, $($rest,)*) {
            fn hash_active<S: Hasher>(union: &TaggedUnion<Self>, state: &mut S) {
                $(
                    if let Some(value) = union.get::<$T, $I>() {
                        value.hash(state);
                        return;
                    }
                )+
            }
        }

        impl<$first: fmt::Debug $(, $rest: fmt::Debug)*> DebugList for ($first, $($rest,)*) {
            fn fmt_active(union: &TaggedUnion<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $(
                    if let Some(value) = union.get::<$T, $I>() {
                        return fmt::Debug::fmt(value, f);
                    }
                )+
                f.write_str("Nullvar")
            }
        }

        impl<Vis, $first $(, $rest)*> VisitList<Vis> for ($first, $($rest,)*)
        where
            Vis: Visitor $(+ Visit<$T>)+,
        {
            fn visit_active(union: &TaggedUnion<Self>, visitor: &mut Vis) -> Vis::Output {
                $(
                    if let Some(value) = union.get::<$T, $I>() {
                        return <Vis as Visit<$T>>::visit(visitor, value);
                    }
                )+
                visitor.visit_empty()
            }
        }

        impl<Vis, $first $(, $rest)*> VisitMutList<Vis> for ($first, $($rest,)*)
        where
            Vis: Visitor $(+ VisitMut<$T>)+,
        {
            fn visit_active_mut(union: &mut TaggedUnion<Self>, visitor: &mut Vis) -> Vis::Output {
                $(
                    if let Some(value) = union.get_mut::<$T, $I>() {
                        return <Vis as VisitMut<$T>>::visit_mut(visitor, value);
                    }
                )+
                visitor.visit_empty()
            }
        }

        impl<$first: Default $(, $rest)*> DefaultFirst for ($first, $($rest,)*) {
            fn emplace_default_first(union: &mut TaggedUnion<Self>) {
                union.emplace::<$first, Here>($first::default());
            }
        }
    };
}

type_list!(Union1: A);
type_list!(Union2: A, B);
type_list!(Union3: A, B, C);
type_list!(Union4: A, B, C, D);
type_list!(Union5: A, B, C, D, E);
type_list!(Union6: A, B, C, D, E, F);
type_list!(Union7: A, B, C, D, E, F, G);
type_list!(Union8: A, B, C, D, E, F, G, H);
