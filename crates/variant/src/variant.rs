//! [`Variant`]: a [`TaggedUnion`] that owns its value, with a
//! [`VariantPolicy`] governing type-changing transitions.
//!
//! ```
//! use tessera_variant::{NullableVariant, Variant, NULLVAR};
//!
//! let mut v = Variant::<(i32, String)>::new(5_i32);
//! assert!(v.holds::<i32, _>());
//!
//! v.emplace("five".to_owned());
//! assert_eq!(v.value::<String, _>(), "five");
//!
//! let mut n = NullableVariant::<(i32, String)>::new(1_i32);
//! n.reset();
//! assert_eq!(n, NULLVAR);
//! ```
//!
//! Only nullable policies can produce an empty variant:
//!
//! ```compile_fail
//! use tessera_variant::Variant;
//!
//! let v = Variant::<(i32, String)>::empty();
//! ```
//!
//! # Ordering
//!
//! Variants order by the held alternative's position first and by value
//! second. The empty state sorts before every alternative. A `Variant<(i32,
//! f32)>` holding `100` is less than one holding `0.1`, because `i32` is
//! declared first.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tessera_precheck::debug_precheck;

use crate::list::{
    CloneList, DebugList, EqList, HashList, Member, OrdList, PartialEqList, PartialOrdList,
    TypeList, VisitList, VisitMutList, into_ok,
};
use crate::nullvar::Nullvar;
use crate::policy::{EmptyOnFailure, Fallback, NullablePolicy, Strong, VariantPolicy};
use crate::tagged_union::TaggedUnion;
use crate::visitor::Visitor;

/// Holds exactly one alternative of `L` (or nothing, for nullable policies).
///
/// Accessing an alternative that is not held is a precheck violation, even
/// in release builds. Use [`get`](Self::get) to test and access at once.
pub struct Variant<L: TypeList, P = Strong> {
    union: TaggedUnion<L>,
    _policy: PhantomData<fn() -> P>,
}

/// A variant that may be empty; failed transitions leave it empty.
pub type NullableVariant<L> = Variant<L, EmptyOnFailure>;

/// A variant whose failed transitions fall back to the first alternative's
/// `Default`.
pub type FallbackVariant<L> = Variant<L, Fallback>;

impl<L: TypeList, P: VariantPolicy<L>> Variant<L, P> {
    const fn from_union(union: TaggedUnion<L>) -> Self {
        Self {
            union,
            _policy: PhantomData,
        }
    }

    /// Creates a variant holding `value`.
    pub fn new<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        let mut union = TaggedUnion::new();
        union.emplace::<T, I>(value);
        Self::from_union(union)
    }

    /// Creates a variant from a fallible constructor.
    ///
    /// # Errors
    ///
    /// Returns the error of `make`. No variant is created.
    pub fn try_new_with<T, I, E, F>(make: F) -> Result<Self, E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        Ok(Self::new::<T, I>(make()?))
    }

    /// Returns `true` if an alternative is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.union.has_value()
    }

    /// Returns `true` if no alternative is held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.union.has_value()
    }

    /// Position of the held alternative, or `L::LEN` when empty.
    #[inline]
    pub const fn discriminant(&self) -> usize {
        self.union.discriminant()
    }

    /// Returns `true` if the alternative `T` at position `I` is held.
    #[inline]
    pub fn holds<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.union.holds::<T, I>()
    }

    /// Returns the held `T`.
    ///
    /// # Panics
    ///
    /// Precheck violation if `T` is not held.
    #[track_caller]
    pub fn value<T, I>(&self) -> &T
    where
        L: Member<T, I>,
    {
        self.union.value::<T, I>()
    }

    /// Returns the held `T` mutably.
    ///
    /// # Panics
    ///
    /// Precheck violation if `T` is not held.
    #[track_caller]
    pub fn value_mut<T, I>(&mut self) -> &mut T
    where
        L: Member<T, I>,
    {
        self.union.value_mut::<T, I>()
    }

    /// Returns the held `T`, if it is held.
    #[inline]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        L: Member<T, I>,
    {
        self.union.get::<T, I>()
    }

    /// Returns the held `T` mutably, if it is held.
    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        self.union.get_mut::<T, I>()
    }

    /// Returns a copy of the held `T`, or `default` if another alternative
    /// (or nothing) is held.
    pub fn value_or<T: Clone, I>(&self, default: T) -> T
    where
        L: Member<T, I>,
    {
        self.get::<T, I>().cloned().unwrap_or(default)
    }

    /// Returns `true` if `T` is held and equal to `value`.
    pub fn equals<T: PartialEq, I>(&self, value: &T) -> bool
    where
        L: Member<T, I>,
    {
        self.get::<T, I>().is_some_and(|held| held == value)
    }

    /// Stores `value`.
    ///
    /// If `T` is already held, the old value is overwritten by assignment.
    /// Otherwise the change goes through the policy. Moving `value` in
    /// cannot fail, so every policy behaves the same here.
    pub fn emplace<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        if let Some(slot) = self.union.get_mut::<T, I>() {
            *slot = value;
        } else {
            into_ok(P::change_value::<T, I, Infallible, _>(
                &mut self.union,
                || Ok(value),
            ));
            self.check_policy_state();
        }
    }

    /// Stores the result of `make`.
    ///
    /// If `T` is already held and `make` fails, the old value is untouched.
    /// Otherwise the state after a failure is the one documented by `P`.
    ///
    /// # Errors
    ///
    /// Returns the error of `make`.
    pub fn try_emplace_with<T, I, E, F>(&mut self, make: F) -> Result<(), E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        if self.union.holds::<T, I>() {
            let value = make()?;
            *self.union.value_mut::<T, I>() = value;
            Ok(())
        } else {
            let result = P::change_value::<T, I, E, F>(&mut self.union, make);
            self.check_policy_state();
            result
        }
    }

    /// A policy that does not allow empty must never leave the variant empty.
    #[track_caller]
    fn check_policy_state(&self) {
        debug_precheck!(
            P::ALLOW_EMPTY || self.union.has_value(),
            "policy `{}` left a non-nullable variant empty",
            P::NAME
        );
    }

    /// Replaces the content by `other`'s, dropping the current one.
    ///
    /// This is a move, so it cannot fail and the policy is not involved.
    pub fn assign_from(&mut self, other: Self) {
        *self = other;
    }

    /// Applies `f` to the held `T`. Other alternatives are returned as is.
    ///
    /// If `f` panics, the consumed variant is dropped without a value.
    #[must_use]
    pub fn map<T, I, F>(mut self, f: F) -> Self
    where
        L: Member<T, I>,
        F: FnOnce(T) -> T,
    {
        if self.union.holds::<T, I>() {
            let value = self.union.take::<T, I>();
            self.union.emplace::<T, I>(f(value));
        }
        self
    }

    /// Moves the held `T` out.
    ///
    /// # Panics
    ///
    /// Precheck violation if `T` is not held.
    #[track_caller]
    pub fn into_value<T, I>(mut self) -> T
    where
        L: Member<T, I>,
    {
        self.union.take::<T, I>()
    }

    /// Exchanges the contents of two variants.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Calls the method of `visitor` matching the held alternative, or
    /// [`visit_empty`](Visitor::visit_empty).
    pub fn visit<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor,
        L: VisitList<V>,
    {
        L::visit_active(&self.union, visitor)
    }

    /// Like [`visit`](Self::visit), with mutable access to the held value.
    pub fn visit_mut<V>(&mut self, visitor: &mut V) -> V::Output
    where
        V: Visitor,
        L: VisitMutList<V>,
    {
        L::visit_active_mut(&mut self.union, visitor)
    }
}

impl<L: TypeList, P> Variant<L, P> {
    /// 0 when empty, otherwise one past the discriminant.
    const fn rank(&self) -> usize {
        if self.union.has_value() {
            self.union.discriminant() + 1
        } else {
            0
        }
    }
}

impl<L: TypeList, P: VariantPolicy<L> + NullablePolicy> Variant<L, P> {
    /// Creates an empty variant.
    pub const fn empty() -> Self {
        Self::from_union(TaggedUnion::new())
    }

    /// Destroys the held alternative, if any.
    pub fn reset(&mut self) {
        self.union.destroy_active();
    }

    /// Moves the held `T` out, leaving the variant empty. Returns `None`
    /// (and leaves the variant untouched) if `T` is not held.
    pub fn take<T, I>(&mut self) -> Option<T>
    where
        L: Member<T, I>,
    {
        if self.union.holds::<T, I>() {
            Some(self.union.take::<T, I>())
        } else {
            None
        }
    }
}

impl<L: TypeList, P> Drop for Variant<L, P> {
    fn drop(&mut self) {
        self.union.destroy_active();
    }
}

impl<L: TypeList, P: VariantPolicy<L> + NullablePolicy> Default for Variant<L, P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L: TypeList, P: VariantPolicy<L> + NullablePolicy> From<Nullvar> for Variant<L, P> {
    fn from(_: Nullvar) -> Self {
        Self::empty()
    }
}

impl<L: CloneList, P: VariantPolicy<L>> Clone for Variant<L, P> {
    fn clone(&self) -> Self {
        Self::from_union(L::clone_active(&self.union))
    }

    /// Same alternative: the alternative's `clone_from`. Different
    /// alternative: a transition through `P`. Empty source: `self` is reset.
    fn clone_from(&mut self, source: &Self) {
        if source.union.has_value() {
            L::clone_into::<P>(&mut self.union, &source.union);
            self.check_policy_state();
        } else {
            self.union.destroy_active();
        }
    }
}

impl<L: PartialEqList, P> PartialEq for Variant<L, P> {
    fn eq(&self, other: &Self) -> bool {
        self.union.discriminant() == other.union.discriminant()
            && (!self.union.has_value() || L::eq_active(&self.union, &other.union))
    }
}

impl<L: EqList, P> Eq for Variant<L, P> {}

impl<L: PartialOrdList, P> PartialOrd for Variant<L, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal if self.union.has_value() => {
                L::partial_cmp_active(&self.union, &other.union)
            }
            ordering => Some(ordering),
        }
    }
}

impl<L: OrdList, P> Ord for Variant<L, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal if self.union.has_value() => L::cmp_active(&self.union, &other.union),
            ordering => ordering,
        }
    }
}

impl<L: HashList, P> Hash for Variant<L, P> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.rank().hash(state);
        L::hash_active(&self.union, state);
    }
}

impl<L: TypeList, P> PartialEq<Nullvar> for Variant<L, P> {
    fn eq(&self, _: &Nullvar) -> bool {
        !self.union.has_value()
    }
}

impl<L: TypeList, P> PartialEq<Variant<L, P>> for Nullvar {
    fn eq(&self, other: &Variant<L, P>) -> bool {
        other == self
    }
}

impl<L: TypeList, P> PartialOrd<Nullvar> for Variant<L, P> {
    fn partial_cmp(&self, _: &Nullvar) -> Option<Ordering> {
        Some(if self.union.has_value() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<L: TypeList, P> PartialOrd<Variant<L, P>> for Nullvar {
    fn partial_cmp(&self, other: &Variant<L, P>) -> Option<Ordering> {
        <Variant<L, P> as PartialOrd<Self>>::partial_cmp(other, self).map(Ordering::reverse)
    }
}

impl<L: DebugList, P> fmt::Debug for Variant<L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        L::fmt_active(&self.union, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{I0, I1};
    use std::rc::Rc;

    #[test]
    fn same_alternative_emplace_assigns() {
        let mut v = Variant::<(i32, String)>::new(1_i32);
        v.emplace(2_i32);
        assert_eq!(*v.value::<i32, _>(), 2);
        assert_eq!(v.discriminant(), 0);
    }

    #[test]
    fn drop_destroys_held_value() {
        let shared = Rc::new(());
        {
            let _v = Variant::<(Rc<()>, u8)>::new(Rc::clone(&shared));
            assert_eq!(Rc::strong_count(&shared), 2);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn take_empties_nullable_variant() {
        let mut v = NullableVariant::<(i32, String)>::new("x".to_owned());
        assert_eq!(v.take::<i32, I0>(), None);
        assert_eq!(v.take::<String, I1>().as_deref(), Some("x"));
        assert!(v.is_empty());
    }

    #[test]
    fn rank_puts_empty_first() {
        let empty = NullableVariant::<(u8, u8)>::empty();
        let first = NullableVariant::<(u8, u8)>::new::<u8, I0>(9);
        let second = NullableVariant::<(u8, u8)>::new::<u8, I1>(0);
        assert_eq!(empty.rank(), 0);
        assert!(empty < first && first < second);
    }

    #[test]
    fn map_leaves_other_alternatives() {
        let v = Variant::<(i32, String)>::new("s".to_owned()).map(|x: i32| x + 1);
        assert_eq!(v.value::<String, _>(), "s");
        let v = Variant::<(i32, String)>::new(1_i32).map(|x: i32| x + 1);
        assert_eq!(v.into_value::<i32, _>(), 2);
    }
}
