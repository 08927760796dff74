//! Recovery policies for type-changing variant transitions.
//!
//! Changing the held alternative means destroying the old value and
//! constructing the new one. If construction fails (the constructor returns
//! `Err` or panics), the policy decides what the variant looks like
//! afterwards:
//!
//! | Policy | Order | After a failed construction | Empty state |
//! |--------|-------|-----------------------------|-------------|
//! | [`Strong`] | construct, then destroy | unchanged | never |
//! | [`EmptyOnFailure`] | destroy, then construct | empty | allowed |
//! | [`Fallback`] | destroy, then construct | first alternative's `Default` | never |
//!
//! `Strong` keeps the old value alive while the new one is built, at the
//! cost of one extra move. The other two never hold both values at once.
//!
//! The policy is a type parameter, so the choice is static and costs nothing
//! at runtime.

use crate::list::{DefaultFirst, Member, TypeList};
use crate::tagged_union::TaggedUnion;

/// Strategy for replacing the held alternative of a union.
pub trait VariantPolicy<L: TypeList> {
    /// Whether a variant under this policy can be empty.
    const ALLOW_EMPTY: bool;

    /// Name used in log events.
    const NAME: &'static str;

    /// Replaces whatever `union` holds by the result of `make`.
    ///
    /// On `Err` (or a panic inside `make`), the union is left in the state
    /// the policy documents, and the error is returned unchanged.
    fn change_value<T, I, E, F>(union: &mut TaggedUnion<L>, make: F) -> Result<(), E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>;
}

/// Policies under which a variant may be empty.
pub trait NullablePolicy {}

fn log_transition<L: TypeList>(policy: &'static str, from: usize, to: usize) {
    tracing::trace!(
        policy,
        from = L::alternative_name(from),
        to = L::alternative_name(to),
        "variant alternative changed"
    );
}

// ============================================================================
// STRONG
// ============================================================================

/// Strong guarantee: a failed transition leaves the variant unchanged.
///
/// The new value is built into a temporary first. Only when that succeeds is
/// the old alternative destroyed and the temporary moved in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Strong;

impl<L: TypeList> VariantPolicy<L> for Strong {
    const ALLOW_EMPTY: bool = false;
    const NAME: &'static str = "strong";

    fn change_value<T, I, E, F>(union: &mut TaggedUnion<L>, make: F) -> Result<(), E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        let value = match make() {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(
                    policy = <Self as VariantPolicy<L>>::NAME,
                    held = L::alternative_name(union.discriminant()),
                    "construction failed, variant left unchanged"
                );
                return Err(err);
            }
        };
        let from = union.discriminant();
        union.destroy_active();
        union.emplace::<T, I>(value);
        log_transition::<L>(<Self as VariantPolicy<L>>::NAME, from, <L as Member<T, I>>::INDEX);
        Ok(())
    }
}

// ============================================================================
// EMPTY ON FAILURE
// ============================================================================

/// Weak guarantee: the old alternative is destroyed first, and a failed
/// construction leaves the variant empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyOnFailure;

impl NullablePolicy for EmptyOnFailure {}

impl<L: TypeList> VariantPolicy<L> for EmptyOnFailure {
    const ALLOW_EMPTY: bool = true;
    const NAME: &'static str = "empty_on_failure";

    fn change_value<T, I, E, F>(union: &mut TaggedUnion<L>, make: F) -> Result<(), E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        let from = union.discriminant();
        union.destroy_active();
        match make() {
            Ok(value) => {
                union.emplace::<T, I>(value);
                log_transition::<L>(<Self as VariantPolicy<L>>::NAME, from, <L as Member<T, I>>::INDEX);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(policy = <Self as VariantPolicy<L>>::NAME, "construction failed, variant left empty");
                Err(err)
            }
        }
    }
}

// ============================================================================
// FALLBACK
// ============================================================================

/// The old alternative is destroyed first. A failed construction installs
/// `Default::default()` of the first alternative, so the variant is never
/// empty.
///
/// Requires the first alternative to be `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fallback;

/// Installs the fallback value unless disarmed. Covers panics in `make`.
struct FallbackGuard<'a, L: DefaultFirst> {
    union: Option<&'a mut TaggedUnion<L>>,
}

impl<'a, L: DefaultFirst> FallbackGuard<'a, L> {
    fn disarm(mut self) -> Option<&'a mut TaggedUnion<L>> {
        self.union.take()
    }
}

impl<L: DefaultFirst> Drop for FallbackGuard<'_, L> {
    fn drop(&mut self) {
        if let Some(union) = self.union.take() {
            L::emplace_default_first(union);
            tracing::debug!(
                policy = <Fallback as VariantPolicy<L>>::NAME,
                installed = L::alternative_name(union.discriminant()),
                "construction failed, fallback installed"
            );
        }
    }
}

impl<L: DefaultFirst> VariantPolicy<L> for Fallback {
    const ALLOW_EMPTY: bool = false;
    const NAME: &'static str = "fallback";

    fn change_value<T, I, E, F>(union: &mut TaggedUnion<L>, make: F) -> Result<(), E>
    where
        L: Member<T, I>,
        F: FnOnce() -> Result<T, E>,
    {
        let from = union.discriminant();
        union.destroy_active();
        let guard = FallbackGuard { union: Some(union) };
        let value = make()?;
        if let Some(union) = guard.disarm() {
            union.emplace::<T, I>(value);
            log_transition::<L>(<Self as VariantPolicy<L>>::NAME, from, <L as Member<T, I>>::INDEX);
        }
        Ok(())
    }
}
