//! [`TaggedUnion`]: uninitialized storage for one alternative of a type list
//! plus a discriminant.
//!
//! This is the only module in the crate that touches raw storage. The
//! union does not manage lifetimes: it never destroys what it holds on its
//! own, and [`emplace`](TaggedUnion::emplace) never destroys a previous
//! value. Callers pair every `emplace` with a `destroy` or `take`.
//!
//! Wrong-alternative access is checked with the always-on
//! [`check`](tessera_precheck::check), since it would otherwise read the
//! storage as the wrong type. The unchecked accessors are `unsafe`.
//!
//! ```
//! use tessera_variant::TaggedUnion;
//!
//! let mut u = TaggedUnion::<(u32, String)>::new();
//! u.emplace::<String, _>("hi".to_owned());
//! assert_eq!(u.value::<String, _>(), "hi");
//! u.destroy::<String, _>();
//! assert!(!u.has_value());
//! ```

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr;

use tessera_precheck::{check, debug_precheck};

use crate::list::{Member, TypeList};

const WRONG_ALTERNATIVE: &str = "tagged union does not hold the requested alternative";

/// Storage for at most one alternative of `L`.
pub struct TaggedUnion<L: TypeList> {
    storage: MaybeUninit<L::Storage>,
    discriminant: usize,
    _marker: PhantomData<L>,
}

impl<L: TypeList> TaggedUnion<L> {
    /// Discriminant of an empty union. One past the last alternative.
    pub const EMPTY: usize = L::LEN;

    /// Creates an empty union.
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            discriminant: L::LEN,
            _marker: PhantomData,
        }
    }

    /// Index of the held alternative, or [`EMPTY`](Self::EMPTY).
    #[inline]
    pub const fn discriminant(&self) -> usize {
        self.discriminant
    }

    /// Returns `true` if an alternative is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.discriminant != L::LEN
    }

    /// Returns `true` if the alternative `T` at position `I` is held.
    #[inline]
    pub fn holds<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.discriminant == <L as Member<T, I>>::INDEX
    }

    #[inline(always)]
    fn slot<T, I>(&self) -> *const T
    where
        L: Member<T, I>,
    {
        self.storage.as_ptr().cast::<T>()
    }

    #[inline(always)]
    fn slot_mut<T, I>(&mut self) -> *mut T
    where
        L: Member<T, I>,
    {
        self.storage.as_mut_ptr().cast::<T>()
    }

    /// Stores `value` as the alternative `T`.
    ///
    /// The union must be empty (debug precheck). Emplacing into a full union
    /// leaks the previous value.
    #[track_caller]
    pub fn emplace<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        debug_precheck!(
            !self.has_value(),
            "tagged union already holds alternative {}",
            self.discriminant
        );
        // SAFETY: Writing into the storage as `T`.
        // - `Member<T, I>` guarantees `T` is a field of `L::Storage`
        // - `L::Storage` is `#[repr(C)]`, so every field starts at offset 0
        //   and the storage is large and aligned enough for `T`
        // - `ptr::write` does not read or drop the old contents
        unsafe { self.slot_mut::<T, I>().write(value) };
        self.discriminant = <L as Member<T, I>>::INDEX;
    }

    /// Destroys the held alternative `T`. The union is empty afterwards,
    /// even if `T`'s destructor panics.
    #[track_caller]
    pub fn destroy<T, I>(&mut self)
    where
        L: Member<T, I>,
    {
        check(self.holds::<T, I>(), WRONG_ALTERNATIVE);
        self.discriminant = L::LEN;
        // SAFETY: Dropping the held `T` in place.
        // - discriminant was `INDEX`, so the storage holds an initialized `T`
        // - discriminant is reset first, so the value is never dropped twice
        unsafe { ptr::drop_in_place(self.slot_mut::<T, I>()) };
    }

    /// Moves the held alternative `T` out, leaving the union empty.
    #[track_caller]
    pub fn take<T, I>(&mut self) -> T
    where
        L: Member<T, I>,
    {
        check(self.holds::<T, I>(), WRONG_ALTERNATIVE);
        self.discriminant = L::LEN;
        // SAFETY: Reading the held `T` out of storage.
        // - discriminant was `INDEX`, so the storage holds an initialized `T`
        // - discriminant is now `EMPTY`, so ownership moves to the caller
        unsafe { self.slot::<T, I>().read() }
    }

    /// Returns the held alternative `T`.
    #[track_caller]
    pub fn value<T, I>(&self) -> &T
    where
        L: Member<T, I>,
    {
        check(self.holds::<T, I>(), WRONG_ALTERNATIVE);
        // SAFETY: checked above that `T` is the held alternative
        unsafe { self.value_unchecked::<T, I>() }
    }

    /// Returns the held alternative `T` mutably.
    #[track_caller]
    pub fn value_mut<T, I>(&mut self) -> &mut T
    where
        L: Member<T, I>,
    {
        check(self.holds::<T, I>(), WRONG_ALTERNATIVE);
        // SAFETY: checked above that `T` is the held alternative
        unsafe { self.value_unchecked_mut::<T, I>() }
    }

    /// Returns the alternative `T` if it is held.
    #[inline]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        L: Member<T, I>,
    {
        if self.holds::<T, I>() {
            // SAFETY: `T` is the held alternative
            Some(unsafe { self.value_unchecked::<T, I>() })
        } else {
            None
        }
    }

    /// Returns the alternative `T` mutably if it is held.
    #[inline]
    pub fn get_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        if self.holds::<T, I>() {
            // SAFETY: `T` is the held alternative
            Some(unsafe { self.value_unchecked_mut::<T, I>() })
        } else {
            None
        }
    }

    /// Returns the held alternative `T` without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The union must hold the alternative `T` at position `I`.
    #[inline]
    #[track_caller]
    pub unsafe fn value_unchecked<T, I>(&self) -> &T
    where
        L: Member<T, I>,
    {
        debug_precheck!(self.holds::<T, I>(), "{}", WRONG_ALTERNATIVE);
        // SAFETY: Creating a shared reference to the held `T`.
        // - caller guarantees `T` is held, so the storage is initialized
        // - layout argument as in `emplace`
        // - lifetime tied to `&self`
        unsafe { &*self.slot::<T, I>() }
    }

    /// Returns the held alternative `T` mutably without checking the
    /// discriminant.
    ///
    /// # Safety
    ///
    /// The union must hold the alternative `T` at position `I`.
    #[inline]
    #[track_caller]
    pub unsafe fn value_unchecked_mut<T, I>(&mut self) -> &mut T
    where
        L: Member<T, I>,
    {
        debug_precheck!(self.holds::<T, I>(), "{}", WRONG_ALTERNATIVE);
        // SAFETY: Creating a unique reference to the held `T`.
        // - caller guarantees `T` is held, so the storage is initialized
        // - `&mut self` guarantees exclusive access
        unsafe { &mut *self.slot_mut::<T, I>() }
    }

    /// Destroys whatever alternative is held. No-op when empty.
    pub fn destroy_active(&mut self) {
        L::destroy_active(self);
    }
}

impl<L: TypeList> Default for TaggedUnion<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TypeList> Drop for TaggedUnion<L> {
    fn drop(&mut self) {
        // A union dropped during unwinding may legitimately still hold a
        // value; it is leaked.
        if !std::thread::panicking() {
            debug_precheck!(
                !self.has_value(),
                "tagged union dropped while holding `{}`",
                L::alternative_name(self.discriminant)
            );
        }
    }
}

impl<L: TypeList> fmt::Debug for TaggedUnion<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedUnion")
            .field("discriminant", &self.discriminant)
            .field("alternative", &L::alternative_name(self.discriminant))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{I0, I1, I2};
    use std::rc::Rc;

    type Three = (i32, String, Rc<()>);

    #[test]
    fn starts_empty() {
        let u = TaggedUnion::<Three>::new();
        assert!(!u.has_value());
        assert_eq!(u.discriminant(), TaggedUnion::<Three>::EMPTY);
        assert_eq!(TaggedUnion::<Three>::EMPTY, 3);
    }

    #[test]
    fn emplace_value_destroy_round_trip() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<String, I1>("tessera".into());
        assert_eq!(u.discriminant(), 1);
        assert!(u.holds::<String, I1>());
        assert!(!u.holds::<i32, I0>());
        assert_eq!(u.value::<String, I1>(), "tessera");

        u.value_mut::<String, I1>().push('!');
        assert_eq!(u.get::<String, I1>().map(String::as_str), Some("tessera!"));
        assert!(u.get::<i32, I0>().is_none());

        u.destroy::<String, I1>();
        assert!(!u.has_value());
    }

    #[test]
    fn destroy_runs_destructor() {
        let shared = Rc::new(());
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<Rc<()>, I2>(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);
        u.destroy_active();
        assert_eq!(Rc::strong_count(&shared), 1);
        assert!(!u.has_value());
    }

    #[test]
    fn take_moves_out() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, _>(7);
        assert_eq!(u.take::<i32, _>(), 7);
        assert!(!u.has_value());
    }

    #[test]
    fn duplicate_types_need_explicit_index() {
        let mut u = TaggedUnion::<(u8, u8)>::new();
        u.emplace::<u8, I1>(3);
        assert!(u.holds::<u8, I1>());
        assert!(!u.holds::<u8, I0>());
        u.destroy::<u8, I1>();
    }

    #[test]
    #[should_panic(expected = "precheck violation: tagged union does not hold the requested alternative")]
    fn wrong_alternative_is_a_violation() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, _>(1);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = u.value::<String, _>();
        }));
        u.destroy_active();
        if let Err(payload) = result {
            std::panic::resume_unwind(payload);
        }
    }

    #[test]
    fn debug_shows_alternative() {
        let mut u = TaggedUnion::<(i32, bool)>::new();
        u.emplace::<bool, _>(true);
        assert_eq!(
            format!("{u:?}"),
            r#"TaggedUnion { discriminant: 1, alternative: "bool" }"#
        );
        u.destroy_active();
    }

    #[test]
    fn unchecked_access_reads_held_alternative() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, I0>(4);
        // SAFETY: `i32` at position 0 was just emplaced.
        unsafe { *u.value_unchecked_mut::<i32, I0>() += 1 };
        // SAFETY: as above.
        assert_eq!(unsafe { *u.value_unchecked::<i32, I0>() }, 5);
        u.destroy_active();
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "tagged union already holds alternative 0")]
    fn emplace_into_full_union_is_a_violation() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, I0>(1);
        u.emplace::<i32, I0>(2);
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "tagged union dropped while holding")]
    fn dropping_full_union_is_a_violation() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, I0>(1);
        drop(u);
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "precheck violation: tagged union does not hold the requested alternative")]
    fn unchecked_access_to_wrong_alternative_is_a_violation() {
        let mut u = TaggedUnion::<Three>::new();
        u.emplace::<i32, I0>(1);
        // Checked in debug builds before any read happens.
        let _ = unsafe { u.value_unchecked::<String, I1>() };
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "precheck violation: tagged union does not hold the requested alternative")]
    fn unchecked_mut_access_on_empty_union_is_a_violation() {
        let mut u = TaggedUnion::<Three>::new();
        let _ = unsafe { u.value_unchecked_mut::<i32, I0>() };
    }
}
