//! Type-level positions in a type list.
//!
//! Positions are Peano numbers: [`Here`] is the first alternative and
//! `There<I>` the one after `I`. Because the position is a type, the
//! compiler infers it from the alternative at call sites
//! (`v.get::<String, _>()`), and two alternatives of the same type stay
//! addressable by spelling the index out.

use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// A type-level position.
pub trait Index: sealed::Sealed {
    /// The position as a number.
    const VALUE: usize;
}

/// Position 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Here;

/// The position after `I`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct There<I>(PhantomData<I>);

impl sealed::Sealed for Here {}
impl<I: Index> sealed::Sealed for There<I> {}

impl Index for Here {
    const VALUE: usize = 0;
}

impl<I: Index> Index for There<I> {
    const VALUE: usize = 1 + I::VALUE;
}

/// Position 0.
pub type I0 = Here;
/// Position 1.
pub type I1 = There<I0>;
/// Position 2.
pub type I2 = There<I1>;
/// Position 3.
pub type I3 = There<I2>;
/// Position 4.
pub type I4 = There<I3>;
/// Position 5.
pub type I5 = There<I4>;
/// Position 6.
pub type I6 = There<I5>;
/// Position 7.
pub type I7 = There<I6>;
