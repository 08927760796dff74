/// The empty state of a nullable variant or [`Optional`](crate::Optional).
///
/// Compares less than any held value, and equal to an empty variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullvar;

/// Shorthand constant for [`Nullvar`].
pub const NULLVAR: Nullvar = Nullvar;
