//! Macros for declaring constraints with minimal boilerplate.

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Declares a constraint: struct definition, `Constraint` implementation,
/// constructor and an optional factory function.
///
/// The quoted label after `as` becomes the diagnostic [`name`].
///
/// # Variants
///
/// **Unit constraint** (zero-sized):
/// ```
/// use tessera_constrained::{Constraint, constraint};
///
/// constraint! {
///     pub Even for u32 as "even";
///     rule(input) { input % 2 == 0 }
///     fn even();
/// }
///
/// assert!(even().is_satisfied(&4));
/// assert_eq!(Constraint::<u32>::name(&Even), "even");
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```
/// use tessera_constrained::{Constraint, constraint};
///
/// constraint! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub MaxLen { max: usize } for str as "max_len";
///     rule(self, input) { input.len() <= self.max }
///     fn max_len(max: usize);
/// }
///
/// assert!(max_len(3).is_satisfied("abc"));
/// assert!(!MaxLen::new(2).is_satisfied("abc"));
/// ```
///
/// **Generic constraint** (one type parameter; bounds must be plain
/// identifiers, import paths first):
/// ```
/// use tessera_constrained::{Constraint, constraint};
///
/// constraint! {
///     pub NotBelow<T: PartialOrd> { floor: T } for T as "not_below";
///     rule(self, input) { *input >= self.floor }
///     fn not_below(floor: T);
/// }
///
/// assert!(not_below(5).is_satisfied(&25));
/// assert!(!not_below(0.5).is_satisfied(&0.25));
/// ```
///
/// [`name`]: crate::Constraint::name
#[macro_export]
macro_rules! constraint {
    // ── Unit constraint + factory fn ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty as $label:literal;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name for $input as $label;
            rule($inp) $rule
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`].")]
        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit constraint, no factory ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty as $label:literal;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::Constraint<$input> for $name {
            #[inline]
            fn is_satisfied(&self, $inp: &$input) -> bool $rule

            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($label)
            }
        }
    };

    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty as $label:literal;
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input as $label;
            rule($self_, $inp) $rule
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`].")]
        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields, no factory ───────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty as $label:literal;
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`] from its fields.")]
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::Constraint<$input> for $name {
            #[inline]
            fn is_satisfied(&$self_, $inp: &$input) -> bool $rule

            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($label)
            }
        }
    };

    // ── Generic struct + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty as $label:literal;
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*> { $($field: $fty),+ } for $input as $label;
            rule($self_, $inp) $rule
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`].")]
        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty as $label:literal;
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[doc = concat!("Creates a [`", stringify!($name), "`] from its fields.")]
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::Constraint<$input> for $name<$gen> {
            #[inline]
            fn is_satisfied(&$self_, $inp: &$input) -> bool $rule

            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($label)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Constraint;

    constraint! {
        Positive for i64 as "positive";
        rule(input) { *input > 0 }
        fn positive();
    }

    constraint! {
        #[derive(PartialEq, Eq)]
        Prefix { prefix: String } for str as "prefix";
        rule(self, input) { input.starts_with(self.prefix.as_str()) }
        fn prefix(prefix: String);
    }

    constraint! {
        AtLeast<T: PartialOrd> { min: T } for T as "at_least";
        rule(self, input) { *input >= self.min }
        fn at_least(min: T);
    }

    #[test]
    fn unit_constraint() {
        assert!(positive().is_satisfied(&1));
        assert!(!Positive.is_satisfied(&0));
        assert_eq!(Constraint::<i64>::name(&Positive), "positive");
    }

    #[test]
    fn struct_constraint() {
        let c = prefix("tess".to_owned());
        assert_eq!(c, Prefix::new("tess".into()));
        assert!(c.is_satisfied("tessera"));
        assert!(!c.is_satisfied("mosaic"));
        assert_eq!(c.name(), "prefix");
    }

    #[test]
    fn generic_constraint() {
        assert!(at_least(3).is_satisfied(&3));
        assert!(!at_least(3.5).is_satisfied(&1.0));
    }
}
