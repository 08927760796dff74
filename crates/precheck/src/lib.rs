//! # tessera-precheck
//!
//! Contract checks for programming errors.
//!
//! A failed precheck is never a recoverable error: it means the caller broke a
//! documented precondition (wrong alternative accessed, value outside its
//! constraint under an asserting verifier, ...). The facility logs the
//! violation through `tracing` and then panics, or aborts the process if the
//! thread is already unwinding.
//!
//! There are two levels:
//!
//! | Level | Entry points | Compiled out? |
//! |-------|--------------|---------------|
//! | always | [`check`], [`precheck!`] | never |
//! | debug | [`debug_check`], [`debug_precheck!`] | in release builds, or with `trusted` |
//!
//! Always-level checks guard memory safety; their fast path is a separate
//! `unsafe` API on the type that uses them. Debug-level checks guard logic
//! preconditions only.
//!
//! # Build configuration
//!
//! | Feature | Effect |
//! |---------|--------|
//! | *(none)* | debug checks follow `debug_assertions` |
//! | `always-check` | debug checks stay enabled in release builds |
//! | `trusted` | debug checks are compiled out, even in debug builds |
//!
//! `always-check` takes precedence over `trusted`.
//!
//! # Examples
//!
//! ```
//! use tessera_precheck::{check, debug_precheck};
//!
//! fn at(values: &[u32], index: usize) -> u32 {
//!     check(index < values.len(), "index out of range");
//!     debug_precheck!(values.is_sorted(), "values must be sorted");
//!     values[index]
//! }
//!
//! assert_eq!(at(&[1, 2, 3], 1), 2);
//! ```

use std::fmt;
use std::panic::Location;

/// Log target used for every violation event.
pub const LOG_TARGET: &str = "tessera::precheck";

/// Whether debug-level checks are compiled in.
pub const DEBUG_CHECKS_ENABLED: bool = cfg!(any(
    feature = "always-check",
    all(debug_assertions, not(feature = "trusted"))
));

/// How debug-level prechecks were resolved for this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecheckMode {
    /// Debug-level checks run and abort the operation on violation.
    Checked,
    /// Debug-level checks are compiled out; callers are trusted.
    Trusted,
}

impl PrecheckMode {
    /// The mode selected by the build configuration.
    #[must_use]
    pub const fn current() -> Self {
        if DEBUG_CHECKS_ENABLED {
            Self::Checked
        } else {
            Self::Trusted
        }
    }

    /// Returns `true` if debug-level checks run.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }
}

impl fmt::Display for PrecheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checked => f.write_str("checked"),
            Self::Trusted => f.write_str("trusted"),
        }
    }
}

/// Reports a violated precondition and stops the current operation.
///
/// Logs at `error` level on [`LOG_TARGET`], then panics with a message
/// starting with `precheck violation:`. When called while the thread is
/// already panicking, aborts the process instead.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violation(message: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();

    if std::thread::panicking() {
        tracing::error!(
            target: LOG_TARGET,
            %location,
            "precheck violation while unwinding, aborting: {message}"
        );
        std::process::abort();
    }

    tracing::error!(target: LOG_TARGET, %location, "{message}");
    panic!("precheck violation: {message}");
}

/// Always-on check. Calls [`violation`] if `condition` is false.
#[inline]
#[track_caller]
pub fn check(condition: bool, message: &str) {
    if !condition {
        violation(format_args!("{message}"));
    }
}

/// Debug-level check. A no-op when [`DEBUG_CHECKS_ENABLED`] is false.
#[inline]
#[track_caller]
pub fn debug_check(condition: bool, message: &str) {
    if DEBUG_CHECKS_ENABLED && !condition {
        violation(format_args!("{message}"));
    }
}

/// Always-on check with a lazily formatted message.
///
/// ```should_panic
/// let len = 3;
/// tessera_precheck::precheck!(len == 4, "expected 4 elements, got {len}");
/// ```
#[macro_export]
macro_rules! precheck {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::violation(::core::format_args!(
                "condition `{}` does not hold",
                ::core::stringify!($cond)
            ))
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::violation(::core::format_args!($($arg)+))
        }
    };
}

/// Debug-level check with a lazily formatted message.
///
/// The condition is not evaluated when debug checks are compiled out.
#[macro_export]
macro_rules! debug_precheck {
    ($cond:expr $(,)?) => {
        if $crate::DEBUG_CHECKS_ENABLED && !$cond {
            $crate::violation(::core::format_args!(
                "condition `{}` does not hold",
                ::core::stringify!($cond)
            ))
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if $crate::DEBUG_CHECKS_ENABLED && !$cond {
            $crate::violation(::core::format_args!($($arg)+))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn check_passes_on_true() {
        check(true, "unreachable");
    }

    #[test]
    #[should_panic(expected = "precheck violation: wrong alternative")]
    fn check_panics_on_false() {
        check(false, "wrong alternative");
    }

    #[test]
    #[should_panic(expected = "precheck violation: expected 4, got 3")]
    fn macro_formats_lazily() {
        let got = 3;
        precheck!(got == 4, "expected 4, got {got}");
    }

    #[test]
    #[should_panic(expected = "condition `1 + 1 == 3` does not hold")]
    fn macro_without_message_names_condition() {
        precheck!(1 + 1 == 3);
    }

    #[test]
    #[cfg_attr(
        not(any(feature = "always-check", all(debug_assertions, not(feature = "trusted")))),
        ignore
    )]
    #[should_panic(expected = "precheck violation: not sorted")]
    fn debug_check_panics_when_enabled() {
        debug_check(false, "not sorted");
    }

    #[test]
    fn debug_precheck_skips_evaluation_when_disabled() {
        let mut evaluated = false;
        debug_precheck!(
            {
                evaluated = true;
                true
            },
            "unreachable"
        );
        assert_eq!(evaluated, DEBUG_CHECKS_ENABLED);
    }

    #[rstest]
    #[case(PrecheckMode::Checked, "checked", true)]
    #[case(PrecheckMode::Trusted, "trusted", false)]
    fn mode_display(#[case] mode: PrecheckMode, #[case] text: &str, #[case] checked: bool) {
        assert_eq!(mode.to_string(), text);
        assert_eq!(mode.is_checked(), checked);
    }

    #[test]
    fn current_mode_matches_flag() {
        assert_eq!(PrecheckMode::current().is_checked(), DEBUG_CHECKS_ENABLED);
    }
}
