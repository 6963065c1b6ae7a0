//! Switch for the `hello_debug!` STDERR printer.
//!
//! The flag is seeded from `HELLO_WORLD_DEBUG` before `main` runs and can be
//! flipped at any time afterwards. The greeting itself never consults it.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable consulted by [`init_from_env`].
pub const DEBUG_ENV_VAR: &str = "HELLO_WORLD_DEBUG";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Interpret a raw `HELLO_WORLD_DEBUG` value.
///
/// `"0"`, `"false"`, `"no"` and `"off"` (any case, surrounding whitespace
/// ignored) are false. Any other value is true.
pub fn parse_flag(val: &str) -> bool {
    let val = val.trim();
    !(val == "0"
        || val.eq_ignore_ascii_case("false")
        || val.eq_ignore_ascii_case("no")
        || val.eq_ignore_ascii_case("off"))
}

/// Seed the flag from [`DEBUG_ENV_VAR`].
///
/// An unset variable leaves debug on for this crate's unit tests and off
/// everywhere else.
pub fn init_from_env() {
    let enabled = match env::var(DEBUG_ENV_VAR) {
        Ok(val) => parse_flag(&val),
        Err(_) => cfg!(test),
    };
    set_debug(enabled);
}

/// Override the flag, e.g. from a test.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether `hello_debug!` currently prints.
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[ctor::ctor]
fn init_debug() {
    init_from_env();
}

/// `eprintln!` that only evaluates its arguments while [`debug::is_enabled`](crate::debug::is_enabled) is true.
#[macro_export]
macro_rules! hello_debug {
    ($($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsey_values() {
        for val in ["0", "false", "FALSE", "No", "off", "  off  "] {
            assert!(!parse_flag(val), "{val:?} should disable debug");
        }
    }

    #[test]
    fn test_truthy_values() {
        for val in ["1", "true", "yes", "on", "", "anything"] {
            assert!(parse_flag(val), "{val:?} should enable debug");
        }
    }

    #[test]
    fn test_set_debug_toggles() {
        let before = is_enabled();
        set_debug(true);
        assert!(is_enabled());
        set_debug(false);
        assert!(!is_enabled());
        set_debug(before);
    }
}
