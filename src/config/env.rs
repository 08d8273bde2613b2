//! Environment access and the override variables the guard honours.

use std::collections::HashMap;

/// Truthy value disables diagnostic output.
pub const SILENT_VAR: &str = "SILENT_SYS_RUNALONE";

/// `N` or `N,M` retry schedule.
pub const RETRY_VAR: &str = "RETRY_SYS_RUNALONE";

/// Truthy value bypasses the guard; a level above 1 also prints a notice.
pub const SKIP_VAR: &str = "SKIP_SYS_RUNALONE";

/// Source of environment variables.
///
/// The guard reads overrides through this trait so that resolution can be
/// exercised against an in-memory map instead of the process environment.
pub trait Environment {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// A value is truthy unless it is empty or exactly `"0"`.
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
