use std::ffi::OsString;

/// Sets or removes one environment variable for the lifetime of the guard.
///
/// The process environment is global and not thread-safe, so every test
/// using this must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::apply(key, Some(value))
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        Self::apply(key, None)
    }

    fn apply(key: &'static str, value: Option<&str>) -> Self {
        let original = std::env::var_os(key);
        // SAFETY: callers are #[serial] tests, so no other test thread touches the environment.
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::apply`.
        unsafe {
            match &self.original {
                Some(v) => std::env::set_var(self.key, v),
                None => std::env::remove_var(self.key),
            }
        }
    }
}
