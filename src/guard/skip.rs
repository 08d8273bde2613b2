//! Environment bypass evaluated before any lock logic.

use crate::config::{Environment, SKIP_VAR, is_truthy};

/// State of the `SKIP_SYS_RUNALONE` override for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipOverride {
    value: Option<String>,
}

impl SkipOverride {
    pub fn from_env<E: Environment>(env: &E) -> Self {
        Self {
            value: env.var(SKIP_VAR),
        }
    }

    /// An override that never skips.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Whether the guard should be bypassed entirely.
    pub fn is_active(&self) -> bool {
        self.value.as_deref().is_some_and(is_truthy)
    }

    /// Whether the bypass should be announced: a numeric level above 1.
    pub fn announces(&self) -> bool {
        self.value
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .is_some_and(|level| level > 1)
    }
}
