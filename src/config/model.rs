//! The resolved guard configuration.

use super::types::RetrySchedule;

/// Final configuration for one guard invocation.
///
/// Constructed once by [`Configuration::resolve`] and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Suppress the "already running" and skip diagnostics.
    pub silent: bool,

    /// Re-attempt schedule after the first failed lock attempt.
    pub retry: Option<RetrySchedule>,
}
