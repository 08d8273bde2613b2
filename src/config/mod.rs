//! Configuration resolution for runalone.
//!
//! Setup-time options (from the host program or the CLI) are merged with
//! environment overrides into a single immutable [`Configuration`]. An
//! environment variable, when present, always wins over the setup-time value
//! for the same setting.

mod env;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use env::{Environment, ProcessEnv, RETRY_VAR, SILENT_VAR, SKIP_VAR, is_truthy};
pub use model::Configuration;
pub use types::{RetrySchedule, SetupOptions};
