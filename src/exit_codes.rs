//! Exit code constants for runalone.
//!
//! - 0: Success (lock acquired or guard skipped)
//! - 1: Another copy already holds the lock
//! - 2: No lock target could be located
//! - 127: Wrapped command could not be started (CLI only)
//! - 255: Configuration error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Another instance holds the lock, after any configured retries.
pub const ALREADY_RUNNING: i32 = 1;

/// Neither the executable nor a namespace resource could be locked.
pub const NO_LOCK_TARGET: i32 = 2;

/// The wrapped command could not be spawned.
pub const COMMAND_NOT_STARTED: i32 = 127;

/// Unknown setup options, a malformed retry schedule, or an unreadable config file.
pub const CONFIG_ERROR: i32 = 255;
