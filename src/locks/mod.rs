//! Locking subsystem for runalone.
//!
//! The mutex for a program run is an OS advisory lock (`flock`, exclusive,
//! non-blocking) on a file tied to the program's own identity:
//! - Root target: the program's executable file
//! - Namespace target: a caller-declared per-namespace file, tried when the
//!   executable cannot be opened
//!
//! # Lifetime
//!
//! A lock is held exactly as long as its [`LockGuard`] (and the open file
//! handle inside it) lives. Nothing is written to the target; closing the
//! handle or exiting the process is the only release. If the target file is
//! replaced or unlinked while held, new contenders open a different inode
//! and the lock stops excluding them.

mod acquire;
mod guard;
mod target;
mod types;


// Re-export public API
pub use acquire::{Acquisition, LockAcquirer};
pub use guard::{LockGuard, hold_for_process_lifetime};
pub use target::{LockTarget, locate};
pub use types::{ProgramIdentity, TargetScope};
