//! Runalone: make sure only one copy of a program runs at a time.
//!
//! The guard takes a non-blocking, exclusive advisory lock on the program's
//! own executable (or a declared namespace file). A second copy finds the
//! lock taken and exits with code 1, optionally after retrying on a fixed
//! schedule.
//!
//! ```no_run
//! fn main() {
//!     runalone::lock();
//!     // ... the job, never overlapping with another copy ...
//! }
//! ```
//!
//! Environment overrides, read once per call:
//! - `SILENT_SYS_RUNALONE`: truthy silences the "already running" message
//! - `RETRY_SYS_RUNALONE`: `N` or `N,M` retry schedule
//! - `SKIP_SYS_RUNALONE`: truthy bypasses the guard; above 1 also says so

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod guard;
pub mod locks;

#[cfg(test)]
mod test_support;

use config::{ProcessEnv, SetupOptions};
use locks::ProgramIdentity;

/// Guard the running program with no setup options.
///
/// Returns only if the program should go on; otherwise reports and exits.
/// An acquired lock is held until the process exits.
pub fn lock() {
    lock_with(&SetupOptions::new(), &ProgramIdentity::current());
}

/// Guard with explicit setup options and identity.
///
/// Environment overrides still apply on top of `options`.
pub fn lock_with(options: &SetupOptions, identity: &ProgramIdentity) {
    let report = guard::run(options, identity, &ProcessEnv);
    let disposition = report.disposition();

    if let Some(held) = report.outcome.into_lock() {
        locks::hold_for_process_lifetime(held);
    }

    disposition.enforce();
}
