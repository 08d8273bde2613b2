//! RAII lock guard and the process-lifetime holder.

use super::target::LockTarget;
use super::types::TargetScope;
use std::path::Path;
use std::sync::Mutex;

/// Locks parked until the process exits.
static HELD: Mutex<Vec<LockGuard>> = Mutex::new(Vec::new());

/// RAII guard for an acquired advisory lock.
///
/// The lock is released when the guard is dropped and its file handle closes.
#[derive(Debug)]
pub struct LockGuard {
    target: LockTarget,
}

impl LockGuard {
    pub(super) fn new(target: LockTarget) -> Self {
        Self { target }
    }

    /// Get the path of the locked resource.
    pub fn path(&self) -> &Path {
        self.target.path()
    }

    pub fn scope(&self) -> TargetScope {
        self.target.scope()
    }
}

/// Keep `guard` alive until the process exits.
///
/// There is no way to get it back; the OS releases the lock at exit.
pub fn hold_for_process_lifetime(guard: LockGuard) {
    HELD.lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .push(guard);
}
