//! Non-blocking exclusive lock attempts with a fixed-interval retry schedule.

use super::guard::LockGuard;
use super::target::LockTarget;
use crate::config::RetrySchedule;
use fs2::FileExt;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of trying to lock a target.
#[derive(Debug)]
pub enum Acquisition {
    /// The lock is ours for as long as the guard lives.
    Acquired(LockGuard),
    /// Every attempt found the lock held elsewhere.
    Contended {
        /// Total attempts made, including the first.
        attempts: u32,
    },
}

/// Attempts the exclusive lock, then re-attempts per the retry schedule.
///
/// Polling is at a fixed interval, not exponential backoff.
pub struct LockAcquirer {
    retry: Option<RetrySchedule>,
    sleep: Box<dyn FnMut(Duration)>,
}

impl LockAcquirer {
    pub fn new(retry: Option<RetrySchedule>) -> Self {
        Self {
            retry,
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Replace the blocking sleep between attempts.
    pub fn with_sleeper(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    /// Lock `target`, retrying as scheduled.
    ///
    /// The first success ends the loop. With no schedule, or `times = 0`,
    /// only the initial attempt is made.
    pub fn acquire(&mut self, target: LockTarget) -> Acquisition {
        if try_lock(&target) {
            return Acquisition::Acquired(LockGuard::new(target));
        }

        let mut attempts = 1;
        if let Some(schedule) = self.retry {
            for retry in 1..=schedule.times {
                debug!(
                    retry,
                    of = schedule.times,
                    interval_seconds = schedule.interval_seconds,
                    "lock held elsewhere, waiting"
                );
                (self.sleep)(schedule.interval());
                attempts += 1;
                if try_lock(&target) {
                    return Acquisition::Acquired(LockGuard::new(target));
                }
            }
        }

        Acquisition::Contended { attempts }
    }
}

impl std::fmt::Debug for LockAcquirer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockAcquirer")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// One non-blocking exclusive attempt.
///
/// Errors other than contention also count as a failed attempt.
fn try_lock(target: &LockTarget) -> bool {
    match target.file().try_lock_exclusive() {
        Ok(()) => {
            debug!(path = %target.path().display(), "lock acquired");
            true
        }
        Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => false,
        Err(e) => {
            warn!(path = %target.path().display(), error = %e, "lock attempt failed");
            false
        }
    }
}
