//! The instance guard.
//!
//! One run goes through these steps in order, stopping at the first that
//! decides the outcome:
//! 1. Resolve configuration (a bad setup is reported before anything else)
//! 2. Honour the skip override
//! 3. Locate the lock target
//! 4. Acquire the lock, retrying if a schedule is configured
//!
//! [`TerminationPolicy`] then turns the [`Outcome`] into a [`Disposition`].

mod skip;
mod termination;


pub use skip::SkipOverride;
pub use termination::{Disposition, TerminationPolicy};

use crate::config::{Configuration, Environment, SetupOptions};
use crate::error::RunAloneError;
use crate::locks::{self, Acquisition, LockAcquirer, LockGuard, ProgramIdentity};
use std::time::Duration;
use tracing::debug;

/// The single result of one guard run.
#[derive(Debug)]
pub enum Outcome {
    /// The skip override bypassed the guard; nothing was located or locked.
    Skipped { announce: bool },
    /// This process holds the lock.
    Acquired(LockGuard),
    /// Another process holds the lock, after any configured retries.
    AlreadyRunning,
    /// Neither the executable nor a namespace resource could be opened.
    NoLockTarget,
    /// Setup options or overrides were invalid.
    ConfigError(RunAloneError),
}

impl Outcome {
    /// Whether the host program should go on with its work.
    pub fn proceeds(&self) -> bool {
        matches!(self, Outcome::Skipped { .. } | Outcome::Acquired(_))
    }

    /// Take the held lock out of an `Acquired` outcome.
    pub fn into_lock(self) -> Option<LockGuard> {
        match self {
            Outcome::Acquired(guard) => Some(guard),
            _ => None,
        }
    }
}

/// Orchestrates skip, locate and acquire for an already resolved configuration.
#[derive(Debug)]
pub struct Guard<'a> {
    identity: &'a ProgramIdentity,
    skip: SkipOverride,
    acquirer: LockAcquirer,
}

impl<'a> Guard<'a> {
    pub fn new(config: &Configuration, identity: &'a ProgramIdentity) -> Self {
        Self {
            identity,
            skip: SkipOverride::inactive(),
            acquirer: LockAcquirer::new(config.retry),
        }
    }

    pub fn with_skip(mut self, skip: SkipOverride) -> Self {
        self.skip = skip;
        self
    }

    /// Replace the blocking sleep between retry attempts.
    pub fn with_sleeper(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.acquirer = self.acquirer.with_sleeper(sleep);
        self
    }

    pub fn run(mut self) -> Outcome {
        if self.skip.is_active() {
            debug!(program = self.identity.name(), "guard skipped by override");
            return Outcome::Skipped {
                announce: self.skip.announces(),
            };
        }

        let Some(target) = locks::locate(self.identity) else {
            return Outcome::NoLockTarget;
        };

        match self.acquirer.acquire(target) {
            Acquisition::Acquired(guard) => Outcome::Acquired(guard),
            Acquisition::Contended { attempts } => {
                debug!(program = self.identity.name(), attempts, "lock contended");
                Outcome::AlreadyRunning
            }
        }
    }
}

/// An outcome together with the policy that will judge it.
#[derive(Debug)]
pub struct Report {
    pub outcome: Outcome,
    pub policy: TerminationPolicy,
}

impl Report {
    pub fn disposition(&self) -> Disposition {
        self.policy.resolve(&self.outcome)
    }
}

/// Run the guard end to end without enforcing the result.
///
/// Configuration errors short-circuit before the skip override is even read.
pub fn run<E: Environment>(
    options: &SetupOptions,
    identity: &ProgramIdentity,
    env: &E,
) -> Report {
    run_with(options, identity, env, |guard| guard)
}

/// Like [`run`], letting the caller adjust the [`Guard`] before it runs.
pub fn run_with<E, F>(
    options: &SetupOptions,
    identity: &ProgramIdentity,
    env: &E,
    customize: F,
) -> Report
where
    E: Environment,
    F: FnOnce(Guard<'_>) -> Guard<'_>,
{
    let config = match Configuration::resolve(options, env) {
        Ok(config) => config,
        Err(err) => {
            return Report {
                outcome: Outcome::ConfigError(err),
                policy: TerminationPolicy::new(false, identity.name()),
            };
        }
    };

    let guard = Guard::new(&config, identity).with_skip(SkipOverride::from_env(env));
    Report {
        outcome: customize(guard).run(),
        policy: TerminationPolicy::new(config.silent, identity.name()),
    }
}
