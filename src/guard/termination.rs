//! Maps a guard outcome to what the caller does next.

use super::Outcome;
use crate::exit_codes;

/// What the host program should do after the guard ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Carry on with the main work, optionally after printing a notice.
    Continue { notice: Option<String> },
    /// Stop now with `code`, printing `message` if there is one.
    Exit { code: i32, message: Option<String> },
}

impl Disposition {
    pub fn exit_code(&self) -> i32 {
        match self {
            Disposition::Continue { .. } => exit_codes::SUCCESS,
            Disposition::Exit { code, .. } => *code,
        }
    }

    /// The line to write to stderr, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Disposition::Continue { notice } => notice.as_deref(),
            Disposition::Exit { message, .. } => message.as_deref(),
        }
    }

    /// Print the message and terminate the process if told to exit.
    pub fn enforce(&self) {
        if let Some(message) = self.message() {
            eprintln!("{}", message);
        }
        if let Disposition::Exit { code, .. } = self {
            std::process::exit(*code);
        }
    }
}

/// Exit codes and messages for each outcome.
///
/// `silent` suppresses the contention message and the skip notice. A missing
/// lock target and configuration errors are always reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationPolicy {
    silent: bool,
    program: String,
}

impl TerminationPolicy {
    pub fn new(silent: bool, program: impl Into<String>) -> Self {
        Self {
            silent,
            program: program.into(),
        }
    }

    pub fn resolve(&self, outcome: &Outcome) -> Disposition {
        match outcome {
            Outcome::Skipped { announce } => Disposition::Continue {
                notice: (*announce && !self.silent)
                    .then(|| format!("Skipping runalone check for '{}'", self.program)),
            },
            Outcome::Acquired(_) => Disposition::Continue { notice: None },
            Outcome::AlreadyRunning => Disposition::Exit {
                code: exit_codes::ALREADY_RUNNING,
                message: (!self.silent)
                    .then(|| format!("A copy of '{}' is already running", self.program)),
            },
            Outcome::NoLockTarget => Disposition::Exit {
                code: exit_codes::NO_LOCK_TARGET,
                message: Some(format!(
                    "Add a lock target to '{}' to allow runalone to function: \
                     its executable must be a readable regular file, or declare a namespace lock file",
                    self.program
                )),
            },
            Outcome::ConfigError(err) => Disposition::Exit {
                code: err.exit_code(),
                message: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunAloneError;

    #[test]
    fn already_running_exits_one_with_message() {
        let d = TerminationPolicy::new(false, "job").resolve(&Outcome::AlreadyRunning);
        assert_eq!(d.exit_code(), 1);
        assert_eq!(d.message(), Some("A copy of 'job' is already running"));
    }

    #[test]
    fn silent_suppresses_already_running_message() {
        let d = TerminationPolicy::new(true, "job").resolve(&Outcome::AlreadyRunning);
        assert_eq!(
            d,
            Disposition::Exit {
                code: exit_codes::ALREADY_RUNNING,
                message: None
            }
        );
    }

    #[test]
    fn no_lock_target_is_never_silenced() {
        for silent in [false, true] {
            let d = TerminationPolicy::new(silent, "job").resolve(&Outcome::NoLockTarget);
            assert_eq!(d.exit_code(), 2);
            assert!(d.message().unwrap().starts_with("Add a lock target to 'job'"));
        }
    }

    #[test]
    fn config_error_is_never_silenced() {
        let outcome = Outcome::ConfigError(RunAloneError::UnknownOptions(vec!["x".to_string()]));
        let d = TerminationPolicy::new(true, "job").resolve(&outcome);
        assert_eq!(d.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(d.message(), Some("don't know what to do with: x"));
    }

    #[test]
    fn skipped_continues_with_gated_notice() {
        let policy = TerminationPolicy::new(false, "job");
        assert_eq!(
            policy.resolve(&Outcome::Skipped { announce: false }),
            Disposition::Continue { notice: None }
        );
        assert_eq!(
            policy.resolve(&Outcome::Skipped { announce: true }).message(),
            Some("Skipping runalone check for 'job'")
        );

        let silent = TerminationPolicy::new(true, "job");
        assert_eq!(
            silent.resolve(&Outcome::Skipped { announce: true }),
            Disposition::Continue { notice: None }
        );
    }
}
