//! CLI argument parsing for runalone.
//!
//! Uses clap derive macros for declarative argument definitions. The binary
//! wraps a command so that crontab entries can be guarded without changing
//! the job itself.

use clap::Parser;
use runalone::config::SetupOptions;
use runalone::error::Result;
use runalone::locks::ProgramIdentity;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::command::{resolve_executable, script_argument};

/// Runalone: run a command only if no other copy of it is running.
///
/// The job's own file is locked with a non-blocking advisory lock for as long
/// as the command runs: the `--lock` file if given, else the script passed to
/// an interpreter (`python3 job.py`), else the command's executable. Inline
/// code such as `sh -c '...'` has no script, so it locks the interpreter and
/// every such job excludes the others; give those jobs a `--lock` file.
/// Environment overrides: SILENT_SYS_RUNALONE, RETRY_SYS_RUNALONE,
/// SKIP_SYS_RUNALONE.
#[derive(Parser, Debug)]
#[command(name = "runalone")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not report that another copy is already running.
    #[arg(short, long, overrides_with = "no_silent")]
    pub silent: bool,

    /// Report contention even if the config file sets `silent`.
    #[arg(long, overrides_with = "silent")]
    pub no_silent: bool,

    /// Retry schedule: N more attempts, M seconds apart.
    #[arg(short, long, value_name = "N[,M]")]
    pub retry: Option<String>,

    /// File to lock instead of the job's script or executable.
    #[arg(short, long, value_name = "PATH")]
    pub lock: Option<PathBuf>,

    /// File to lock when the job's own file cannot be opened.
    #[arg(long, value_name = "PATH")]
    pub namespace: Option<PathBuf>,

    /// Read setup options (silent, retry) from a YAML file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Program name used in messages (defaults to the command).
    #[arg(long)]
    pub name: Option<String>,

    /// Command to run while holding the lock.
    #[arg(required = true, trailing_var_arg = true, num_args = 1.., value_name = "COMMAND")]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Setup options from the config file, with flags layered on top.
    pub fn setup_options(&self) -> Result<SetupOptions> {
        let from_file = match &self.config {
            Some(path) => SetupOptions::load(path)?,
            None => SetupOptions::new(),
        };

        let from_flags = SetupOptions {
            silent: match (self.silent, self.no_silent) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            retry: self.retry.clone(),
        };

        Ok(from_file.overlay(from_flags))
    }

    /// The name shown in diagnostics.
    pub fn program_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.command
                .first()
                .map(|c| c.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    /// The job's own file: `--lock`, then a script argument, then the executable.
    pub fn job_file(&self) -> Option<PathBuf> {
        if let Some(lock) = &self.lock {
            return Some(lock.clone());
        }
        let (program, args) = self.command.split_first()?;
        script_argument(args).or_else(|| resolve_executable(program))
    }

    /// Identity of the wrapped command: its job file, then `--namespace`.
    pub fn identity(&self) -> ProgramIdentity {
        let mut identity = ProgramIdentity::new(self.program_name());
        if let Some(file) = self.job_file() {
            identity = identity.with_executable(file);
        }
        if let Some(ns) = &self.namespace {
            identity = identity.with_namespace(ns);
        }
        identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_command_only() {
        let cli = Cli::try_parse_from(["runalone", "backup.sh"]).unwrap();
        assert!(!cli.silent);
        assert_eq!(cli.retry, None);
        assert_eq!(cli.command, vec![OsString::from("backup.sh")]);
    }

    #[test]
    fn parse_command_keeps_its_own_flags() {
        let cli = Cli::try_parse_from([
            "runalone", "--silent", "--retry", "3,10", "--", "rsync", "-a", "--delete", "src",
        ])
        .unwrap();
        assert!(cli.silent);
        assert_eq!(cli.retry.as_deref(), Some("3,10"));
        assert_eq!(cli.command.len(), 4);
        assert_eq!(cli.command[2], OsString::from("--delete"));
    }

    #[test]
    fn parse_requires_command() {
        assert!(Cli::try_parse_from(["runalone", "--silent"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runalone.yaml");
        std::fs::write(&path, "silent: false\nretry: \"1\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "runalone",
            "--config",
            path.to_str().unwrap(),
            "--retry",
            "5,2",
            "job",
        ])
        .unwrap();
        let options = cli.setup_options().unwrap();
        assert_eq!(options.silent, Some(false));
        assert_eq!(options.retry.as_deref(), Some("5,2"));
    }

    #[test]
    fn unset_silent_flag_leaves_option_open() {
        let cli = Cli::try_parse_from(["runalone", "job"]).unwrap();
        assert_eq!(cli.setup_options().unwrap(), SetupOptions::new());
    }

    #[test]
    fn identity_uses_command_path_and_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let exe = temp_dir.path().join("job.sh");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();

        let cli = Cli::try_parse_from([
            "runalone",
            "--namespace",
            "/var/lock/job",
            exe.to_str().unwrap(),
        ])
        .unwrap();
        let identity = cli.identity();
        assert_eq!(identity.executable(), Some(exe.as_path()));
        assert_eq!(identity.namespace(), Some(std::path::Path::new("/var/lock/job")));
        assert_eq!(identity.name(), exe.to_str().unwrap());
    }

    #[test]
    fn no_silent_flag_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("runalone.yaml");
        std::fs::write(&path, "silent: true\n").unwrap();

        let cli = Cli::try_parse_from([
            "runalone",
            "--config",
            path.to_str().unwrap(),
            "--no-silent",
            "job",
        ])
        .unwrap();
        assert_eq!(cli.setup_options().unwrap().silent, Some(false));
    }

    #[test]
    fn last_of_silent_and_no_silent_wins() {
        let cli = Cli::try_parse_from(["runalone", "--no-silent", "--silent", "job"]).unwrap();
        assert_eq!(cli.setup_options().unwrap().silent, Some(true));

        let cli = Cli::try_parse_from(["runalone", "--silent", "--no-silent", "job"]).unwrap();
        assert_eq!(cli.setup_options().unwrap().silent, Some(false));
    }

    #[test]
    fn lock_flag_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("job.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        let cli = Cli::try_parse_from([
            "runalone",
            "--lock",
            "/var/lock/nightly",
            "sh",
            script.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(cli.job_file(), Some(PathBuf::from("/var/lock/nightly")));
    }

    #[test]
    fn interpreter_job_locks_its_script() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("job.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        let cli = Cli::try_parse_from(["runalone", "sh", script.to_str().unwrap()]).unwrap();
        assert_eq!(cli.identity().executable(), Some(script.as_path()));
    }

    #[test]
    fn inline_shell_job_locks_interpreter() {
        let cli = Cli::try_parse_from(["runalone", "sh", "-c", "sleep 3"]).unwrap();
        let file = cli.job_file().unwrap();
        assert!(file.is_absolute());
        assert!(file.ends_with("sh"));
    }

    #[test]
    fn name_flag_overrides_program_name() {
        let cli = Cli::try_parse_from(["runalone", "--name", "nightly", "job"]).unwrap();
        assert_eq!(cli.program_name(), "nightly");
    }
}
