//! Running the wrapped command.

use runalone::error::{Result, RunAloneError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Find the executable file for `program`.
///
/// A name containing a path separator is taken as-is; a bare name is looked
/// up in `PATH` the way the OS would run it, skipping non-executable files.
pub fn resolve_executable(program: &OsStr) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return Some(candidate.to_path_buf());
    }

    which::which(program).ok()
}

/// The script an interpreter is asked to run, if any.
///
/// This is the first argument not starting with `-`, when it names an
/// existing regular file. `sh -c '...'` and similar inline code has none.
pub fn script_argument(args: &[OsString]) -> Option<PathBuf> {
    let first = args
        .iter()
        .find(|a| !a.to_string_lossy().starts_with('-'))?;
    let path = Path::new(first);
    path.is_file().then(|| path.to_path_buf())
}

/// Run `command` with inherited stdio and return its exit status.
///
/// A command killed by a signal reports 1.
pub fn run(command: &[OsString]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| RunAloneError::CommandFailed("no command given".to_string()))?;

    let status = Command::new(program).args(args).status().map_err(|e| {
        RunAloneError::CommandFailed(format!("{}: {}", program.to_string_lossy(), e))
    })?;

    Ok(status.code().unwrap_or(1))
}
