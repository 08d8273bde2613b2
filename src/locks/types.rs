//! Program identity and lock target scope definitions.

use std::path::{Path, PathBuf};

/// Where a lock target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScope {
    /// The program's own executable.
    Root,
    /// A resource declared for the caller's namespace.
    Namespace,
}

impl TargetScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetScope::Root => "root",
            TargetScope::Namespace => "namespace",
        }
    }
}

/// Declared identity of the program being guarded.
///
/// `name` is what diagnostics show; `executable` and `namespace` are the
/// candidate lock targets, tried in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramIdentity {
    name: String,
    executable: Option<PathBuf>,
    namespace: Option<PathBuf>,
}

impl ProgramIdentity {
    /// An identity with a display name and no lock targets yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: None,
            namespace: None,
        }
    }

    /// The running program: `argv[0]` as its name, `current_exe()` as its root target.
    pub fn current() -> Self {
        let executable = std::env::current_exe().ok();
        let name = std::env::args_os()
            .next()
            .map(|a| a.to_string_lossy().into_owned())
            .or_else(|| executable.as_ref().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            name,
            executable,
            namespace: None,
        }
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn with_namespace(mut self, path: impl Into<PathBuf>) -> Self {
        self.namespace = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    pub fn namespace(&self) -> Option<&Path> {
        self.namespace.as_deref()
    }
}
