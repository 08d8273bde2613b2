//! Lock target discovery.

use super::types::{ProgramIdentity, TargetScope};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened resource selected as the mutex for this run.
#[derive(Debug)]
pub struct LockTarget {
    path: PathBuf,
    scope: TargetScope,
    file: File,
}

impl LockTarget {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scope(&self) -> TargetScope {
        self.scope
    }

    pub(super) fn file(&self) -> &File {
        &self.file
    }
}

/// Find the resource to lock for `identity`.
///
/// The executable is preferred; the namespace resource is the fallback. A
/// candidate is usable when it opens read-only and is a regular file.
///
/// # Returns
///
/// * `Some(LockTarget)` - The first usable candidate, opened
/// * `None` - No candidate is usable
pub fn locate(identity: &ProgramIdentity) -> Option<LockTarget> {
    let candidates = [
        (TargetScope::Root, identity.executable()),
        (TargetScope::Namespace, identity.namespace()),
    ];

    candidates
        .into_iter()
        .find_map(|(scope, path)| open_target(scope, path?))
}

fn open_target(scope: TargetScope, path: &Path) -> Option<LockTarget> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(scope = scope.as_str(), path = %path.display(), error = %e, "lock target unavailable");
            return None;
        }
    };

    match file.metadata() {
        Ok(meta) if meta.is_file() => {
            debug!(scope = scope.as_str(), path = %path.display(), "lock target located");
            Some(LockTarget {
                path: path.to_path_buf(),
                scope,
                file,
            })
        }
        Ok(_) => {
            debug!(scope = scope.as_str(), path = %path.display(), "lock target is not a regular file");
            None
        }
        Err(e) => {
            debug!(scope = scope.as_str(), path = %path.display(), error = %e, "lock target unreadable");
            None
        }
    }
}
