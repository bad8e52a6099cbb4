//! Workspace path sandbox.
//!
//! Resolves user-supplied relative paths against a workspace root. A path is
//! rejected when it escapes the root either lexically (`..`, absolute paths)
//! or through a symlink somewhere along the way. The `.pecko/` metadata
//! directory under the root is off limits too.

use crate::workspace::PECKO_DIRNAME;
use pecko_domain::ToolError;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("'{path}' resolves outside the workspace root")]
    OutsideWorkspace { path: String },

    #[error("'{path}' is inside the reserved {} directory", PECKO_DIRNAME)]
    Reserved { path: String },

    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("workspace root '{}' is not usable: {source}", root.display())]
    InvalidRoot {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SandboxError> for ToolError {
    fn from(err: SandboxError) -> Self {
        match err {
            SandboxError::OutsideWorkspace { .. } => ToolError::outside_workspace(err.to_string()),
            SandboxError::Reserved { .. } => ToolError::not_allowed(err.to_string()),
            SandboxError::InvalidPath { .. } => ToolError::invalid_argument(err.to_string()),
            SandboxError::InvalidRoot { .. } => ToolError::execution_failed(err.to_string()),
        }
    }
}

/// Confines file tools to one directory tree
#[derive(Debug, Clone)]
pub struct WorkspaceSandbox {
    /// Canonical root
    root: PathBuf,
}

impl WorkspaceSandbox {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SandboxError> {
        let root = root.as_ref();
        let canonical = root.canonicalize().map_err(|source| SandboxError::InvalidRoot {
            root: root.to_path_buf(),
            source,
        })?;

        if !canonical.is_dir() {
            return Err(SandboxError::InvalidRoot {
                root: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            });
        }

        Ok(Self { root: canonical })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `raw` to an absolute path inside the root.
    ///
    /// The target itself need not exist; its deepest existing ancestor is
    /// canonicalized so a symlink pointing out of the tree is caught before
    /// anything is read or written through it. An empty path or `.` resolves
    /// to the root.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, SandboxError> {
        if raw.contains('\0') {
            return Err(SandboxError::InvalidPath {
                path: raw.to_string(),
                reason: "contains a NUL byte".to_string(),
            });
        }

        let relative = normalize_relative(raw)?;
        let joined = self.root.join(&relative);

        let mut existing = joined.clone();
        let mut missing: Vec<OsString> = Vec::new();
        while fs::symlink_metadata(&existing).is_err() {
            match existing.file_name() {
                Some(name) => missing.push(name.to_os_string()),
                None => break,
            }
            if !existing.pop() {
                break;
            }
        }

        // fails for dangling symlinks as well
        let canonical = existing
            .canonicalize()
            .map_err(|_| outside(raw))?;
        if !canonical.starts_with(&self.root) {
            return Err(outside(raw));
        }

        let resolved = missing
            .into_iter()
            .rev()
            .fold(canonical, |path, name| path.join(name));
        // also catches symlinks pointing into the metadata directory
        if self.is_reserved(&resolved) {
            return Err(reserved(raw));
        }
        Ok(resolved)
    }

    /// True for the metadata directory and anything below it
    pub fn is_reserved(&self, path: &Path) -> bool {
        path.starts_with(self.root.join(PECKO_DIRNAME))
    }
}

fn reserved(raw: &str) -> SandboxError {
    SandboxError::Reserved {
        path: raw.to_string(),
    }
}

fn outside(raw: &str) -> SandboxError {
    SandboxError::OutsideWorkspace {
        path: raw.to_string(),
    }
}

/// Lexical pass: drop `.`, reject `..`, anything absolute and the metadata
/// directory
fn normalize_relative(raw: &str) -> Result<PathBuf, SandboxError> {
    let mut normalized = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(segment)
                if normalized.as_os_str().is_empty() && segment == PECKO_DIRNAME =>
            {
                return Err(reserved(raw));
            }
            Component::Normal(segment) => normalized.push(segment),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(outside(raw));
            }
        }
    }
    Ok(normalized)
}
