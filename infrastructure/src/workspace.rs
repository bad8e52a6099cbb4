//! Workspace discovery and initialization
//!
//! A workspace is any directory containing a `.pecko/` metadata folder. The
//! folder holds the workspace config, a marker README and per-run
//! conversation logs.

use crate::config::{ConfigError, ConfigLoader};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const PECKO_DIRNAME: &str = ".pecko";
pub const CONFIG_FILENAME: &str = "config.toml";
const MARKER_FILENAME: &str = "README.txt";
const LOGS_DIRNAME: &str = "logs";

const MARKER_TEXT: &str =
    "This folder is managed by pecko.\nIt stores workspace config and agent state.\n";

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("could not resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of [`init_workspace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// False when the workspace already existed and nothing was written
    pub created: bool,
    pub root: PathBuf,
    pub message: String,
}

/// Result of [`status`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceStatus {
    Initialized { root: PathBuf, meta: PathBuf },
    NotInitialized,
}

impl WorkspaceStatus {
    pub fn is_initialized(&self) -> bool {
        matches!(self, WorkspaceStatus::Initialized { .. })
    }
}

pub fn metadata_dir(root: &Path) -> PathBuf {
    root.join(PECKO_DIRNAME)
}

pub fn config_path(root: &Path) -> PathBuf {
    metadata_dir(root).join(CONFIG_FILENAME)
}

pub fn logs_dir(root: &Path) -> PathBuf {
    metadata_dir(root).join(LOGS_DIRNAME)
}

/// Where run transcripts go, or `None` when `root` was never initialized.
///
/// Logging must not create `.pecko/` on its own, or a plain directory would
/// start reporting as a workspace.
pub fn transcript_dir(root: &Path) -> Option<PathBuf> {
    metadata_dir(root).is_dir().then(|| logs_dir(root))
}

/// Walk `start` and its ancestors for a directory holding `.pecko/`.
pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .find(|p| metadata_dir(p).is_dir())
        .map(Path::to_path_buf)
}

/// Create `.pecko/` under `root` with a default config and a marker file.
///
/// An existing workspace is left untouched unless `force` is set, in which
/// case the config and marker are rewritten.
pub fn init_workspace(root: &Path, force: bool) -> Result<InitOutcome, WorkspaceError> {
    let root = root.canonicalize().map_err(|source| WorkspaceError::Resolve {
        path: root.to_path_buf(),
        source,
    })?;
    let meta = metadata_dir(&root);

    if meta.exists() && !force {
        return Ok(InitOutcome {
            created: false,
            message: format!("Already initialized: {}", root.display()),
            root,
        });
    }

    fs::create_dir_all(&meta).map_err(|source| WorkspaceError::Write {
        path: meta.clone(),
        source,
    })?;

    let config = config_path(&root);
    let rendered = ConfigLoader::default_config_toml()?;
    write_file(&config, &rendered)?;
    write_file(&meta.join(MARKER_FILENAME), MARKER_TEXT)?;
    debug!(root = %root.display(), force, "workspace initialized");

    Ok(InitOutcome {
        created: true,
        message: format!("Initialized pecko workspace in: {}", root.display()),
        root,
    })
}

pub fn status(path: &Path) -> WorkspaceStatus {
    match find_workspace_root(path) {
        Some(root) => WorkspaceStatus::Initialized {
            meta: metadata_dir(&root),
            root,
        },
        None => WorkspaceStatus::NotInitialized,
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), WorkspaceError> {
    fs::write(path, content).map_err(|source| WorkspaceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_metadata() {
        let dir = tempdir().unwrap();

        let outcome = init_workspace(dir.path(), false).unwrap();

        assert!(outcome.created);
        assert!(outcome.message.starts_with("Initialized pecko workspace in: "));
        let meta = metadata_dir(&outcome.root);
        assert!(meta.is_dir());
        assert_eq!(
            fs::read_to_string(meta.join("README.txt")).unwrap(),
            MARKER_TEXT
        );

        let written: FileConfig =
            toml::from_str(&fs::read_to_string(config_path(&outcome.root)).unwrap()).unwrap();
        assert_eq!(written, FileConfig::default());
    }

    #[test]
    fn test_init_twice_refuses_without_force() {
        let dir = tempdir().unwrap();
        init_workspace(dir.path(), false).unwrap();
        fs::write(config_path(dir.path()), "version = 1\n").unwrap();

        let second = init_workspace(dir.path(), false).unwrap();
        assert!(!second.created);
        assert!(second.message.starts_with("Already initialized: "));
        assert_eq!(
            fs::read_to_string(config_path(dir.path())).unwrap(),
            "version = 1\n"
        );

        let forced = init_workspace(dir.path(), true).unwrap();
        assert!(forced.created);
        assert_ne!(
            fs::read_to_string(config_path(dir.path())).unwrap(),
            "version = 1\n"
        );
    }

    #[test]
    fn test_find_root_from_nested_dir() {
        let dir = tempdir().unwrap();
        init_workspace(dir.path(), false).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let root = find_workspace_root(&nested).unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_status() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain");
        let ws = dir.path().join("ws");
        fs::create_dir_all(&plain).unwrap();
        fs::create_dir_all(&ws).unwrap();
        init_workspace(&ws, false).unwrap();

        match status(&ws) {
            WorkspaceStatus::Initialized { root, meta } => {
                assert_eq!(root, ws.canonicalize().unwrap());
                assert_eq!(meta, root.join(".pecko"));
            }
            WorkspaceStatus::NotInitialized => panic!("expected an initialized workspace"),
        }
        assert_eq!(status(&plain), WorkspaceStatus::NotInitialized);
    }

    #[test]
    fn test_transcript_dir_requires_init() {
        let dir = tempdir().unwrap();

        assert_eq!(transcript_dir(dir.path()), None);
        assert!(!metadata_dir(dir.path()).exists());
        assert_eq!(status(dir.path()), WorkspaceStatus::NotInitialized);

        init_workspace(dir.path(), false).unwrap();
        assert_eq!(transcript_dir(dir.path()), Some(logs_dir(dir.path())));
    }

    #[test]
    fn test_init_missing_root() {
        let dir = tempdir().unwrap();
        let err = init_workspace(&dir.path().join("missing"), false).unwrap_err();
        assert!(matches!(err, WorkspaceError::Resolve { .. }));
    }
}
