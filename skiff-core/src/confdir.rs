//! Config-directory validation and derived paths.
//!
//! # Layout
//!
//! ```text
//! ~/.skiffnet/                 (default config directory)
//!   skiffnet.conf              (network daemon config — presence checked only)
//!   skiff.ini                  (one line: absolute path of the data directory)
//!   skiffnet.sock              (network daemon RPC socket, while running)
//!   skiff.sock                 (file-sync daemon RPC socket, while running)
//! ```
//!
//! The first line of `skiff.ini` names the sync daemon's data directory; the
//! default download directory (the "worktree") is the `skiff/` sibling of
//! that data directory.
//!
//! All helpers take explicit root paths so tests never touch the real home
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, ConfigError};

pub const NET_CONF_FILE: &str = "skiffnet.conf";
pub const SYNC_INI_FILE: &str = "skiff.ini";
pub const NET_SOCKET: &str = "skiffnet.sock";
pub const SYNC_SOCKET: &str = "skiff.sock";

/// Directory name created under `--dir` by `skiff init` to hold daemon data.
pub const DATA_DIR_NAME: &str = "skiff-data";
/// Sibling of the data directory used as the default download directory.
pub const WORKTREE_DIR_NAME: &str = "skiff";

/// `<home>/.skiffnet` — pure, no I/O.
pub fn default_conf_dir(home: &Path) -> PathBuf {
    home.join(".skiffnet")
}

/// `default_conf_dir` convenience wrapper over `dirs::home_dir()`.
pub fn default_conf_dir_from_env() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    Ok(default_conf_dir(&home))
}

/// A validated config directory with its two derived paths.
///
/// Returned by [`ConfDir::validate`] and threaded through command handlers;
/// nothing here is process-global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfDir {
    pub root: PathBuf,
    /// Data directory of the file-sync daemon (first line of `skiff.ini`).
    pub data_dir: PathBuf,
    /// Default download directory: `<data_dir>/../skiff`.
    pub worktree: PathBuf,
}

impl ConfDir {
    /// Validates `root` and derives `data_dir` and `worktree`.
    ///
    /// Fails when the directory or either required file is missing, when
    /// `skiff.ini` is unreadable or empty, or when the recorded data
    /// directory has no parent.
    pub fn validate(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ConfigError::DirNotFound { path: root });
        }

        let net_conf = root.join(NET_CONF_FILE);
        if !net_conf.is_file() {
            return Err(ConfigError::MissingFile { path: net_conf });
        }

        let ini = root.join(SYNC_INI_FILE);
        if !ini.is_file() {
            return Err(ConfigError::MissingFile { path: ini });
        }

        let contents = fs::read_to_string(&ini).map_err(|e| io_err(&ini, e))?;
        let first_line = contents.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return Err(ConfigError::EmptyDataDirLine { path: ini });
        }

        let data_dir = PathBuf::from(first_line);
        let parent = data_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ConfigError::NoWorktreeParent {
                path: data_dir.clone(),
            })?;
        let worktree = parent.join(WORKTREE_DIR_NAME);

        Ok(Self {
            root,
            data_dir,
            worktree,
        })
    }

    pub fn net_socket(&self) -> PathBuf {
        self.root.join(NET_SOCKET)
    }

    pub fn sync_socket(&self) -> PathBuf {
        self.root.join(SYNC_SOCKET)
    }

    pub fn sync_ini(&self) -> PathBuf {
        self.root.join(SYNC_INI_FILE)
    }
}

/// Writes `skiff.ini` recording `data_dir` inside a freshly initialized
/// config directory. Used by `skiff init` after the network daemon's setup
/// tool has created the directory.
pub fn write_sync_ini(root: &Path, data_dir: &Path) -> Result<(), ConfigError> {
    let ini = root.join(SYNC_INI_FILE);
    fs::write(&ini, format!("{}\n", data_dir.display())).map_err(|e| io_err(&ini, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
