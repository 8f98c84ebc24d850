//! Error types for skiff-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while locating or validating a config directory.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory itself does not exist (or is not a directory).
    #[error("config directory not found at {path}")]
    DirNotFound { path: PathBuf },

    /// One of the two required config files is missing.
    #[error("required config file missing: {path}")]
    MissingFile { path: PathBuf },

    /// `skiff.ini` exists but its first line does not name a data directory.
    #[error("no data directory recorded in {path}")]
    EmptyDataDirLine { path: PathBuf },

    /// The recorded data directory has no parent, so no worktree can be derived.
    #[error("cannot derive worktree from data directory {path}")]
    NoWorktreeParent { path: PathBuf },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.skiffnet`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}

/// Errors from spawning or waiting on the external daemon executables.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The executable could not be spawned at all (typically not on PATH).
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited non-zero; stderr is included when captured.
    #[error("{program} exited with {status}: {stderr}")]
    Exited {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}
