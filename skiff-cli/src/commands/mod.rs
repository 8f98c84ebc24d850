//! One module per subcommand; each exposes an `Args` struct with a `run()`.

pub mod create;
pub mod desync;
pub mod download;
pub mod init;
pub mod list;
pub mod start;
pub mod status;
pub mod stop;
pub mod sync;

use std::path::PathBuf;

use anyhow::{Context, Result};

use skiff_core::confdir;
use skiff_core::ConfDir;

/// Resolves `-c/--confdir`, falling back to `~/.skiffnet`.
pub(crate) fn resolve_confdir(confdir: Option<PathBuf>) -> Result<PathBuf> {
    match confdir {
        Some(dir) => Ok(dir),
        None => confdir::default_conf_dir_from_env()
            .context("could not determine default config directory"),
    }
}

/// Resolves and validates the config directory, yielding its derived paths.
pub(crate) fn validated_conf(confdir: Option<PathBuf>) -> Result<ConfDir> {
    let root = resolve_confdir(confdir)?;
    ConfDir::validate(root.clone())
        .with_context(|| format!("invalid config directory {}", root.display()))
}
