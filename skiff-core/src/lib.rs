//! Skiff core library — domain types, config-directory handling, daemon launcher.
//!
//! Public API surface:
//! - [`types`] — repository and task records shared across the workspace
//! - [`error`] — [`ConfigError`] and [`LaunchError`]
//! - [`confdir`] — config-directory validation and derived paths
//! - [`launcher`] — subprocess control for the two external daemons

pub mod confdir;
pub mod error;
pub mod launcher;
pub mod types;

pub use confdir::ConfDir;
pub use error::{ConfigError, LaunchError};
pub use launcher::Launcher;
pub use types::{
    CheckoutProgress, CloneSpec, CloneState, CloneTask, Repo, RepoId, SyncTask, TransferProgress,
};
