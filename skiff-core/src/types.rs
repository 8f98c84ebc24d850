//! Domain types shared across the skiff workspace.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Every record is a transient result of a single RPC or HTTP call and
//! is never mutated after creation.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque identifier of a repository/library tracked by the sync daemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId(pub String);

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Repository records
// ---------------------------------------------------------------------------

/// A repository known to the file-sync daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: RepoId,
    pub name: String,
    /// Absolute path of the local working tree.
    pub worktree: PathBuf,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default = "default_true")]
    pub auto_sync: bool,
    /// Peer id of the relay this repository transfers through.
    pub relay_id: String,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Task records
// ---------------------------------------------------------------------------

/// State tag of a daemon-side clone/checkout task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneState {
    Fetching,
    Checkout,
    Error,
    Done,
    /// Any state this build does not know about; rendered verbatim.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for CloneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloneState::Fetching => write!(f, "fetching"),
            CloneState::Checkout => write!(f, "checkout"),
            CloneState::Error => write!(f, "error"),
            CloneState::Done => write!(f, "done"),
            CloneState::Other(s) => s.fmt(f),
        }
    }
}

/// A clone/checkout task reported by the sync daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneTask {
    pub repo_id: RepoId,
    pub repo_name: String,
    pub state: CloneState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Block counters for a clone in the fetching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProgress {
    pub block_done: u64,
    pub block_total: u64,
}

/// File counters for a clone in the checkout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutProgress {
    pub finished_files: u64,
    pub total_files: u64,
}

/// Per-repository sync status reported by the sync daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTask {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Clone parameters
// ---------------------------------------------------------------------------

/// Full parameter set for the daemon-side clone/download operation.
///
/// `magic`, `enc_version`, and `random_key` are present only for encrypted
/// libraries, together with the user-supplied `passphrase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneSpec {
    pub repo_id: RepoId,
    pub repo_name: String,
    pub relay_addr: String,
    pub relay_port: u16,
    /// Where the working tree goes: an existing folder for `sync`, a
    /// directory to be created under the download dir for `download`.
    pub destination: PathBuf,
    /// One-time token from the server's download-info endpoint.
    pub clone_token: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enc_version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
