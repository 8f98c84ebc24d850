//! Typed clients for the two daemon sockets.
//!
//! Each method marshals its arguments, sends one request, and decodes the
//! response into the `skiff-core` record types. The daemons own all logic.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use skiff_core::{
    CheckoutProgress, CloneSpec, CloneTask, ConfDir, Repo, RepoId, SyncTask, TransferProgress,
};

use crate::error::RpcError;
use crate::transport::{send_request, RpcRequest};

/// Client for the file-sync daemon (`skiff.sock`).
#[derive(Debug, Clone)]
pub struct SyncClient {
    socket: PathBuf,
}

impl SyncClient {
    pub fn new(conf: &ConfDir) -> Self {
        Self {
            socket: conf.sync_socket(),
        }
    }

    /// Client bound to an explicit socket path; used in tests.
    pub fn at(socket: impl Into<PathBuf>) -> Self {
        Self {
            socket: socket.into(),
        }
    }

    pub fn list_repos(&self) -> Result<Vec<Repo>, RpcError> {
        self.call("list-repos", Value::Null)
    }

    /// Begins a download into a fresh working tree under the download dir.
    pub fn download(&self, spec: &CloneSpec) -> Result<(), RpcError> {
        let params = serde_json::to_value(spec)?;
        self.notify("download", params)
    }

    /// Begins a clone into an existing folder.
    pub fn clone_repo(&self, spec: &CloneSpec) -> Result<(), RpcError> {
        let params = serde_json::to_value(spec)?;
        self.notify("clone", params)
    }

    pub fn remove_repo(&self, id: &RepoId) -> Result<(), RpcError> {
        self.notify("remove-repo", json!({ "repo_id": id }))
    }

    pub fn clone_tasks(&self) -> Result<Vec<CloneTask>, RpcError> {
        self.call("clone-tasks", Value::Null)
    }

    pub fn transfer_progress(&self, id: &RepoId) -> Result<Option<TransferProgress>, RpcError> {
        self.call("transfer-progress", json!({ "repo_id": id }))
    }

    pub fn checkout_progress(&self, id: &RepoId) -> Result<Option<CheckoutProgress>, RpcError> {
        self.call("checkout-progress", json!({ "repo_id": id }))
    }

    pub fn sync_task(&self, id: &RepoId) -> Result<Option<SyncTask>, RpcError> {
        self.call("sync-task", json!({ "repo_id": id }))
    }

    /// Whether the daemon's global auto-sync toggle is on.
    pub fn auto_sync_enabled(&self) -> Result<bool, RpcError> {
        self.call("auto-sync-enabled", Value::Null)
    }

    fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let data = send_request(&self.socket, &RpcRequest::new(method, params))?;
        Ok(serde_json::from_value(data)?)
    }

    /// A call whose response payload carries no information.
    fn notify(&self, method: &str, params: Value) -> Result<(), RpcError> {
        send_request(&self.socket, &RpcRequest::new(method, params)).map(|_| ())
    }
}

/// Client for the network daemon (`skiffnet.sock`).
#[derive(Debug, Clone)]
pub struct NetClient {
    socket: PathBuf,
}

impl NetClient {
    pub fn new(conf: &ConfDir) -> Self {
        Self {
            socket: conf.net_socket(),
        }
    }

    /// Client bound to an explicit socket path; used in tests.
    pub fn at(socket: impl Into<PathBuf>) -> Self {
        Self {
            socket: socket.into(),
        }
    }

    /// Whether the given relay peer is connected and ready for transfers.
    pub fn peer_ready(&self, peer_id: &str) -> Result<bool, RpcError> {
        let data = send_request(
            &self.socket,
            &RpcRequest::new("peer-ready", json!({ "peer_id": peer_id })),
        )?;
        Ok(serde_json::from_value(data)?)
    }

    /// Asks the network daemon to shut the client down (both daemons).
    pub fn shutdown(&self) -> Result<(), RpcError> {
        send_request(&self.socket, &RpcRequest::new("shutdown", Value::Null)).map(|_| ())
    }
}
