use std::path::PathBuf;

use thiserror::Error;

/// Error surface of the daemon RPC façade.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The daemon answered, but with an error string or a malformed payload.
    #[error("daemon error: {0}")]
    Daemon(String),

    #[error("daemon is not running (socket missing: {socket})")]
    DaemonNotRunning { socket: PathBuf },
}

impl RpcError {
    /// True for the transport class of failures: the socket is gone or the
    /// connection broke. `skiff stop` ignores exactly this class, since the
    /// daemon may legitimately already be down; daemon-reported errors are
    /// never transport errors.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RpcError::DaemonNotRunning { .. } | RpcError::Io { .. }
        )
    }
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RpcError {
    RpcError::Io {
        path: path.into(),
        source,
    }
}
