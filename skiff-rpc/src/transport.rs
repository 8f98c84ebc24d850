//! JSON newline-delimited request/response over a Unix stream socket.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{io_err, RpcError};

/// One request line: `{"method": ..., "params": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub params: Value,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// One response line: `{"ok": bool, "data"?: ..., "error"?: ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RpcResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Sends one request to the daemon socket and returns the `data` payload of
/// a successful response. A daemon-reported error becomes [`RpcError::Daemon`].
pub fn send_request(socket: &Path, request: &RpcRequest) -> Result<Value, RpcError> {
    if !socket.exists() {
        return Err(RpcError::DaemonNotRunning {
            socket: socket.to_path_buf(),
        });
    }

    debug!(method = %request.method, socket = %socket.display(), "rpc request");

    let mut stream = UnixStream::connect(socket).map_err(|err| {
        if matches!(
            err.kind(),
            std::io::ErrorKind::NotFound
                | std::io::ErrorKind::ConnectionRefused
                | std::io::ErrorKind::ConnectionReset
        ) {
            RpcError::DaemonNotRunning {
                socket: socket.to_path_buf(),
            }
        } else {
            io_err(socket, err)
        }
    })?;

    let payload = serde_json::to_string(request)?;
    stream
        .write_all(payload.as_bytes())
        .map_err(|e| io_err(socket, e))?;
    stream.write_all(b"\n").map_err(|e| io_err(socket, e))?;
    stream.flush().map_err(|e| io_err(socket, e))?;

    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| io_err(socket, e))?;
    if read == 0 {
        return Err(RpcError::Daemon(
            "daemon closed connection before responding".to_string(),
        ));
    }

    let response: RpcResponse = serde_json::from_str(line.trim_end())?;
    if response.ok {
        Ok(response.data.unwrap_or(Value::Null))
    } else {
        Err(RpcError::Daemon(response.error.unwrap_or_else(|| {
            "unknown daemon error".to_string()
        })))
    }
}
