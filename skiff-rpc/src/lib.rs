//! RPC façade over the two daemon sockets.
//!
//! Everything here is marshalling: one JSON request line in, one JSON
//! response line out, decoded into the typed records of `skiff-core`. No
//! retries, no timeouts, no logic of its own.

mod client;
mod error;
mod transport;

pub use client::{NetClient, SyncClient};
pub use error::RpcError;
pub use transport::{send_request, RpcRequest, RpcResponse};
