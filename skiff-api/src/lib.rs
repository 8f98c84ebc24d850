//! HTTP client for the sync server's web API.
//!
//! Three endpoints, all synchronous, none retried:
//! - `POST /api2/auth-token/` — username/password to bearer token
//! - `GET /api2/repos/<id>/download-info/` — transfer parameters for a clone
//! - `POST /api2/repos/` — create a library server-side

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{AuthToken, CreatedRepo, DownloadInfo};
