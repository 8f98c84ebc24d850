//! Typed payloads of the web API.
//!
//! The server is loose about scalar encodings (ports arrive as strings or
//! numbers, flags as booleans or 0/1), so the deserializers here normalize
//! at the boundary and the rest of the workspace sees plain Rust types.

use serde::{Deserialize, Deserializer, Serialize};

/// `POST /api2/auth-token/` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

/// `GET /api2/repos/<id>/download-info/` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadInfo {
    pub relay_addr: String,
    #[serde(deserialize_with = "port_from_string_or_number")]
    pub relay_port: u16,
    pub email: String,
    /// One-time clone token, distinct from the session bearer token.
    pub token: String,
    pub repo_name: String,
    #[serde(default, deserialize_with = "flag_from_bool_or_number")]
    pub encrypted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc_version: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_key: Option<String>,
}

/// `POST /api2/repos/` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRepo {
    pub repo_id: String,
    pub repo_name: String,
}

fn port_from_string_or_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }

    match PortRepr::deserialize(deserializer)? {
        PortRepr::Number(port) => Ok(port),
        PortRepr::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn flag_from_bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagRepr {
        Bool(bool),
        Number(i64),
    }

    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(flag) => Ok(flag),
        FlagRepr::Number(n) => Ok(n != 0),
    }
}
