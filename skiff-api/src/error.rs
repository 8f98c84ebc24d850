use thiserror::Error;

/// Error surface of the web API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token endpoint rejected the supplied credentials.
    #[error("authentication failed for {username} at {server} (HTTP {status})")]
    AuthFailed {
        server: String,
        username: String,
        status: u16,
    },

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection, TLS, or other transport-level failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The response body was not the JSON shape this client expects.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
