//! Synchronous `ureq` client for the three web API endpoints.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::types::{AuthToken, CreatedRepo, DownloadInfo};

/// Client bound to one server URL. Holds a connection-pooling agent; every
/// request blocks until the server answers or the transport fails.
#[derive(Debug, Clone)]
pub struct ApiClient {
    server: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// `server` is the base URL, e.g. `https://sync.example.com`; a trailing
    /// slash is tolerated.
    pub fn new(server: impl Into<String>) -> Self {
        let mut server = server.into();
        while server.ends_with('/') {
            server.pop();
        }
        Self {
            server,
            agent: ureq::agent(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server, path)
    }

    /// Exchanges username/password for a bearer token.
    pub fn auth_token(&self, username: &str, password: &str) -> Result<AuthToken, ApiError> {
        let url = self.endpoint("/api2/auth-token/");
        debug!(%url, username, "requesting auth token");

        let response = self
            .agent
            .post(&url)
            .send_form(&[("username", username), ("password", password)])
            .map_err(|err| match err {
                ureq::Error::Status(status, _) => ApiError::AuthFailed {
                    server: self.server.clone(),
                    username: username.to_string(),
                    status,
                },
                ureq::Error::Transport(transport) => ApiError::Transport {
                    url: url.clone(),
                    source: Box::new(transport),
                },
            })?;

        decode(&url, response)
    }

    /// Fetches the transfer parameters needed to clone `repo_id`.
    pub fn download_info(&self, token: &str, repo_id: &str) -> Result<DownloadInfo, ApiError> {
        let url = self.endpoint(&format!("/api2/repos/{repo_id}/download-info/"));
        debug!(%url, "requesting download info");

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Token {token}"))
            .call()
            .map_err(|err| status_or_transport(&url, err))?;

        decode(&url, response)
    }

    /// Creates a library server-side and returns its id.
    pub fn create_repo(
        &self,
        token: &str,
        name: &str,
        desc: &str,
        passwd: Option<&str>,
    ) -> Result<CreatedRepo, ApiError> {
        let url = self.endpoint("/api2/repos/");
        debug!(%url, name, "creating repository");

        let mut form: Vec<(&str, &str)> = vec![("name", name), ("desc", desc)];
        if let Some(passwd) = passwd {
            form.push(("passwd", passwd));
        }

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Token {token}"))
            .send_form(&form)
            .map_err(|err| status_or_transport(&url, err))?;

        decode(&url, response)
    }
}

fn status_or_transport(url: &str, err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, _) => ApiError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => ApiError::Transport {
            url: url.to_string(),
            source: Box::new(transport),
        },
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: ureq::Response) -> Result<T, ApiError> {
    response.into_json().map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned HTTP response, returning the request head.
    fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut head = Vec::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header");
                let trimmed = line.trim_end().to_string();
                if let Some(len) = trimmed
                    .to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(str::trim)
                {
                    content_length = len.parse().expect("content length");
                }
                if trimmed.is_empty() {
                    break;
                }
                head.push(trimmed);
            }
            let mut request_body = vec![0u8; content_length];
            reader.read_exact(&mut request_body).expect("read body");
            head.push(String::from_utf8_lossy(&request_body).into_owned());

            let mut stream = stream;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            head
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn auth_token_posts_form_and_decodes() {
        let (server, handle) =
            one_shot_server("HTTP/1.1 200 OK", r#"{"token":"abc123"}"#);

        let token = ApiClient::new(&server)
            .auth_token("u@example.com", "secret")
            .expect("auth");
        assert_eq!(token.token, "abc123");

        let head = handle.join().expect("server thread");
        assert!(head[0].starts_with("POST /api2/auth-token/ "));
        let body = head.last().expect("request body");
        assert!(body.contains("username=u%40example.com"));
        assert!(body.contains("password=secret"));
    }

    #[test]
    fn rejected_credentials_map_to_auth_failed() {
        let (server, handle) =
            one_shot_server("HTTP/1.1 403 Forbidden", r#"{"detail":"bad credentials"}"#);

        let err = ApiClient::new(&server)
            .auth_token("u@example.com", "wrong")
            .expect_err("must fail");
        match err {
            ApiError::AuthFailed { status, username, .. } => {
                assert_eq!(status, 403);
                assert_eq!(username, "u@example.com");
            }
            other => panic!("unexpected error: {other}"),
        }
        handle.join().expect("server thread");
    }

    #[test]
    fn download_info_sends_token_header() {
        let (server, handle) = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"relay_addr":"r.example.com","relay_port":"10001","email":"u@example.com","token":"once","repo_name":"notes"}"#,
        );

        let info = ApiClient::new(&server)
            .download_info("bearer-tok", "repo-1")
            .expect("download info");
        assert_eq!(info.relay_port, 10001);

        let head = handle.join().expect("server thread");
        assert!(head[0].starts_with("GET /api2/repos/repo-1/download-info/ "));
        assert!(head
            .iter()
            .any(|line| line.eq_ignore_ascii_case("authorization: Token bearer-tok")));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let (server, handle) = one_shot_server("HTTP/1.1 200 OK", "<html>not json</html>");

        let err = ApiClient::new(&server)
            .auth_token("u@example.com", "secret")
            .expect_err("must fail");
        assert!(matches!(err, ApiError::Decode { .. }));
        handle.join().expect("server thread");
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        // Bind then drop to find a port nothing listens on.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };

        let err = ApiClient::new(format!("http://127.0.0.1:{port}/"))
            .auth_token("u@example.com", "secret")
            .expect_err("must fail");
        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let client = ApiClient::new("https://sync.example.com//");
        assert_eq!(client.server(), "https://sync.example.com");
        assert_eq!(
            client.endpoint("/api2/repos/"),
            "https://sync.example.com/api2/repos/"
        );
    }
}
