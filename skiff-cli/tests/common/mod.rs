//! Shared helpers for the CLI integration tests: a fake RPC daemon behind a
//! Unix socket, a canned HTTP server, stub daemon executables, and config
//! directory scaffolding.

#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::Value;
use skiff_rpc::{RpcRequest, RpcResponse};

pub fn skiff_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("skiff"))
}

/// Creates a well-formed config directory under `root`, returning its path.
/// The recorded data directory is `<root>/skiff-data`, so the derived
/// worktree is `<root>/skiff`.
pub fn make_conf_dir(root: &Path) -> PathBuf {
    let conf = root.join("conf");
    fs::create_dir_all(&conf).expect("create conf dir");
    fs::write(conf.join("skiffnet.conf"), "[General]\n").expect("write skiffnet.conf");
    fs::write(
        conf.join("skiff.ini"),
        format!("{}\n", root.join("skiff-data").display()),
    )
    .expect("write skiff.ini");
    conf
}

/// A fake daemon: accepts connections in a loop, answers each request via
/// the supplied handler, and records everything it sees.
pub struct FakeDaemon {
    requests: Arc<Mutex<Vec<RpcRequest>>>,
}

impl FakeDaemon {
    /// `handler` returns `Ok(data)` or `Err(message)` per request.
    pub fn spawn<F>(socket: PathBuf, handler: F) -> Self
    where
        F: Fn(&RpcRequest) -> Result<Value, String> + Send + 'static,
    {
        let listener = UnixListener::bind(&socket).expect("bind fake daemon socket");
        let requests: Arc<Mutex<Vec<RpcRequest>>> = Arc::default();
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut line = String::new();
                if reader.read_line(&mut line).is_err() || line.trim_end().is_empty() {
                    continue;
                }
                let request: RpcRequest =
                    serde_json::from_str(line.trim_end()).expect("request json");
                let response = match handler(&request) {
                    Ok(data) => RpcResponse::ok(data),
                    Err(message) => RpcResponse::error(message),
                };
                seen.lock().expect("requests lock").push(request);

                let mut stream = stream;
                let payload = serde_json::to_string(&response).expect("response json");
                stream.write_all(payload.as_bytes()).expect("write response");
                stream.write_all(b"\n").expect("write newline");
            }
        });

        Self { requests }
    }

    pub fn methods_seen(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("requests lock")
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

/// Serves one canned HTTP response per entry, on sequential connections.
/// Returns the base URL.
pub fn http_server(responses: Vec<(&'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind http server");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for (status_line, body) in responses {
            let Ok((stream, _)) = listener.accept() else { break };
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).is_err() {
                    return;
                }
                let trimmed = line.trim_end();
                if let Some(len) = trimmed
                    .to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(str::trim)
                {
                    content_length = len.parse().unwrap_or(0);
                }
                if trimmed.is_empty() {
                    break;
                }
            }
            let mut body_buf = vec![0u8; content_length];
            let _ = reader.read_exact(&mut body_buf);

            let mut stream = stream;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

/// Writes an executable shell script stub named `name` into `dir`.
pub fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path
}

/// PATH value that resolves the stub directory first.
pub fn stub_path(dir: &Path) -> String {
    let original = std::env::var("PATH").unwrap_or_default();
    format!("{}:{original}", dir.display())
}
