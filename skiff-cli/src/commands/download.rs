//! `skiff download` — fetch server metadata, then hand off to the daemon.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use skiff_api::{ApiClient, DownloadInfo};
use skiff_core::{CloneSpec, RepoId};
use skiff_rpc::SyncClient;

/// Download a library from the server into the download directory.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,

    /// Id of the library to download.
    #[arg(long, short = 'l', value_name = "ID")]
    pub library: String,

    /// Server URL, e.g. https://sync.example.com.
    #[arg(long, short = 's', value_name = "URL")]
    pub server: String,

    /// Account username.
    #[arg(long, short = 'u')]
    pub username: String,

    /// Account password.
    #[arg(long, short = 'p')]
    pub password: String,

    /// Download directory (default: the config's worktree directory).
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Passphrase of an encrypted library.
    #[arg(long = "libpasswd", short = 'e', value_name = "PASSWORD")]
    pub libpasswd: Option<String>,
}

impl DownloadArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;

        // Server round-trips come first so a failed login or malformed
        // response never reaches the daemon.
        let info = fetch_info(&self.server, &self.username, &self.password, &self.library)?;

        let destination = self.dir.unwrap_or_else(|| conf.worktree.clone());
        let spec = clone_spec(&self.library, info, destination, self.libpasswd)?;

        SyncClient::new(&conf)
            .download(&spec)
            .context("daemon rejected the download")?;

        println!(
            "Starting to download '{}' into {}",
            spec.repo_name,
            spec.destination.display()
        );
        Ok(())
    }
}

/// Authenticates and fetches the transfer parameters for `library`.
pub(super) fn fetch_info(
    server: &str,
    username: &str,
    password: &str,
    library: &str,
) -> Result<DownloadInfo> {
    let api = ApiClient::new(server);
    let token = api
        .auth_token(username, password)
        .with_context(|| format!("login to {server} failed"))?;
    api.download_info(&token.token, library)
        .with_context(|| format!("cannot fetch download info for library {library}"))
}

/// Builds the daemon-side clone parameters from the server's metadata.
pub(super) fn clone_spec(
    library: &str,
    info: DownloadInfo,
    destination: PathBuf,
    libpasswd: Option<String>,
) -> Result<CloneSpec> {
    if info.encrypted && libpasswd.is_none() {
        bail!(
            "library '{}' is encrypted; supply --libpasswd",
            info.repo_name
        );
    }

    Ok(CloneSpec {
        repo_id: RepoId::from(library),
        repo_name: info.repo_name,
        relay_addr: info.relay_addr,
        relay_port: info.relay_port,
        destination,
        clone_token: info.token,
        email: info.email,
        passphrase: libpasswd,
        magic: info.magic,
        enc_version: info.enc_version,
        random_key: info.random_key,
    })
}
