//! `skiff sync` — clone a library into an existing local folder.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skiff_rpc::SyncClient;

use super::download::{clone_spec, fetch_info};

/// Sync a library with an existing local folder.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,

    /// Id of the library to sync.
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

    /// Existing local folder to sync the library with.
    #[arg(long, short = 'd', value_name = "DIR")]
    pub folder: PathBuf,

    /// Passphrase of an encrypted library.
    #[arg(long = "libpasswd", short = 'e', value_name = "PASSWORD")]
    pub libpasswd: Option<String>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;

        let folder = self
            .folder
            .canonicalize()
            .with_context(|| format!("folder {} not found", self.folder.display()))?;

        let info = fetch_info(&self.server, &self.username, &self.password, &self.library)?;
        let spec = clone_spec(&self.library, info, folder, self.libpasswd)?;

        SyncClient::new(&conf)
            .clone_repo(&spec)
            .context("daemon rejected the clone")?;

        println!(
            "Starting to sync '{}' with {}",
            spec.repo_name,
            spec.destination.display()
        );
        Ok(())
    }
}
