//! `skiff create` — create a new library on the server.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skiff_api::ApiClient;

/// Create a new library on the server.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,

    /// Name of the new library.
    #[arg(long, short = 'n')]
    pub name: String,

    /// Description of the new library.
    #[arg(long = "desc", short = 't', value_name = "TEXT")]
    pub description: String,

    /// Passphrase; makes the library encrypted.
    #[arg(long = "libpasswd", short = 'e', value_name = "PASSWORD")]
    pub libpasswd: Option<String>,

    /// Server URL, e.g. https://sync.example.com.
    #[arg(long, short = 's', value_name = "URL")]
    pub server: String,

    /// Account username.
    #[arg(long, short = 'u')]
    pub username: String,

    /// Account password.
    #[arg(long, short = 'p')]
    pub password: String,
}

impl CreateArgs {
    pub fn run(self) -> Result<()> {
        // The config directory is validated up front even though creation is
        // purely server-side, so a broken local setup surfaces here and not
        // on the next command.
        let _conf = super::validated_conf(self.confdir)?;

        let api = ApiClient::new(&self.server);
        let token = api
            .auth_token(&self.username, &self.password)
            .with_context(|| format!("login to {} failed", self.server))?;
        let created = api
            .create_repo(
                &token.token,
                &self.name,
                &self.description,
                self.libpasswd.as_deref(),
            )
            .with_context(|| format!("failed to create library '{}'", self.name))?;

        println!("✓ Created library '{}' ({})", created.repo_name, created.repo_id);
        Ok(())
    }
}
