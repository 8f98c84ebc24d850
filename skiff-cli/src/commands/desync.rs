//! `skiff desync -d <folder>` — stop syncing the repository tied to a folder.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use skiff_rpc::SyncClient;

/// Stop syncing the repository tied to a local folder.
#[derive(Args, Debug)]
pub struct DesyncArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,

    /// Local folder whose repository should stop syncing.
    #[arg(long, short = 'd', value_name = "DIR")]
    pub folder: PathBuf,
}

impl DesyncArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;

        let folder = self
            .folder
            .canonicalize()
            .with_context(|| format!("folder {} not found", self.folder.display()))?;

        let client = SyncClient::new(&conf);
        let repos = client.list_repos().context("failed to list repositories")?;

        // Exact worktree match only; a folder inside a repository does not count.
        let Some(repo) = repos.into_iter().find(|r| r.worktree == folder) else {
            bail!("no repository syncs with {}", folder.display());
        };

        client
            .remove_repo(&repo.id)
            .with_context(|| format!("failed to desync '{}'", repo.name))?;

        println!("✓ Desynced '{}' ({})", repo.name, repo.id);
        Ok(())
    }
}
