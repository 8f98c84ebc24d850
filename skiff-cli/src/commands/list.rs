//! `skiff list [-c <confdir>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use skiff_rpc::SyncClient;

/// List local repositories.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,
}

#[derive(Tabled)]
struct RepoRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "path")]
    path: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;
        let repos = SyncClient::new(&conf)
            .list_repos()
            .context("failed to list repositories")?;

        if repos.is_empty() {
            println!("No repositories yet. Run `skiff download` or `skiff sync` first.");
            return Ok(());
        }

        let rows: Vec<RepoRow> = repos
            .into_iter()
            .map(|repo| RepoRow {
                name: repo.name,
                id: repo.id.to_string(),
                path: repo.worktree.display().to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
