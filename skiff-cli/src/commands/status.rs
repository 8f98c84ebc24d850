//! `skiff status [-c <confdir>]` — clone-task progress and per-repo sync state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skiff_core::{CloneState, CloneTask, Repo};
use skiff_rpc::{NetClient, SyncClient};

/// Show clone-task progress and per-repository sync status.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,
}

impl StatusArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;
        let sync = SyncClient::new(&conf);
        let net = NetClient::new(&conf);

        let tasks = sync.clone_tasks().context("failed to query clone tasks")?;
        println!("{:<40} {:<12} {}", "# Name", "Status", "Progress");
        for task in &tasks {
            // Finished tasks linger in the daemon's list; only live ones are shown.
            if matches!(task.state, CloneState::Done) {
                continue;
            }
            let progress = task_progress(&sync, task)
                .with_context(|| format!("failed to query progress for '{}'", task.repo_name))?;
            println!("{:<40} {:<12} {}", task.repo_name, task.state, progress);
        }

        let global_auto_sync = sync
            .auto_sync_enabled()
            .context("failed to query auto-sync setting")?;
        let repos = sync.list_repos().context("failed to list repositories")?;

        println!();
        println!("{:<40} {}", "# Name", "Status");
        for repo in &repos {
            let status = repo_status(&sync, &net, global_auto_sync, repo)
                .with_context(|| format!("failed to query status for '{}'", repo.name))?;
            println!("{:<40} {}", repo.name, status);
        }

        Ok(())
    }
}

fn task_progress(sync: &SyncClient, task: &CloneTask) -> Result<String> {
    let progress = match task.state {
        CloneState::Fetching => sync
            .transfer_progress(&task.repo_id)?
            .map(|p| format!("{}/{} blocks", p.block_done, p.block_total))
            .unwrap_or_default(),
        CloneState::Checkout => sync
            .checkout_progress(&task.repo_id)?
            .map(|p| format!("{}/{} files", p.finished_files, p.total_files))
            .unwrap_or_default(),
        CloneState::Error => task
            .error
            .clone()
            .unwrap_or_else(|| "unknown error".to_string()),
        // Done tasks never reach here; unknown states render with no progress.
        CloneState::Done | CloneState::Other(_) => String::new(),
    };
    Ok(progress)
}

/// One status word per repository. Precedence: auto-sync off (globally or for
/// this repo) beats relay readiness beats sync-task presence beats the
/// task's own error/state.
fn repo_status(
    sync: &SyncClient,
    net: &NetClient,
    global_auto_sync: bool,
    repo: &Repo,
) -> Result<String> {
    if !global_auto_sync || !repo.auto_sync {
        return Ok("auto sync disabled".to_string());
    }

    if !net.peer_ready(&repo.relay_id)? {
        return Ok("connecting server".to_string());
    }

    let status = match sync.sync_task(&repo.id)? {
        None => "initializing".to_string(),
        Some(task) if task.state == "error" => task
            .error
            .unwrap_or_else(|| "unknown error".to_string()),
        Some(task) => task.state,
    };
    Ok(status)
}
