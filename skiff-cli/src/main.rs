//! Skiff — command-line front-end for the skiff sync client.
//!
//! # Usage
//!
//! ```text
//! skiff init -c <confdir> -d <parent-dir>
//! skiff start [-c <confdir>]
//! skiff stop [-c <confdir>]
//! skiff list [-c <confdir>]
//! skiff status [-c <confdir>]
//! skiff download -l <repo-id> -s <server> -u <user> -p <password> [-d <dir>]
//! skiff sync -l <repo-id> -s <server> -u <user> -p <password> -d <folder>
//! skiff desync -d <folder>
//! skiff create -n <name> -t <description> -s <server> -u <user> -p <password>
//! ```
//!
//! The heavy lifting (transfer protocol, storage, conflict handling) lives in
//! the external `skiffnet` and `skiffd` daemons; this binary only validates
//! the config directory, launches the daemons, and forwards RPC/HTTP calls.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, desync::DesyncArgs, download::DownloadArgs, init::InitArgs,
    list::ListArgs, start::StartArgs, status::StatusArgs, stop::StopArgs, sync::SyncArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "skiff",
    version,
    about = "Command-line client for the skiff file-synchronization daemons",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new config directory for the daemons.
    Init(InitArgs),

    /// Start the network daemon, then the file-sync daemon.
    Start(StartArgs),

    /// Ask the running daemons to shut down.
    Stop(StopArgs),

    /// List local repositories.
    List(ListArgs),

    /// Show clone-task progress and per-repository sync status.
    Status(StatusArgs),

    /// Download a library from the server into the download directory.
    Download(DownloadArgs),

    /// Sync a library with an existing local folder.
    Sync(SyncArgs),

    /// Stop syncing the repository tied to a local folder.
    Desync(DesyncArgs),

    /// Create a new library on the server.
    Create(CreateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Start(args) => args.run(),
        Commands::Stop(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Status(args) => args.run(),
        Commands::Download(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::Desync(args) => args.run(),
        Commands::Create(args) => args.run(),
    }
}
