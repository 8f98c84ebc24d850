//! `skiff start [-c <confdir>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skiff_core::Launcher;

/// Start the network daemon, then the file-sync daemon.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,
}

impl StartArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;
        Launcher::new()
            .start(&conf)
            .context("failed to start daemons")?;
        println!("✓ Daemons started");
        Ok(())
    }
}
