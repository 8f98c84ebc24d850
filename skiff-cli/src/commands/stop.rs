//! `skiff stop [-c <confdir>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skiff_rpc::NetClient;

/// Ask the running daemons to shut down.
#[derive(Args, Debug)]
pub struct StopArgs {
    /// Config directory (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,
}

impl StopArgs {
    pub fn run(self) -> Result<()> {
        let conf = super::validated_conf(self.confdir)?;

        // Shutdown races with a daemon that is already gone: transport-class
        // failures (socket missing, connection refused/reset, socket I/O)
        // are expected here and ignored. An error the daemon itself reports
        // still propagates.
        match NetClient::new(&conf).shutdown() {
            Ok(()) => println!("✓ Daemons stopped"),
            Err(err) if err.is_transport() => println!("Daemons are not running"),
            Err(err) => return Err(err).context("failed to stop daemons"),
        }
        Ok(())
    }
}
