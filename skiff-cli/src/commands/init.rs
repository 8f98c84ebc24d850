//! `skiff init -c <confdir> -d <parent-dir>`

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use skiff_core::confdir::{write_sync_ini, DATA_DIR_NAME};
use skiff_core::Launcher;

/// Create a new config directory for the daemons.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Config directory to create (default: ~/.skiffnet).
    #[arg(long, short = 'c', value_name = "DIR")]
    pub confdir: Option<PathBuf>,

    /// Existing parent directory; the daemon data directory is created
    /// underneath it as `skiff-data`.
    #[arg(long, short = 'd', value_name = "DIR")]
    pub dir: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let conf_root = super::resolve_confdir(self.confdir)?;
        if conf_root.exists() {
            bail!(
                "config directory {} already exists; refusing to overwrite",
                conf_root.display()
            );
        }

        let parent = self
            .dir
            .canonicalize()
            .with_context(|| format!("parent directory {} not found", self.dir.display()))?;

        Launcher::new()
            .init_net_config(&conf_root)
            .context("network daemon setup failed")?;

        let data_dir = parent.join(DATA_DIR_NAME);
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("cannot create data directory {}", data_dir.display()))?;
        write_sync_ini(&conf_root, &data_dir).context("cannot record data directory")?;

        println!("✓ Initialized config directory {}", conf_root.display());
        println!("  Data directory: {}", data_dir.display());
        Ok(())
    }
}
