//! Subprocess control for the two external daemons.
//!
//! The daemons are opaque executables resolved from `PATH`: `skiffnet` (with
//! its `skiffnet-init` setup tool) and `skiffd`. Each invocation runs to
//! completion (the daemons fork themselves into the background) and a
//! non-zero exit status is fatal for the calling command.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use std::thread::sleep;
use std::time::Duration;

use crate::confdir::ConfDir;
use crate::error::LaunchError;

pub const NET_INIT_BIN: &str = "skiffnet-init";
pub const NET_DAEMON_BIN: &str = "skiffnet";
pub const SYNC_DAEMON_BIN: &str = "skiffd";

/// Overrides `LD_LIBRARY_PATH` in the daemons' environment when set.
pub const LD_LIBRARY_PATH_VAR: &str = "SKIFF_LD_LIBRARY_PATH";

/// Delay between starting the network daemon and the file-sync daemon,
/// giving the former time to bring up its socket.
const NET_DAEMON_SETTLE: Duration = Duration::from_secs(1);

/// Launches the daemon executables as subprocesses.
#[derive(Debug, Clone)]
pub struct Launcher {
    net_init_bin: OsString,
    net_daemon_bin: OsString,
    sync_daemon_bin: OsString,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            net_init_bin: NET_INIT_BIN.into(),
            net_daemon_bin: NET_DAEMON_BIN.into(),
            sync_daemon_bin: SYNC_DAEMON_BIN.into(),
        }
    }
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the executable names; used by tests with stub binaries.
    pub fn with_binaries(
        net_init: impl Into<OsString>,
        net_daemon: impl Into<OsString>,
        sync_daemon: impl Into<OsString>,
    ) -> Self {
        Self {
            net_init_bin: net_init.into(),
            net_daemon_bin: net_daemon.into(),
            sync_daemon_bin: sync_daemon.into(),
        }
    }

    /// Runs `skiffnet-init -c <root>` to create the network daemon's config.
    pub fn init_net_config(&self, conf_root: &Path) -> Result<(), LaunchError> {
        let mut cmd = Command::new(&self.net_init_bin);
        cmd.arg("-c").arg(conf_root);
        run_checked(&self.net_init_bin, cmd)
    }

    /// Starts the network daemon, waits [`NET_DAEMON_SETTLE`], then starts
    /// the file-sync daemon. A failed network daemon aborts the second
    /// launch entirely.
    pub fn start(&self, conf: &ConfDir) -> Result<(), LaunchError> {
        let mut net = Command::new(&self.net_daemon_bin);
        net.arg("--daemon").arg("-c").arg(&conf.root);
        run_checked(&self.net_daemon_bin, net)?;

        sleep(NET_DAEMON_SETTLE);

        let mut sync = Command::new(&self.sync_daemon_bin);
        sync.arg("--daemon")
            .arg("-c")
            .arg(&conf.root)
            .arg("-d")
            .arg(&conf.data_dir)
            .arg("-w")
            .arg(&conf.worktree);
        run_checked(&self.sync_daemon_bin, sync)
    }
}

fn run_checked(program: &OsString, mut cmd: Command) -> Result<(), LaunchError> {
    if let Ok(lib_path) = std::env::var(LD_LIBRARY_PATH_VAR) {
        cmd.env("LD_LIBRARY_PATH", lib_path);
    }

    let output = cmd.output().map_err(|source| LaunchError::Spawn {
        program: program.to_string_lossy().into_owned(),
        source,
    })?;

    if output.status.success() {
        return Ok(());
    }

    Err(LaunchError::Exited {
        program: program.to_string_lossy().into_owned(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests (unix: stub executables are shell scripts)
// ---------------------------------------------------------------------------
