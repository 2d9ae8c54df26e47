//! Plugin process execution.
//!
//! All OS-specific process handling sits behind [`ProcessRunner`]. The
//! dispatcher owns exactly one runner and starts at most one child per
//! invocation, waiting for it without a timeout.
//!
//! Interrupts are not intercepted: the child runs in the dispatcher's
//! foreground process group, so a terminal Ctrl-C reaches both.

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::error::{DevError, ErrorCode, Result};

/// Spawns a resolved plugin and waits for it.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    /// Run `executable` with `args`, inheriting stdio, and block until it
    /// exits.
    ///
    /// Returns the child's normalized exit code (see [`exit_code`]). Fails
    /// with [`DevError::Spawn`] only when the child could not be created.
    fn spawn(&self, executable: &Path, args: &[String]) -> Result<i32>;
}

/// The real runner, backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn spawn(&self, executable: &Path, args: &[String]) -> Result<i32> {
        debug!(executable = %executable.display(), args = ?args, "Spawning plugin");

        let status = Command::new(executable)
            .args(args)
            .status()
            .map_err(|source| DevError::Spawn {
                path: executable.to_path_buf(),
                source,
            })?;

        let code = exit_code(status);
        info!(executable = %executable.display(), code, "Plugin exited");
        Ok(code)
    }
}

/// Normalize a child's termination state into a single exit code.
///
/// A normal exit yields its own code. On Unix a child killed by a signal
/// yields `128 + signal`, as shells report it. Anything else is a general
/// failure.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ErrorCode::General.code()
}
