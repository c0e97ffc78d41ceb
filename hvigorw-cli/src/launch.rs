//! Child process delegation.
//!
//! The launcher hands the terminal to the vendored tool: stdio is inherited,
//! the working directory is the project root, and the child's exit code is
//! relayed untouched. The existence check happens before any spawn.

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};

use crate::config::WrapperConfig;
use crate::project::Project;

/// Diagnostic printed when the vendored tool is absent.
pub const MISSING_HVIGOR_MSG: &str = "hvigor not found. Please run \"npm install\" first.";

/// Outcome of a launch attempt.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// The child ran to completion; carries the exit code to relay.
    Exited(i32),
    /// The vendored entry script was absent; nothing was spawned.
    MissingHvigor,
}

impl LaunchOutcome {
    /// Exit code the wrapper process should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Exited(code) => *code,
            LaunchOutcome::MissingHvigor => 1,
        }
    }
}

/// Run the vendored tool with `args` forwarded verbatim, in order.
pub fn launch(
    project: &Project,
    config: &WrapperConfig,
    args: &[OsString],
) -> Result<LaunchOutcome> {
    let entry = project.hvigor_entry(config);
    if !entry.is_file() {
        return Ok(LaunchOutcome::MissingHvigor);
    }

    let node = config.node_bin();
    log::debug!(
        "delegating to {} {} (cwd {})",
        node.display(),
        entry.display(),
        project.root().display()
    );

    let status = Command::new(&node)
        .arg(&entry)
        .args(args)
        .current_dir(project.root())
        .status()
        .with_context(|| format!("Failed to execute {}", node.display()))?;

    Ok(LaunchOutcome::Exited(relay_code(status)))
}

/// Map the child's exit status to the wrapper's exit code. A signal-killed
/// child maps to 128 + signal on Unix; an abnormal exit without a code is 1.
fn relay_code(status: ExitStatus) -> i32 {
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

    1
}
