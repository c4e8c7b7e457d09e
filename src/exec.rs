//! Child process helpers.
//!
//! External tools are opaque commands: spawn, let stdio stream straight to
//! the terminal, wait for the exit status. Nothing is captured.

use anyhow::{Context, Result};
use std::process::{Command, ExitStatus};

/// Run a tool with inherited stdio and wait for it to finish.
pub fn run_tool(program: &str, args: &[String]) -> Result<ExitStatus> {
    Command::new(program).args(args).status().with_context(|| {
        format!(
            "Failed to execute '{program}'.\n\n\
            💡 Tip: check that it is installed and on your PATH."
        )
    })
}

/// Exit code of a finished child, or 1 when it died to a signal.
pub fn exit_code(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
