// gridstore-tools - platform/process.rs
//
// External command execution behind a trait, so the dumper can be driven
// by a recording runner in tests.

use crate::core::manifest::Invocation;
use std::io;
use std::process::Command;

/// Result of running one external command.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The command exited with status zero.
    Succeeded,
    /// The command ran but exited non-zero, or was killed by a signal
    /// (`code` is `None`).
    ExitedWithFailure { code: Option<i32> },
    /// The command could not be started.
    SpawnFailed { error: io::Error },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Runs an invocation to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> CommandOutcome;
}

/// Runs invocations as real child processes, inheriting stdio and blocking
/// until each child exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> CommandOutcome {
        tracing::debug!(command = %invocation.display(), "Spawning");
        match Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
        {
            Ok(status) if status.success() => CommandOutcome::Succeeded,
            Ok(status) => CommandOutcome::ExitedWithFailure {
                code: status.code(),
            },
            Err(error) => CommandOutcome::SpawnFailed { error },
        }
    }
}
