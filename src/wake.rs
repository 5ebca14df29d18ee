//! Display wake capability.
//!
//! Best-effort only: the session controller calls `wake()` before and during
//! playback and absorbs every failure. The platform mechanism lives entirely
//! behind this trait, configured as an arbitrary command so the same binary
//! works with `xset dpms force on`, `swaymsg output * power on`, or whatever
//! the target box needs.

use anyhow::{bail, Context, Result};
use std::process::Command;

pub trait DisplayWake {
    fn wake(&self) -> Result<()>;
}

/// Runs a configured command to wake the output device.
#[derive(Debug, Clone)]
pub struct CommandWake {
    command: Vec<String>,
}

impl CommandWake {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl DisplayWake for CommandWake {
    fn wake(&self) -> Result<()> {
        let (program, args) = match self.command.split_first() {
            Some(parts) => parts,
            None => bail!("no wake command configured"),
        };

        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run wake command {}", program))?;

        if !status.success() {
            bail!("wake command {} exited with {}", program, status);
        }

        Ok(())
    }
}

/// Does nothing. Used when no wake command is configured, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWake;

impl DisplayWake for NoopWake {
    fn wake(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_wake_always_succeeds() {
        assert!(NoopWake.wake().is_ok());
    }

    #[test]
    fn empty_command_is_an_error() {
        assert!(CommandWake::new(Vec::new()).wake().is_err());
    }

    #[test]
    fn failing_command_is_an_error() {
        let waker = CommandWake::new(vec!["false".to_string()]);
        assert!(waker.wake().is_err());
    }

    #[test]
    fn succeeding_command_is_ok() {
        let waker = CommandWake::new(vec!["true".to_string()]);
        assert!(waker.wake().is_ok());
    }
}
