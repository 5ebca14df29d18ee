//! External media player invocation.
//!
//! One playback attempt is one synchronous player process: started with a
//! hard end cap, awaited until the content ends or the cap is hit, measured
//! by wall clock. The process handle never outlives the attempt.

use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to launch player: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("player exited with status {code}")]
    Exit { code: i32 },
}

/// One bounded playback of a single URL.
///
/// Blocks for up to `max_duration_secs` seconds and reports the measured
/// wall-clock time of the attempt. The cap is handed to the player verbatim,
/// never clamped or adjusted here.
pub trait MediaRunner {
    fn run(&self, url: &str, max_duration_secs: u64) -> Result<Duration, PlaybackError>;
}

/// mpv-backed runner. `--end` bounds the attempt to the remaining budget.
#[derive(Debug, Clone)]
pub struct MpvRunner {
    pub program: PathBuf,
    pub fullscreen: bool,
    pub extra_args: Vec<String>,
}

impl MpvRunner {
    pub fn new(program: PathBuf, fullscreen: bool, extra_args: Vec<String>) -> Self {
        Self {
            program,
            fullscreen,
            extra_args,
        }
    }
}

impl MediaRunner for MpvRunner {
    fn run(&self, url: &str, max_duration_secs: u64) -> Result<Duration, PlaybackError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--really-quiet")
            .arg(format!("--end={}", max_duration_secs));

        if self.fullscreen {
            cmd.arg("--fullscreen");
        }

        cmd.args(&self.extra_args).arg(url);

        let started = Instant::now();
        let status = cmd.status()?;
        let elapsed = started.elapsed();

        if !status.success() {
            return Err(PlaybackError::Exit {
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_on_missing_binary() {
        let runner = MpvRunner::new(
            PathBuf::from("/nonexistent/showtime_test_mpv"),
            false,
            Vec::new(),
        );
        match runner.run("https://example.com/video", 10) {
            Err(PlaybackError::Spawn(_)) => {}
            other => panic!("expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn nonzero_exit_is_playback_error() {
        // `false` exits 1 regardless of arguments.
        let runner = MpvRunner::new(PathBuf::from("false"), false, Vec::new());
        match runner.run("https://example.com/video", 10) {
            Err(PlaybackError::Exit { code }) => assert_eq!(code, 1),
            other => panic!("expected Exit error, got {:?}", other),
        }
    }

    #[test]
    fn successful_exit_reports_elapsed() {
        // `true` exits 0 immediately; elapsed is tiny but present.
        let runner = MpvRunner::new(PathBuf::from("true"), true, Vec::new());
        let elapsed = runner.run("https://example.com/video", 10).unwrap();
        assert!(elapsed < Duration::from_secs(5));
    }
}
