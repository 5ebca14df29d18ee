//! Daily scheduler: fires playback sessions at fixed wall-clock times.
//!
//! Each schedule entry is a `(HH:MM, duration-in-minutes)` pair, loaded once
//! at startup and bound into its own immutable binding at registration. The
//! scheduler is a plain poll loop: check which bindings are due, fire them
//! sequentially in registration order, sleep, repeat. Precision is minute
//! granularity at best; a fired callback may run slightly after its boundary.
//!
//! The clock is injected so tests can advance time without sleeping.

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot read schedule file {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid schedule file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid schedule time {time:?}, expected 24-hour HH:MM")]
    InvalidTime { time: String },
    #[error("schedule duration must be a positive number of minutes")]
    InvalidDuration,
}

/// One `(time-of-day, duration)` pair as written in the schedule file.
/// Both fields are required; a missing field fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    pub time: String,
    pub duration: u64,
}

/// The full schedule configuration: `{"schedules": [{"time": .., "duration": ..}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSet {
    pub schedules: Vec<ScheduleEntry>,
}

impl ScheduleSet {
    /// Load and parse the JSON schedule file. Any failure here is fatal at
    /// startup; schedules are never re-read while running.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let data = fs::read_to_string(path).map_err(|source| ScheduleError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ScheduleError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Wall-clock access for the poll loop, injectable for tests.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep(&self, duration: Duration);
}

/// Local time and real sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A registered schedule entry. The duration is captured here, per binding,
/// at registration; bindings never share state.
#[derive(Debug, Clone)]
struct Binding {
    time: NaiveTime,
    duration_minutes: u64,
    last_fired: Option<NaiveDate>,
}

pub struct Scheduler {
    bindings: Vec<Binding>,
    poll_interval: Duration,
}

fn parse_time(time: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| ScheduleError::InvalidTime {
        time: time.to_string(),
    })
}

impl Scheduler {
    /// Validate and register the entries. An entry whose time already passed
    /// on the start day waits until the next day, matching a scheduler that
    /// only fires on upcoming occurrences.
    pub fn new(
        entries: &[ScheduleEntry],
        start: NaiveDateTime,
        poll_interval: Duration,
    ) -> Result<Self, ScheduleError> {
        let mut bindings = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.duration == 0 {
                return Err(ScheduleError::InvalidDuration);
            }
            let time = parse_time(&entry.time)?;
            let last_fired = (start.time() >= time).then(|| start.date());

            bindings.push(Binding {
                time,
                duration_minutes: entry.duration,
                last_fired,
            });
        }

        Ok(Self {
            bindings,
            poll_interval,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Durations (in minutes) due at `now`, in registration order. Each
    /// binding fires at most once per calendar day. Entries registered for
    /// the identical time both fire, back to back.
    pub fn tick(&mut self, now: NaiveDateTime) -> Vec<u64> {
        let today = now.date();
        let mut due = Vec::new();

        for binding in &mut self.bindings {
            if binding.last_fired == Some(today) {
                continue;
            }
            if now.time() >= binding.time {
                binding.last_fired = Some(today);
                due.push(binding.duration_minutes);
            }
        }

        due
    }

    /// The poll loop. Fired callbacks run synchronously on this thread; while
    /// a session plays, no further triggers are evaluated. `on_fire` returning
    /// an error ends the loop (fatal paths such as an unreadable URL pool).
    pub fn run<C, F>(&mut self, clock: &C, running: &AtomicBool, mut on_fire: F) -> Result<()>
    where
        C: Clock,
        F: FnMut(u64) -> Result<()>,
    {
        while running.load(Ordering::SeqCst) {
            for duration_minutes in self.tick(clock.now()) {
                info!(duration_minutes, "schedule fired");
                on_fire(duration_minutes)?;
            }
            clock.sleep(self.poll_interval);
        }

        Ok(())
    }
}
