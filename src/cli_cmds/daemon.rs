use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{build_runner, build_waker};
use crate::config::Config;
use crate::scheduler::{Clock, ScheduleEntry, ScheduleSet, Scheduler, SystemClock};
use crate::{pool, session};

/// Daemon with a single fixed daily schedule.
pub(crate) async fn cmd_daily(
    config: &Config,
    url_file: &Path,
    time: &str,
    duration: u64,
) -> Result<()> {
    let entries = vec![ScheduleEntry {
        time: time.to_string(),
        duration,
    }];
    run_daemon(config, url_file, &entries).await
}

/// Daemon driven by a JSON schedule set.
pub(crate) async fn cmd_schedule(
    config: &Config,
    url_file: &Path,
    schedule_file: &Path,
) -> Result<()> {
    let set = ScheduleSet::load(schedule_file)?;
    run_daemon(config, url_file, &set.schedules).await
}

async fn run_daemon(config: &Config, url_file: &Path, entries: &[ScheduleEntry]) -> Result<()> {
    let clock = SystemClock;
    let poll_interval = Duration::from_secs(config.daemon.poll_interval_secs);
    let mut scheduler = Scheduler::new(entries, clock.now(), poll_interval)?;

    println!("📺 showtime daemon");
    println!("   URL pool: {}", url_file.display());
    println!("   Player:   {}", config.player.program.display());
    for entry in entries {
        println!("   Schedule: {} for {} minute(s)", entry.time, entry.duration);
    }
    if scheduler.is_empty() {
        println!("   No schedules configured; the daemon will idle.");
    }
    println!("\n🔄 Running... (Ctrl+C to stop)\n");

    let running = Arc::new(AtomicBool::new(true));
    ctrlc_handler(running.clone());

    let runner = build_runner(config);
    let waker = build_waker(config);
    let url_file = url_file.to_path_buf();

    scheduler.run(&clock, &running, |duration_minutes| {
        // Re-read the pool for every session so edits to the file are picked
        // up without restarting the daemon. An unreadable or empty pool is
        // fatal and ends the daemon; a playback failure only ends the session.
        let urls = pool::load(&url_file)?;
        let total = session::run_session(duration_minutes, &urls, &runner, waker.as_ref())?;
        info!(total_played_secs = total, "scheduled session finished");
        Ok(())
    })?;

    println!("\n📺 Shutting down. Goodbye!");
    Ok(())
}

/// Flip the running flag on Ctrl+C so the poll loop exits at its next check.
/// A session already playing finishes its current attempt first.
fn ctrlc_handler(running: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            running.store(false, Ordering::SeqCst);
        }
    });
}
