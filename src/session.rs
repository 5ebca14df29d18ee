//! Playback session controller: the timed playback-budget loop.
//!
//! A session turns a target duration into repeated bounded playback attempts:
//! wake the display, pick a random URL, run the player capped to the remaining
//! budget, accumulate the measured time, repeat until the budget is spent.
//! A single playback failure aborts the remaining budget for that session —
//! an erroring player usually means a broken environment (missing binary,
//! codec failure) that the next attempt would hit again.

use crate::player::MediaRunner;
use crate::pool;
use crate::wake::DisplayWake;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no playable URLs in the pool")]
    EmptyPool,
}

/// Run one playback session of `duration_minutes`.
///
/// Returns the total whole seconds actually played, which is at most the
/// target plus one attempt's overshoot (the budget is only checked between
/// attempts). A `PlaybackError` from the runner ends the session early; the
/// total played so far is still returned and the failure is only visible in
/// the log stream.
pub fn run_session(
    duration_minutes: u64,
    urls: &[String],
    runner: &dyn MediaRunner,
    waker: &dyn DisplayWake,
) -> Result<u64, SessionError> {
    let target_secs = duration_minutes * 60;
    let mut total_played_secs: u64 = 0;

    if urls.is_empty() {
        return Err(SessionError::EmptyPool);
    }

    info!(
        target_secs,
        pool_size = urls.len(),
        "starting playback session"
    );

    wake_display(waker);

    while total_played_secs < target_secs {
        let remaining_secs = target_secs - total_played_secs;
        info!(remaining_secs, "remaining playback budget");

        // Displays can sleep again between videos.
        wake_display(waker);

        let Some(url) = pool::pick_random(urls) else {
            break;
        };
        info!(url, "selected URL");

        match runner.run(url, remaining_secs) {
            Ok(elapsed) => {
                // Truncate to whole seconds before accumulating. The slight
                // under-count can cost one extra short attempt near the
                // boundary; that matches the intended behavior.
                total_played_secs += elapsed.as_secs();
                info!(
                    actual_secs = elapsed.as_secs(),
                    total_played_secs, "completed playback attempt"
                );
            }
            Err(e) => {
                error!(url, error = %e, "playback failed, aborting session");
                break;
            }
        }
    }

    info!(total_played_secs, "playback session finished");
    Ok(total_played_secs)
}

fn wake_display(waker: &dyn DisplayWake) {
    if let Err(e) = waker.wake() {
        warn!(error = %e, "display wake failed, continuing");
    }
}
