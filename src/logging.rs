//! Log stream setup.
//!
//! Components only emit `tracing` events; the subscriber is installed here,
//! once, by the binary. Daemon commands additionally write a timestamped
//! per-run log file so unattended boxes keep a playback record.

use anyhow::Result;
use chrono::Local;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init(logs_dir: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer());

    match logs_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let name = format!("showtime_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
            let file = File::create(dir.join(name))?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
                .init();
        }
        None => registry.init(),
    }

    Ok(())
}
