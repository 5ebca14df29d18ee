use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showtime")]
#[command(version)]
#[command(about = "Unattended scheduled video playback through mpv")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// URL pool file (newline-delimited, one URL per line)
    #[arg(short, long, global = true)]
    pub(crate) urls: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Play random URLs from the pool for the given number of minutes
    Play {
        /// Playback budget in minutes
        minutes: u64,
    },
    /// Run the daemon with a single daily schedule
    Daily {
        /// Time of day to start playback (24-hour HH:MM)
        #[arg(short, long)]
        time: String,

        /// Playback budget in minutes
        #[arg(short, long)]
        duration: u64,
    },
    /// Run the daemon with a JSON schedule set
    Schedule {
        /// Path to the schedule file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Validate and list the URL pool
    Urls,
}
