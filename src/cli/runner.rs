use anyhow::Result;
use clap::Parser;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::{config, logging};

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = config::Config::load()?;
    let url_file = cli.urls.unwrap_or_else(|| config.url_file());

    match cli.command {
        Commands::Play { minutes } => {
            logging::init(None)?;
            cmd_play(&config, &url_file, minutes)
        }
        Commands::Daily { time, duration } => {
            logging::init(config.daemon.logs_dir.as_deref())?;
            cmd_daily(&config, &url_file, &time, duration).await
        }
        Commands::Schedule { file } => {
            logging::init(config.daemon.logs_dir.as_deref())?;
            let schedule_file = file.unwrap_or_else(config::Config::default_schedule_path);
            cmd_schedule(&config, &url_file, &schedule_file).await
        }
        Commands::Urls => cmd_urls(&url_file),
    }
}
