use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::player::MpvRunner;
use crate::wake::{CommandWake, DisplayWake, NoopWake};
use crate::{pool, session};

pub(crate) fn build_runner(config: &Config) -> MpvRunner {
    MpvRunner::new(
        config.player.program.clone(),
        config.player.fullscreen,
        config.player.extra_args.clone(),
    )
}

pub(crate) fn build_waker(config: &Config) -> Box<dyn DisplayWake> {
    if config.wake.command.is_empty() {
        Box::new(NoopWake)
    } else {
        Box::new(CommandWake::new(config.wake.command.clone()))
    }
}

/// Run one playback session immediately.
pub(crate) fn cmd_play(config: &Config, url_file: &Path, minutes: u64) -> Result<()> {
    let urls = pool::load(url_file)?;
    let runner = build_runner(config);
    let waker = build_waker(config);

    let total = session::run_session(minutes, &urls, &runner, waker.as_ref())?;
    println!(
        "Played {} seconds of a {} second budget",
        total,
        minutes * 60
    );

    Ok(())
}

/// Validate the URL pool and list its entries.
pub(crate) fn cmd_urls(url_file: &Path) -> Result<()> {
    let urls = pool::load(url_file)?;

    for url in &urls {
        println!("{}", url);
    }
    println!("{} URL(s) in {}", urls.len(), url_file.display());

    Ok(())
}
