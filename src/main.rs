mod cli;
mod cli_cmds;
mod config;
mod logging;
mod player;
mod pool;
mod scheduler;
mod session;
mod wake;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
