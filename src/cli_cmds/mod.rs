mod core;
mod daemon;

pub(crate) use self::core::{build_runner, build_waker, cmd_play, cmd_urls};
pub(crate) use daemon::{cmd_daily, cmd_schedule};
