//! Logger setup for the viewer binary.
//!
//! Library code only talks to the `log` facade; installing a backend is left
//! to the host.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level shown for a given number of `-v` flags: none is `info`, one is
/// `debug` (per-frame counters), two or more is `trace`.
pub fn level_for_verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` takes precedence when set; otherwise records at `level` and
/// above are printed. Does nothing if a logger is already installed.
pub fn init_logging(level: LevelFilter) {
    let env = Env::default().default_filter_or(level.as_str());
    let installed = Builder::from_env(env)
        .format_timestamp_millis()
        .format_target(false)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logger installed, default level {}", level);
    }
}
