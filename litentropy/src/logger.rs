//! Logger initialization for the litentropy binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` once per process.
///
/// An explicit `level` wins over `RUST_LOG`; without one, `RUST_LOG` is
/// honoured and falls back to `info`. Repeated calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);

    let _ = builder.try_init();
}

/// Maps the global `--quiet` / `--debug` flags to an explicit level.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    match (quiet, debug) {
        (true, _) => Some(LevelFilter::Off),
        (false, true) => Some(LevelFilter::Debug),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn init_is_idempotent() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
    }
}
