//! Expansion log, written to stderr and filtered by the `CLOAKED_LOG` env var

use std::{
    env,
    io::{self, Write as _},
    sync::Once,
};

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use proc_macro_error::abort_call_site;

use crate::consts::LOG_ENV_VAR;

static LOGGER: StderrLogger = StderrLogger;
static INIT: Once = Once::new();

/// Level selected by `CLOAKED_LOG`, or the unrecognized value
static MAX_LEVEL: Lazy<Result<LevelFilter, String>> = Lazy::new(|| {
    let cloaked_log = env::var(LOG_ENV_VAR).ok();
    max_level(cloaked_log.as_deref()).map_err(|()| cloaked_log.unwrap_or_default())
});

/// Installs the logger with the level from `CLOAKED_LOG`, once per proc-macro server
///
/// Later calls leave the logger and its level untouched.
pub(crate) fn init() {
    let level = match &*MAX_LEVEL {
        Ok(level) => *level,
        Err(value) => abort_call_site!("unknown log level `{}` in `{}`", value, LOG_ENV_VAR),
    };

    INIT.call_once(|| {
        // another logger may already be installed in this process; leave it as it is
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    });
}

fn max_level(cloaked_log: Option<&str>) -> Result<LevelFilter, ()> {
    // nothing is logged unless asked for
    const LEVEL_WHEN_NOTHING_IS_SPECIFIED: LevelFilter = LevelFilter::Off;

    match cloaked_log.map(str::trim) {
        None | Some("") => Ok(LEVEL_WHEN_NOTHING_IS_SPECIFIED),
        Some(input) => parse_log_level(input),
    }
}

fn parse_log_level(input: &str) -> Result<LevelFilter, ()> {
    Ok(match input {
        "debug" => LevelFilter::Debug,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "warn" => LevelFilter::Warn,
        _ => return Err(()),
    })
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // stdout of a proc macro is not shown by cargo; stderr is
        let mut sink = io::stderr().lock();
        writeln!(sink, "(cloaked) {} {}", record.level(), record.args()).ok();
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn when_cloaked_log_is_unset_log_nothing() {
        assert_eq!(Ok(LevelFilter::Off), max_level(None));
        assert_eq!(Ok(LevelFilter::Off), max_level(Some("")));
    }

    #[rstest]
    #[case::off("off", LevelFilter::Off)]
    #[case::error("error", LevelFilter::Error)]
    #[case::warn("warn", LevelFilter::Warn)]
    #[case::info("info", LevelFilter::Info)]
    #[case::debug("debug", LevelFilter::Debug)]
    #[case::trace("trace", LevelFilter::Trace)]
    #[case::surrounding_whitespace(" debug\n", LevelFilter::Debug)]
    fn when_level_in_cloaked_log_use_it(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(Ok(expected), max_level(Some(input)));
    }

    #[test]
    fn init_applies_the_level_only_once() {
        init();
        let installed = log::max_level();

        log::set_max_level(LevelFilter::Trace);
        init();
        assert_eq!(LevelFilter::Trace, log::max_level());

        log::set_max_level(installed);
    }

    #[rstest]
    #[case::unknown("verbose")]
    #[case::uppercase("TRACE")]
    #[case::module_filter("krate=info")]
    fn rejects_unknown_log_level(#[case] input: &str) {
        assert_eq!(Err(()), max_level(Some(input)));
    }
}
