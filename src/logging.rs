use std::io::Write;

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle, Record};

/// Starts logging to stderr at `info` level unless `RUST_LOG` says otherwise.
///
/// Keep the returned handle alive for as long as the program should log.
pub fn setup() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?
        .format(one_line_format)
        .start()
}

/// `LEVEL [time] [file:line] message`
pub fn one_line_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        record.level(),
        now.format("%H:%M:%S%.3f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args(),
    )
}
