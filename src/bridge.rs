use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Severity;
use crate::logger::Logger;

/// Interop with the standard `log` facade.
///
/// Code written against `log` macros can route through this crate's
/// pipeline: the bridge maps facade levels onto [`Severity`], uses the
/// record target as the component tag, and delivers the pre-rendered
/// message through the owned [`Logger`].

fn map_level(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warn,
        // The facade's finer-grained low levels all collapse to Debug.
        Level::Info | Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// `log::Log` implementation over a [`Logger`].
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        map_level(metadata.level()) >= self.logger.threshold()
    }

    fn log(&self, record: &Record) {
        // log_line applies the gate again; a stale read here only costs a
        // redundant render of the facade arguments.
        self.logger.log_line(
            map_level(record.level()),
            record.target(),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {}
}

/// Installs `logger` as the process-wide `log` facade backend.
pub fn install(logger: Logger, max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(max_level);
    Ok(())
}
