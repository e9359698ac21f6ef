use crate::compose::compose_line;
use crate::format::{render, FormatArg};
use crate::level::{LevelGate, Severity};
use crate::sink::{ConsoleSink, StdoutSink};

/// The leveled logging pipeline.
///
/// A `Logger` owns the severity gate and the platform sink and runs every
/// log call through the same synchronous path:
/// gate → render → compose → deliver. Calls from the same thread reach the
/// sink in issue order; across threads no ordering is imposed.
///
/// # Examples
///
/// ```
/// use diagkit::{logd, logw, Logger, Severity};
///
/// let logger = Logger::stdout();
/// logd!(logger, "Net", "connecting to %s:%u", "localhost", 8080u16);
///
/// logger.set_threshold(Severity::Warn);
/// logd!(logger, "Net", "suppressed");
/// logw!(logger, "Net", "timeout after %ds", 5);
/// ```
pub struct Logger {
    gate: LevelGate,
    sink: Box<dyn ConsoleSink>,
}

impl Logger {
    /// Creates a logger delivering to the given sink, threshold `Debug`.
    pub fn new(sink: impl ConsoleSink + 'static) -> Self {
        Self {
            gate: LevelGate::new(),
            sink: Box::new(sink),
        }
    }

    /// Console logger with the default chunk limit.
    pub fn stdout() -> Self {
        Self::new(StdoutSink::new())
    }

    /// Overwrites the minimum severity that will be emitted.
    ///
    /// Takes effect for subsequent calls; a concurrently in-flight call may
    /// still observe the previous threshold.
    pub fn set_threshold(&self, min: Severity) {
        self.gate.set_threshold(min);
    }

    pub fn threshold(&self) -> Severity {
        self.gate.threshold()
    }

    /// Runs one record through the full pipeline.
    ///
    /// Suppressed records pay only the gate check; rendering and
    /// composition happen after the gate passes.
    pub fn log<'a>(&self, severity: Severity, tag: &str, template: &str, args: &[FormatArg<'a>]) {
        if !self.gate.should_emit(severity) {
            return;
        }
        let message = render(template, args);
        self.sink.deliver(&compose_line(tag, severity, &message), severity);
    }

    /// Raw-severity entry point.
    ///
    /// Any numeric level outside the defined enumeration is suppressed
    /// before any formatting work, default-deny.
    pub fn log_raw<'a>(&self, raw_severity: u8, tag: &str, template: &str, args: &[FormatArg<'a>]) {
        if !self.gate.should_emit_raw(raw_severity) {
            return;
        }
        // should_emit_raw only passes in-range values.
        if let Some(severity) = Severity::from_raw(raw_severity) {
            let message = render(template, args);
            self.sink.deliver(&compose_line(tag, severity, &message), severity);
        }
    }

    /// Delivers an already rendered message, skipping the formatter.
    ///
    /// Used by the `log` facade bridge, whose records arrive pre-rendered.
    pub fn log_line(&self, severity: Severity, tag: &str, message: &str) {
        if !self.gate.should_emit(severity) {
            return;
        }
        self.sink.deliver(&compose_line(tag, severity, message), severity);
    }
}

/// Logs at `Debug` severity.
///
/// ```
/// # use diagkit::{logd, Logger};
/// # let logger = Logger::stdout();
/// logd!(logger, "Codec", "frame %u decoded in %fms", 17u32, 0.8);
/// ```
#[macro_export]
macro_rules! logd {
    ($logger:expr, $tag:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $crate::Severity::Debug,
            $tag,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// Alias of [`logd!`], kept for the print-style call sites.
#[macro_export]
macro_rules! logp {
    ($($t:tt)*) => { $crate::logd!($($t)*) };
}

/// Logs at `Warn` severity.
#[macro_export]
macro_rules! logw {
    ($logger:expr, $tag:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $crate::Severity::Warn,
            $tag,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// Logs at `Error` severity.
#[macro_export]
macro_rules! loge {
    ($logger:expr, $tag:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $crate::Severity::Error,
            $tag,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}
