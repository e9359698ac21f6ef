use std::sync::atomic::{AtomicU8, Ordering};

/// Severity levels and the process-wide emission gate.
///
/// This module provides the ordered `Severity` enumeration used across the
/// logging pipeline and the `LevelGate` that decides whether a log call
/// proceeds at all.

/// Ordered log severity.
///
/// Used both for filtering (via [`LevelGate`]) and for sink-side
/// presentation: the bracketed label text and the optional ANSI color.
///
/// # Examples
///
/// ```
/// # use diagkit::Severity;
/// assert!(Severity::Debug < Severity::Warn);
/// assert!(Severity::Warn < Severity::Error);
/// assert_eq!(Severity::Warn.label(), "[WARN] ");
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug = 0,
    Warn = 1,
    Error = 2,
}

impl Severity {
    /// Converts a raw numeric level back to a `Severity`.
    ///
    /// Returns `None` for any value above `Error`; callers treat that as
    /// "do not emit" rather than an error.
    pub fn from_raw(raw: u8) -> Option<Severity> {
        match raw {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    /// The label prepended to every composed line, trailing space included.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "[DEBUG] ",
            Severity::Warn => "[WARN] ",
            Severity::Error => "[ERROR] ",
        }
    }

    /// ANSI color for console presentation.
    ///
    /// Total over the enumeration; `None` means print undecorated.
    pub fn ansi_color(&self) -> Option<&'static str> {
        match self {
            Severity::Debug => None,
            Severity::Warn => Some("\x1b[33m"),
            Severity::Error => Some("\x1b[31m"),
        }
    }
}

/// Process-wide minimum-severity threshold.
///
/// The gate is an explicitly owned configuration object injected into the
/// [`Logger`](crate::Logger) rather than an implicit global. The threshold
/// starts at the most permissive level (`Debug`) and may be overwritten at
/// any time.
///
/// # Concurrency
///
/// Reads and writes use relaxed atomics only. A log call racing a
/// `set_threshold` may be let through or suppressed based on a stale read;
/// logging is best-effort diagnostics and the design tolerates that rather
/// than paying for synchronization on every call. Callers needing strict
/// consistency can wrap the gate with their own locking.
#[derive(Debug)]
pub struct LevelGate {
    min_level: AtomicU8,
}

impl LevelGate {
    /// Creates a gate with the most permissive threshold (`Debug`).
    pub const fn new() -> Self {
        Self {
            min_level: AtomicU8::new(Severity::Debug as u8),
        }
    }

    /// Unconditionally overwrites the threshold.
    pub fn set_threshold(&self, min: Severity) {
        self.min_level.store(min as u8, Ordering::Relaxed);
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        // The slot only ever holds values stored from a Severity.
        Severity::from_raw(self.min_level.load(Ordering::Relaxed)).unwrap_or(Severity::Error)
    }

    /// Returns true iff a record at `severity` should reach the sink.
    pub fn should_emit(&self, severity: Severity) -> bool {
        severity as u8 >= self.min_level.load(Ordering::Relaxed)
    }

    /// Raw-level variant of [`should_emit`](Self::should_emit).
    ///
    /// Any value outside the defined enumeration is suppressed, default-deny,
    /// regardless of the threshold.
    pub fn should_emit_raw(&self, raw: u8) -> bool {
        match Severity::from_raw(raw) {
            Some(severity) => self.should_emit(severity),
            None => false,
        }
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_from_raw_rejects_out_of_range() {
        assert_eq!(Severity::from_raw(2), Some(Severity::Error));
        assert_eq!(Severity::from_raw(3), None);
        assert_eq!(Severity::from_raw(255), None);
    }

    #[test]
    fn test_gate_threshold() {
        let gate = LevelGate::new();
        assert!(gate.should_emit(Severity::Debug));

        gate.set_threshold(Severity::Warn);
        assert!(!gate.should_emit(Severity::Debug));
        assert!(gate.should_emit(Severity::Warn));
        assert!(gate.should_emit(Severity::Error));
    }

    #[test]
    fn test_gate_denies_raw_out_of_range() {
        let gate = LevelGate::new();
        assert!(gate.should_emit_raw(0));
        assert!(!gate.should_emit_raw(3));
        gate.set_threshold(Severity::Error);
        assert!(!gate.should_emit_raw(200));
    }
}
