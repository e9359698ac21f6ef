use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::process;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};

/// System tracing facade.
///
/// Begin/end section markers routed to a platform tracing capability,
/// independent of the logging path. Tracing is best-effort instrumentation:
/// when no working backend exists the facade degrades to no-ops and never
/// affects caller correctness.

const TRACING_ON_PATH: &str = "/sys/kernel/debug/tracing/tracing_on";
const TRACE_MARKER_PATH: &str = "/sys/kernel/debug/tracing/trace_marker";

/// A tracing capability.
///
/// One implementation per platform mechanism, selected at [`init`] time.
/// Nesting correctness of `begin`/`end` pairs is the caller's
/// responsibility; the backend trusts the call order it is given.
pub trait TraceBackend: Send + Sync {
    /// Opens a named section.
    fn begin(&self, name: &str);

    /// Closes the most recently opened section.
    fn end(&self);

    /// Whether markers actually reach a tracing mechanism.
    fn is_enabled(&self) -> bool;
}

/// Backend selected when no tracing mechanism is available.
pub struct NoopBackend;

impl TraceBackend for NoopBackend {
    fn begin(&self, _name: &str) {}
    fn end(&self) {}
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Kernel trace-marker backend.
///
/// Writes ftrace-style section markers to a trace marker file:
/// `B|<pid>|<name>` on begin, `E` on end. Marker write failures are
/// reported to stderr and otherwise ignored.
pub struct MarkerFileBackend {
    marker: Mutex<std::fs::File>,
    pid: u32,
}

impl MarkerFileBackend {
    /// Opens an explicit marker file path.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let marker = OpenOptions::new().write(true).open(path)?;
        Ok(Self {
            marker: Mutex::new(marker),
            pid: process::id(),
        })
    }

    /// Enables kernel tracing and opens the canonical marker file.
    pub fn kernel() -> std::io::Result<Self> {
        let mut on = OpenOptions::new().write(true).open(TRACING_ON_PATH)?;
        on.write_all(b"1")?;
        Self::open(TRACE_MARKER_PATH)
    }
}

impl TraceBackend for MarkerFileBackend {
    fn begin(&self, name: &str) {
        let marker = format!("B|{}|{}", self.pid, name);
        if let Err(e) = self.marker.lock().write_all(marker.as_bytes()) {
            eprintln!("diagkit: trace begin write failed: {}", e);
        }
    }

    fn end(&self) {
        if let Err(e) = self.marker.lock().write_all(b"E") {
            eprintln!("diagkit: trace end write failed: {}", e);
        }
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

lazy_static! {
    // Process-wide backend slot, noop until init() selects something.
    static ref BACKEND: RwLock<Arc<dyn TraceBackend>> = RwLock::new(Arc::new(NoopBackend));
}

/// Selects the kernel marker backend, falling back to no-ops.
///
/// Called once at process start, paired with [`deinit`]. An unavailable
/// trace channel is silently degraded, never an error.
pub fn init() {
    match MarkerFileBackend::kernel() {
        Ok(backend) => init_with(Arc::new(backend)),
        Err(_) => init_with(Arc::new(NoopBackend)),
    }
}

/// Installs an explicit backend.
pub fn init_with(backend: Arc<dyn TraceBackend>) {
    *BACKEND.write() = backend;
}

/// Drops the active backend, restoring no-op behavior.
pub fn deinit() {
    *BACKEND.write() = Arc::new(NoopBackend);
}

/// Opens a named trace section. Nestable per call site.
pub fn begin(name: &str) {
    BACKEND.read().begin(name);
}

/// Closes the most recently opened trace section.
pub fn end() {
    BACKEND.read().end();
}

/// Whether tracing is currently active.
pub fn is_enabled() -> bool {
    BACKEND.read().is_enabled()
}
