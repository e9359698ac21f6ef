//! # diagkit
//!
//! A small cross-platform diagnostics utility layer:
//!
//! * **Leveled logging** with printf-style dynamic formatting and a
//!   process-wide severity gate
//! * **Platform sinks** that handle chunked output limits and severity
//!   color coding behind one trait
//! * **System tracing facade** for begin/end section markers, degrading to
//!   no-ops when no tracing mechanism exists
//! * **Monotonic timer** and raw whole-file read/write helpers
//!
//! ## Key Properties
//!
//! * No truncation: messages of any rendered size survive intact, split
//!   into ordered chunks only at the sink's output-size limit
//! * Typed arguments: a tagged union replaces untyped varargs, so the
//!   formatter contract is statically checkable
//! * Synchronous, best-effort delivery: no worker threads, no queues, no
//!   locking added on the logging path
//!
//! ## Quick Start
//!
//! ```
//! use diagkit::{logd, logw, Logger, Severity, Timer};
//!
//! let logger = Logger::stdout();
//! let mut timer = Timer::new();
//!
//! logd!(logger, "Init", "loading model from %s", "weights.bin");
//!
//! logger.set_threshold(Severity::Warn);
//! logw!(logger, "Init", "load took %fms", timer.elapsed_msecs_reset());
//! ```

pub mod bridge;
pub mod compose;
pub mod fileio;
pub mod format;
pub mod level;
pub mod logger;
pub mod sink;
pub mod timer;
pub mod trace;

pub use compose::compose_line;
pub use fileio::{read_file, write_file};
pub use format::{render, FormatArg, INITIAL_CAPACITY};
pub use level::{LevelGate, Severity};
pub use logger::Logger;
pub use sink::{split_chunks, ConsoleSink, StdoutSink, WriterSink, DEFAULT_CHUNK_LIMIT};
pub use timer::Timer;
pub use trace::{MarkerFileBackend, NoopBackend, TraceBackend};
