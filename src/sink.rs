use std::io::{self, Write};
use std::process;

use parking_lot::Mutex;

use crate::level::Severity;

/// Platform sink surface for composed log lines.
///
/// This module provides the `ConsoleSink` trait plus the two stock
/// implementations: a generic writer-backed sink and the console sink.
/// Platform differences (chunked output limits, color decoration) live
/// entirely inside sink implementations; the pipeline itself contains no
/// platform branching.

/// Maximum single-message length used by the console sink by default.
///
/// Matches the tightest known console transport limit (1023 bytes plus
/// terminator on logcat-class devices).
pub const DEFAULT_CHUNK_LIMIT: usize = 1023;

/// Destination for composed log lines.
///
/// The sink receives the full line and its severity and is responsible for
/// any platform-specific presentation: splitting over-length lines into
/// successive chunks and mapping severity to a native priority or color.
/// Implementations must deliver chunks in order, byte-for-byte.
pub trait ConsoleSink: Send + Sync {
    fn deliver(&self, line: &str, severity: Severity);
}

/// Splits `bytes` into successive chunks of at most `max_len` bytes.
///
/// Chunk boundaries are a pure output-size limit: they do not parse
/// characters specially and may fall inside payload text. Concatenating
/// the chunks in order reconstructs the input exactly.
pub fn split_chunks(bytes: &[u8], max_len: usize) -> impl Iterator<Item = &[u8]> {
    bytes.chunks(max_len.max(1))
}

/// Sink over an arbitrary writer, with an optional chunk limit.
///
/// Each line is written as successive `write_all` calls (one per chunk)
/// followed by a single newline, so reassembling the writer's output
/// yields every line byte-for-byte. The writer sits behind a
/// `parking_lot::Mutex` so a sink can be shared across threads; no
/// ordering is promised between threads beyond what the lock provides.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    max_chunk: Option<usize>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            max_chunk: None,
        }
    }

    /// Applies a maximum per-delivery chunk length in bytes.
    pub fn with_chunk_limit(writer: W, max_chunk: usize) -> Self {
        Self {
            writer: Mutex::new(writer),
            max_chunk: Some(max_chunk),
        }
    }
}

impl<W: Write + Send> ConsoleSink for WriterSink<W> {
    fn deliver(&self, line: &str, _severity: Severity) {
        let mut writer = self.writer.lock();
        let result = match self.max_chunk {
            Some(max) => split_chunks(line.as_bytes(), max)
                .try_for_each(|chunk| writer.write_all(chunk)),
            None => writer.write_all(line.as_bytes()),
        };
        // Sink delivery is best-effort; a failed write is reported, not
        // propagated into the logging path.
        if let Err(e) = result.and_then(|_| writer.write_all(b"\n")) {
            eprintln!("diagkit: sink write failed: {}", e);
        }
    }
}

/// Console sink: stdout with pid/tid prefix and optional color.
///
/// Every delivered chunk is printed as `[<pid> <tid>] <chunk>`. When color
/// is enabled the severity's ANSI code decorates the chunk; severities
/// with no mapped color print undecorated, never fail.
pub struct StdoutSink {
    color: bool,
    max_chunk: Option<usize>,
}

impl StdoutSink {
    /// Plain sink with the default chunk limit and no color.
    pub fn new() -> Self {
        Self {
            color: false,
            max_chunk: Some(DEFAULT_CHUNK_LIMIT),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_chunk_limit(mut self, max_chunk: Option<usize>) -> Self {
        self.max_chunk = max_chunk;
        self
    }

    fn write_chunk(&self, out: &mut impl Write, chunk: &[u8], severity: Severity) -> io::Result<()> {
        write!(out, "[{} {:?}] ", process::id(), std::thread::current().id())?;
        match severity.ansi_color().filter(|_| self.color) {
            Some(color) => {
                out.write_all(color.as_bytes())?;
                out.write_all(chunk)?;
                out.write_all(b"\x1b[0m\n")
            }
            None => {
                out.write_all(chunk)?;
                out.write_all(b"\n")
            }
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdoutSink {
    fn deliver(&self, line: &str, severity: Severity) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let max = self.max_chunk.unwrap_or(usize::MAX);
        let mut delivered_any = false;
        for chunk in split_chunks(line.as_bytes(), max) {
            delivered_any = true;
            if let Err(e) = self.write_chunk(&mut out, chunk, severity) {
                eprintln!("diagkit: console write failed: {}", e);
                return;
            }
        }
        if !delivered_any {
            // Empty message still produces one (empty) delivery.
            if let Err(e) = self.write_chunk(&mut out, b"", severity) {
                eprintln!("diagkit: console write failed: {}", e);
            }
        }
    }
}
