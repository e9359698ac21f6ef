use diagkit::{bridge, ConsoleSink, Logger, Severity};
use std::sync::{Arc, Mutex};

struct CollectingSink {
    lines: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl ConsoleSink for CollectingSink {
    fn deliver(&self, line: &str, severity: Severity) {
        self.lines.lock().unwrap().push((line.to_string(), severity));
    }
}

// set_boxed_logger is once-per-process, so the whole bridge behavior is
// exercised from a single test.
#[test]
fn test_facade_records_flow_through_pipeline() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = CollectingSink {
        lines: lines.clone(),
    };
    bridge::install(Logger::new(sink), log::LevelFilter::Trace).unwrap();

    log::warn!(target: "Net", "timeout after {}s", 5);
    log::error!(target: "Disk", "write failed");
    log::info!(target: "Boot", "ready");

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].0, "[Net][WARN] timeout after 5s");
    assert_eq!(lines[0].1, Severity::Warn);
    assert_eq!(lines[1].0, "[Disk][ERROR] write failed");
    // Facade levels below Warn collapse onto Debug.
    assert_eq!(lines[2].0, "[Boot][DEBUG] ready");
    assert_eq!(lines[2].1, Severity::Debug);
}
