use diagkit::Timer;
use std::thread;
use std::time::Duration;

#[test]
fn test_elapsed_is_non_negative() {
    let timer = Timer::new();
    assert!(timer.elapsed_nsecs() >= 0.0);
    assert!(timer.elapsed_msecs() >= 0.0);
    assert!(timer.elapsed_secs() >= 0.0);
}

#[test]
fn test_successive_reads_non_decreasing() {
    let timer = Timer::new();
    let first = timer.elapsed_secs();
    let second = timer.elapsed_secs();
    assert!(second >= first, "Elapsed time must not run backwards");
}

#[test]
fn test_elapsed_tracks_sleep() {
    let timer = Timer::new();
    thread::sleep(Duration::from_millis(10));
    assert!(timer.elapsed_msecs() >= 10.0);
}

#[test]
fn test_unit_consistency() {
    let timer = Timer::new();
    thread::sleep(Duration::from_millis(5));
    let secs = timer.elapsed_secs();
    let msecs = timer.elapsed_msecs();
    let nsecs = timer.elapsed_nsecs();

    // Readings are taken back to back, so the unit conversions should
    // agree to well within a factor of the elapsed jitter.
    assert!(msecs >= secs * 1e3);
    assert!(nsecs >= msecs * 1e6 * 0.99);
}

#[test]
fn test_reset_restarts_measurement() {
    let mut timer = Timer::new();
    thread::sleep(Duration::from_millis(10));
    timer.reset();
    assert!(timer.elapsed_msecs() < 10.0);
}

#[test]
fn test_elapsed_reset_returns_before_restarting() {
    let mut timer = Timer::new();
    thread::sleep(Duration::from_millis(10));

    let lap = timer.elapsed_msecs_reset();
    assert!(lap >= 10.0, "Reset must happen after the value is captured");
    assert!(timer.elapsed_msecs() < lap);
}

#[test]
fn test_elapsed_reset_variants_agree() {
    let mut timer = Timer::new();
    thread::sleep(Duration::from_millis(2));
    let secs = timer.elapsed_secs_reset();
    assert!(secs > 0.0);

    thread::sleep(Duration::from_millis(2));
    let nsecs = timer.elapsed_nsecs_reset();
    assert!(nsecs >= 2e6);
}
