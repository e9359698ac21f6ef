use diagkit::{read_file, write_file};
use tempfile::tempdir;

#[test]
fn test_round_trip_arbitrary_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");

    let data: Vec<u8> = (0..5000u32).map(|i| (i * 7 % 256) as u8).collect();
    write_file(&path, &data).unwrap();

    let back = read_file(&path).unwrap();
    assert_eq!(back.len(), data.len());
    assert_eq!(back, data);
}

#[test]
fn test_empty_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty");

    write_file(&path, &[]).unwrap();
    assert_eq!(read_file(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_write_truncates_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trunc");

    write_file(&path, b"a longer first payload").unwrap();
    write_file(&path, b"short").unwrap();
    assert_eq!(read_file(&path).unwrap(), b"short");
}

#[test]
fn test_unopenable_read_reports_and_returns() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-file");

    // No read is attempted on a failed open; the error comes back
    // explicitly instead of a crash or a partial buffer.
    let result = read_file(&missing);
    assert!(result.is_err());
}

#[test]
fn test_unopenable_write_reports_and_returns() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("missing-subdir").join("out");

    let result = write_file(&bad, b"payload");
    assert!(result.is_err());
}
