//! Tests for the file system collaborator.

use std::path::PathBuf;

use crate::io::{DataIo, FsIo};

#[test]
fn resolve_handles_plain_paths_and_file_urls() {
    let io = FsIo::new();
    assert_eq!(io.resolve("a/b.csv").unwrap(), PathBuf::from("a/b.csv"));
    assert_eq!(
        io.resolve("file:///tmp/b.csv").unwrap(),
        PathBuf::from("/tmp/b.csv")
    );
}

#[test]
fn resolve_rejects_remote_schemes() {
    let err = FsIo::new()
        .resolve("https://example.com/data.csv")
        .unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
    assert!(err.to_string().contains("https"));
}

#[test]
fn base_dir_applies_to_relative_paths_only() {
    let io = FsIo::with_base_dir("/data");
    assert_eq!(io.base_dir(), Some(std::path::Path::new("/data")));
    assert_eq!(io.resolve("x.csv").unwrap(), PathBuf::from("/data/x.csv"));
    assert_eq!(io.resolve("/abs/x.csv").unwrap(), PathBuf::from("/abs/x.csv"));
}

#[tokio::test]
async fn write_then_read_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let reference = path.to_string_lossy().into_owned();
    let io = FsIo::new();

    io.write_destination(&reference, b"a,b\n1,2").await.unwrap();
    let bytes = io.read_source(&reference).await.unwrap();

    assert_eq!(bytes, b"a,b\n1,2".to_vec());
}

#[tokio::test]
async fn reading_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let io = FsIo::with_base_dir(dir.path());

    let err = io.read_source("missing.csv").await.unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
