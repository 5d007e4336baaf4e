#![allow(dead_code)]

use bulkfetch::{Downloader, DownloaderBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Serves `body` with a 200 at `route`, expecting exactly `hits` requests.
pub async fn mount_file(server: &MockServer, route: &str, body: &[u8], hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(hits)
        .mount(server)
        .await;
}

/// Answers `route` with a bare status code.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// URL of `route` on the mock server.
pub fn url_for(server: &MockServer, route: &str) -> String {
    format!("{}{}", server.uri(), route)
}

/// A downloader writing into `dir`, without progress bars.
pub fn hidden_downloader(dir: &Path) -> Downloader {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .build()
}

/// Sorted file names found in `dir`.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Bad entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Asserts that a file exists with the expected content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).unwrap_or_else(|_| panic!("File should exist at path: {:?}", path));
    assert_eq!(content, expected, "Content mismatch at path: {:?}", path);
}
