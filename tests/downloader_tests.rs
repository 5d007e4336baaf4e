//! Tests for the downloader configuration surface.

use bulkfetch::downloader::{CollisionPolicy, DownloaderBuilder};
use bulkfetch::http::BROWSER_USER_AGENT;
use bulkfetch::Status;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::sync::{atomic, Arc};
use std::time::Duration;

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let downloader = DownloaderBuilder::new().build();

    assert_eq!(downloader.concurrent_downloads(), None);
    assert_eq!(downloader.user_agent(), BROWSER_USER_AGENT);
    assert_eq!(downloader.collisions(), CollisionPolicy::SkipDuplicates);
    assert!(downloader.headers().is_none());
}

#[test]
fn test_builder_configuration() {
    let temp_dir = create_temp_dir();
    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .concurrent_downloads(10)
        .user_agent("custom/1.0")
        .timeout(Duration::from_secs(5))
        .collisions(CollisionPolicy::Allow)
        .build();

    assert_eq!(downloader.directory(), temp_dir.path());
    assert_eq!(downloader.concurrent_downloads(), Some(10));
    assert_eq!(downloader.user_agent(), "custom/1.0");
    assert_eq!(downloader.collisions(), CollisionPolicy::Allow);
}

#[test]
fn test_builder_concurrency_floor_and_unbounded() {
    let downloader = DownloaderBuilder::new().concurrent_downloads(0).build();
    assert_eq!(downloader.concurrent_downloads(), Some(1));

    let downloader = DownloaderBuilder::new()
        .concurrent_downloads(4)
        .unbounded()
        .build();
    assert_eq!(downloader.concurrent_downloads(), None);
}

#[test]
fn test_builder_headers_merge() {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

    let downloader = DownloaderBuilder::new()
        .headers(headers)
        .header(USER_AGENT, HeaderValue::from_static("single-test-agent"))
        .build();

    let headers = downloader.headers().unwrap();
    assert_eq!(headers.get(ACCEPT), Some(&HeaderValue::from_static("*/*")));
    assert_eq!(
        headers.get(USER_AGENT),
        Some(&HeaderValue::from_static("single-test-agent"))
    );
}

#[test]
fn test_downloader_debug_and_clone() {
    let downloader = DownloaderBuilder::new()
        .on_complete(|_summary| {})
        .build();
    let cloned = downloader.clone();

    let debug_str = format!("{:?}", cloned);
    assert!(debug_str.contains("Downloader"));
    assert!(debug_str.contains("on_complete: true"));
    assert_eq!(downloader.user_agent(), cloned.user_agent());
}

#[tokio::test]
async fn test_on_complete_runs_once_per_url() {
    let temp_dir = create_temp_dir();
    let calls = Arc::new(atomic::AtomicUsize::new(0));
    let calls_clone = calls.clone();

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .on_complete(move |_summary| {
            calls_clone.fetch_add(1, atomic::Ordering::SeqCst);
        })
        .build();

    // Neither URL reaches the network.
    let report = downloader
        .download_urls(&["", "http://host/"])
        .await
        .unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(calls.load(atomic::Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_panicking_task_is_reported_as_internal_failure() {
    let temp_dir = create_temp_dir();
    create_temp_file(temp_dir.path(), "a.js", b"old");

    let downloader = DownloaderBuilder::hidden()
        .directory(temp_dir.path().to_path_buf())
        .on_complete(|summary| {
            if matches!(summary.status(), Status::Skipped(_)) {
                panic!("callback failure");
            }
        })
        .build();

    // The existing file is skipped without a request, then the callback panics.
    let report = downloader
        .download_urls(&["http://host/a.js", "http://host/"])
        .await
        .unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report.failed(), 2);
    match report.summaries()[0].status() {
        Status::Fail(msg) => {
            assert!(msg.starts_with("Internal error: download task failed"), "{}", msg)
        }
        other => panic!("Expected Fail status, got {:?}", other),
    }
    assert_file_content(&temp_dir.path().join("a.js"), b"old");
}
