//! End-to-end cycle tests: a wiremock directory index plus file
//! endpoints on one side, a tempdir target on the other.

use backhaul::runner::JobRunner;
use backhaul_core::JobConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Render a minimal autoindex-style page for the given names.
fn index_page(names: &[&str]) -> String {
    let mut body = String::from("<html><body><h1>Index of /backups</h1><hr><pre>\n");
    for name in names {
        body.push_str(&format!("<a href=\"{name}\">{name}</a>\n"));
    }
    body.push_str("</pre><hr></body></html>");
    body
}

async fn mount_index(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_page(names)))
        .mount(server)
        .await;
}

async fn mount_file(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(name.as_bytes().to_vec()))
        .mount(server)
        .await;
}

async fn mount_broken_file(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"old").unwrap();
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort_unstable();
    names
}

fn one_shot_job(server: &MockServer, target: &Path, storage: i64) -> JobConfig {
    JobConfig {
        source_addr: server.uri(),
        target_path: PathBuf::from(target),
        suffix: "tgz".to_string(),
        internal: 0,
        storage,
        username: None,
        password: None,
    }
}

#[tokio::test]
async fn test_one_shot_job_fetches_increment_and_terminates() {
    let server = MockServer::start().await;
    mount_index(&server, &["001.tgz", "002.tgz", "003.tgz"]).await;
    mount_file(&server, "003.tgz").await;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "001.tgz");
    touch(dir.path(), "002.tgz");

    let runner = JobRunner::new(one_shot_job(&server, dir.path(), 0)).unwrap();

    // interval 0: exactly one cycle, then run() must return on its own.
    tokio::time::timeout(Duration::from_secs(30), runner.run())
        .await
        .expect("one-shot job did not terminate");

    assert_eq!(listing(dir.path()), ["001.tgz", "002.tgz", "003.tgz"]);
    assert_eq!(
        fs::read(dir.path().join("003.tgz")).unwrap(),
        b"003.tgz",
        "increment must hold the downloaded bytes"
    );
}

#[tokio::test]
async fn test_first_run_mirrors_entire_remote_set() {
    let server = MockServer::start().await;
    mount_index(&server, &["x.tgz", "y.tgz"]).await;
    mount_file(&server, "x.tgz").await;
    mount_file(&server, "y.tgz").await;

    let dir = TempDir::new().unwrap();
    let runner = JobRunner::new(one_shot_job(&server, dir.path(), 0)).unwrap();
    runner.cycle().await;

    assert_eq!(listing(dir.path()), ["x.tgz", "y.tgz"]);
}

#[tokio::test]
async fn test_retention_evicts_oldest_after_clean_fetch() {
    let server = MockServer::start().await;
    mount_index(
        &server,
        &["001.tgz", "002.tgz", "003.tgz", "004.tgz", "005.tgz", "006.tgz", "007.tgz", "008.tgz"],
    )
    .await;
    for name in ["006.tgz", "007.tgz", "008.tgz"] {
        mount_file(&server, name).await;
    }

    let dir = TempDir::new().unwrap();
    for name in ["001.tgz", "002.tgz", "003.tgz", "004.tgz", "005.tgz"] {
        touch(dir.path(), name);
    }

    // 5 local + 3 incoming, cap 6: the 2 oldest go.
    let runner = JobRunner::new(one_shot_job(&server, dir.path(), 6)).unwrap();
    runner.cycle().await;

    assert_eq!(
        listing(dir.path()),
        ["003.tgz", "004.tgz", "005.tgz", "006.tgz", "007.tgz", "008.tgz"]
    );
}

#[tokio::test]
async fn test_eviction_suppressed_when_any_download_fails() {
    let server = MockServer::start().await;
    mount_index(&server, &["001.tgz", "002.tgz", "003.tgz", "004.tgz"]).await;
    mount_broken_file(&server, "003.tgz").await;
    mount_file(&server, "004.tgz").await;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "001.tgz");
    touch(dir.path(), "002.tgz");

    // Cap 2 would normally evict both local files, but 003.tgz fails.
    let runner = JobRunner::new(one_shot_job(&server, dir.path(), 2)).unwrap();
    runner.cycle().await;

    let names = listing(dir.path());
    assert!(names.contains(&"001.tgz".to_string()), "eviction must be skipped");
    assert!(names.contains(&"002.tgz".to_string()), "eviction must be skipped");
    assert!(names.contains(&"004.tgz".to_string()), "batch continues past failure");
    assert!(!names.contains(&"003.tgz".to_string()), "no partial artifact");
}

#[tokio::test]
async fn test_unreachable_remote_degrades_to_empty_cycle() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "001.tgz");

    let config = JobConfig {
        source_addr: "http://127.0.0.1:1".to_string(),
        target_path: PathBuf::from(dir.path()),
        suffix: "tgz".to_string(),
        internal: 0,
        storage: 5,
        username: None,
        password: None,
    };

    let runner = JobRunner::new(config).unwrap();
    runner.cycle().await;

    // Nothing fetched, nothing lost.
    assert_eq!(listing(dir.path()), ["001.tgz"]);
}

#[tokio::test]
async fn test_second_cycle_finds_nothing_new() {
    let server = MockServer::start().await;
    mount_index(&server, &["001.tgz", "002.tgz"]).await;
    mount_file(&server, "001.tgz").await;
    mount_file(&server, "002.tgz").await;

    let dir = TempDir::new().unwrap();
    let runner = JobRunner::new(one_shot_job(&server, dir.path(), 0)).unwrap();

    runner.cycle().await;
    assert_eq!(listing(dir.path()), ["001.tgz", "002.tgz"]);

    // Re-write markers so a second fetch would be observable.
    fs::write(dir.path().join("001.tgz"), b"kept").unwrap();
    fs::write(dir.path().join("002.tgz"), b"kept").unwrap();

    runner.cycle().await;
    assert_eq!(fs::read(dir.path().join("001.tgz")).unwrap(), b"kept");
    assert_eq!(fs::read(dir.path().join("002.tgz")).unwrap(), b"kept");
}
