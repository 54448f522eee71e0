//! Integration tests for the Gutenshelf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Catalog stub answering every request with the same status and body
struct CatalogStub {
    base_url: String,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CatalogStub {
    fn spawn(status: u16, body: String) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start catalog stub");
        let base_url = format!("http://{}", server.server_addr());
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }
            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };
            let _ = request
                .respond(tiny_http::Response::from_string(body.clone()).with_status_code(status));
        });

        Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }
}

impl Drop for CatalogStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A catalog page of `count` books
fn catalog_page(count: u64) -> String {
    let results: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Book {}", id),
                "authors": [{"name": format!("Author {}", id), "birth_year": 1800, "death_year": 1870}],
                "subjects": ["Fiction"],
                "bookshelves": ["Classics"],
                "languages": ["en"],
                "copyright": false,
                "media_type": "Text",
                "formats": {
                    "application/epub+zip": format!("https://www.gutenberg.org/ebooks/{}.epub3.images", id),
                    "image/jpeg": format!("https://www.gutenberg.org/cache/epub/{}/pg{}.cover.medium.jpg", id, id)
                },
                "download_count": id * 100
            })
        })
        .collect();
    serde_json::json!({"count": count, "next": null, "previous": null, "results": results}).to_string()
}

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("gutenshelf-cli").unwrap();
    cmd.env_remove("GUTENSHELF_API_BASE_URL")
        .env_remove("GUTENSHELF_BOOKS_LIMIT")
        .env_remove("GUTENSHELF_DEFAULT_PAGE");
    cmd
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gutenshelf"));
}

#[test]
fn test_show_help() {
    cli()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Display details"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_show_requires_numeric_id() {
    cli().args(["show", "abc"]).assert().failure();
}

#[test]
fn test_limit_must_be_positive() {
    cli()
        .args(["list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit must be at least 1"));
}

#[test]
fn test_list_prints_first_ten() {
    let stub = CatalogStub::spawn(200, catalog_page(32));

    cli()
        .args(["list", "--base-url", &stub.base_url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 1 by Author 1 (100 downloads)"))
        .stdout(predicate::str::contains("Book 10 by Author 10"))
        .stdout(predicate::str::contains("Book 11").not());
}

#[test]
fn test_list_json_respects_limit() {
    let stub = CatalogStub::spawn(200, catalog_page(32));

    let output = cli()
        .args(["list", "--json", "--limit", "3", "--base-url", &stub.base_url])
        .output()
        .unwrap();

    assert!(output.status.success());
    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_list_reports_server_error() {
    let stub = CatalogStub::spawn(500, "oops".to_string());

    cli()
        .args(["list", "--base-url", &stub.base_url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_list_reports_malformed_response() {
    let stub = CatalogStub::spawn(200, r#"{"count": 0, "next": null}"#.to_string());

    cli()
        .args(["list", "--base-url", &stub.base_url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_list_reports_unreachable_catalog() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    cli()
        .args(["list", "--base-url", &base_url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch books"));
}

#[test]
fn test_show_book() {
    let stub = CatalogStub::spawn(200, catalog_page(5));

    cli()
        .args(["show", "4", "--base-url", &stub.base_url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:       Book 4"))
        .stdout(predicate::str::contains("Author 4 (1800 - 1870)"))
        .stdout(predicate::str::contains("Public domain"))
        .stdout(predicate::str::contains("epub+zip"))
        .stdout(predicate::str::contains("cover.medium.jpg").not());
}

#[test]
fn test_show_book_outside_first_page() {
    let stub = CatalogStub::spawn(200, catalog_page(5));

    cli()
        .args(["show", "999", "--base-url", &stub.base_url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book 999 not found"));
}
