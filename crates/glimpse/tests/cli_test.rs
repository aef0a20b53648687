#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs in `dir` with config lookups confined to it.
fn glimpse_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("glimpse"));
    cmd.current_dir(dir)
        .env_remove("GLIMPSE_CORPUS")
        .env_remove("GLIMPSE_BUTTON_TEXT")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir);
    cmd
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("corpus.json");
    let corpus = json!({
        "posts": [
            { "id": 1, "title": "Spring tides", "published_at": "2024-03-01T09:00:00Z",
              "permalink": "https://news.example/1", "excerpt": "Water rising",
              "category_ids": [3], "tag_ids": [7] },
            { "id": 2, "title": "Ferry timetable", "published_at": "2024-03-02T09:00:00Z",
              "permalink": "https://news.example/2", "category_ids": [4], "tag_ids": [8] },
            { "id": 5, "title": "Lighthouse reopens", "published_at": "2024-03-05T09:00:00Z",
              "permalink": "https://news.example/5", "category_ids": [3], "tag_ids": [] },
            { "id": 10, "title": "Harbour fair", "published_at": "2024-03-10T09:00:00Z",
              "permalink": "https://news.example/10", "category_ids": [4], "tag_ids": [7] },
            { "id": 11, "title": "Unpublished draft", "published_at": "2024-03-11T09:00:00Z",
              "status": "draft", "category_ids": [3] }
        ],
        "categories": [ { "id": 3, "name": "Coast" }, { "id": 4, "name": "Town" } ],
        "tags": [ { "id": 7, "name": "events" }, { "id": 8, "name": "transport" } ]
    });
    fs::write(&path, serde_json::to_string_pretty(&corpus).unwrap()).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_query_category_only() {
    let temp = TempDir::new().unwrap();
    let value = stdout_json(glimpse_cmd(temp.path()).args([
        "query",
        "--set",
        "category=\"3\"",
        "--set",
        "tags=[]",
        "--set",
        "specificPosts=[]",
        "--set",
        "numberOfPosts=5",
    ]));
    assert_eq!(
        value,
        json!({
            "result_type": "published_posts",
            "order": { "by": "date_desc" },
            "limit": 5,
            "category_filter": 3
        })
    );
}

#[test]
fn test_query_explicit_selection_wins() {
    let temp = TempDir::new().unwrap();
    let attrs = temp.path().join("attrs.json");
    fs::write(
        &attrs,
        r#"{"category": "3", "tags": ["7"], "specificPosts": ["10", "2", "5"], "numberOfPosts": 50}"#,
    )
    .unwrap();

    let value = stdout_json(
        glimpse_cmd(temp.path()).args(["query", "--attrs", attrs.to_str().unwrap()]),
    );
    assert_eq!(value["id_filter"], json!([10, 2, 5]));
    assert_eq!(value["order"], json!({ "by": "explicit", "ids": [10, 2, 5] }));
    assert_eq!(value["limit"], 20);
    assert!(value.get("category_filter").is_none());
    assert!(value.get("tag_filter").is_none());
}

#[test]
fn test_query_reads_stdin() {
    let temp = TempDir::new().unwrap();
    let value = stdout_json(
        glimpse_cmd(temp.path())
            .args(["query", "--attrs", "-"])
            .write_stdin(r#"{"numberOfPosts": 0}"#),
    );
    assert_eq!(value["limit"], 1);
}

#[test]
fn test_posts_json_in_explicit_order() {
    let temp = TempDir::new().unwrap();
    let corpus = write_corpus(temp.path());
    let value = stdout_json(glimpse_cmd(temp.path()).args([
        "posts",
        "--corpus",
        corpus.to_str().unwrap(),
        "--format",
        "json",
        "--set",
        "specificPosts=[\"10\",\"11\",\"1\"]",
    ]));
    let ids: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![10, 1]);
}

#[test]
fn test_posts_text_by_tag() {
    let temp = TempDir::new().unwrap();
    let corpus = write_corpus(temp.path());
    glimpse_cmd(temp.path())
        .args(["posts", "--corpus", corpus.to_str().unwrap(), "--set", "tags=[\"7\"]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbour fair"))
        .stdout(predicate::str::contains("Spring tides"))
        .stdout(predicate::str::contains("Ferry timetable").not());
}

#[test]
fn test_render_uses_corpus_from_config() {
    let temp = TempDir::new().unwrap();
    write_corpus(temp.path());
    fs::write(
        temp.path().join("glimpse.toml"),
        "corpus = \"corpus.json\"\nbutton_text = \"Continue\"\n",
    )
    .unwrap();

    glimpse_cmd(temp.path())
        .args([
            "render",
            "--set",
            "category=3",
            "--set",
            "titleLink=false",
            "--set",
            "buttonLink=true",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lighthouse reopens"))
        .stdout(predicate::str::contains("Spring tides"))
        .stdout(predicate::str::contains(">Continue</a>"))
        .stdout(predicate::str::contains("Unpublished draft").not());
}

#[test]
fn test_render_without_matches_prints_message() {
    let temp = TempDir::new().unwrap();
    let corpus = write_corpus(temp.path());
    glimpse_cmd(temp.path())
        .args(["render", "--corpus", corpus.to_str().unwrap(), "--set", "category=99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glimpse-no-posts"));
}

#[test]
fn test_missing_corpus_is_an_error() {
    let temp = TempDir::new().unwrap();
    glimpse_cmd(temp.path())
        .args(["render"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No corpus configured"));
}

#[test]
fn test_unreadable_corpus_is_an_error() {
    let temp = TempDir::new().unwrap();
    glimpse_cmd(temp.path())
        .args(["posts", "--corpus", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load corpus"));
}

#[test]
fn test_editor_data_lists_terms() {
    let temp = TempDir::new().unwrap();
    let corpus = write_corpus(temp.path());
    let value = stdout_json(
        glimpse_cmd(temp.path()).args(["editor-data", "--corpus", corpus.to_str().unwrap()]),
    );
    assert_eq!(value["categories"][0], json!({ "name": "Select Category", "id": "" }));
    assert_eq!(value["categories"][1], json!({ "name": "Coast", "id": "3" }));
    assert_eq!(value["tags"].as_array().unwrap().len(), 3);
    assert_eq!(value["posts"][1]["title"], "Harbour fair");
    assert_eq!(value["attributes"]["numberOfPosts"]["default"], 5);
}

#[test]
fn test_config_reports_defaults() {
    let temp = TempDir::new().unwrap();
    let value = stdout_json(glimpse_cmd(temp.path()).args(["config"]));
    assert_eq!(value["button_text"], "Read More");
    assert_eq!(value["excerpt_words"], 20);
}
