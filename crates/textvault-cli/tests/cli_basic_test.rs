// Copyright (C) 2026  TextVault Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! End-to-end tests that don't require a live embedding service: help text,
//! version, config validation, and index maintenance (`delete`/`clear`)
//! against a file-backed index fixture.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn textvault() -> Command {
    Command::cargo_bin("textvault").unwrap()
}

#[test]
fn version_prints_package_version() {
    textvault()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textvault"));
}

#[test]
fn no_args_prints_usage() {
    textvault()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: textvault"));
}

#[test]
fn help_lists_subcommands() {
    textvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn config_validate_accepts_a_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.toml");
    fs::write(&path, "chunk_size = 200\nchunk_overlap = 20\n").unwrap();

    textvault()
        .args(["config", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn config_validate_rejects_invalid_chunking() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vault.toml");
    fs::write(&path, "chunk_size = 10\nchunk_overlap = 10\n").unwrap();

    textvault()
        .args(["config", "validate"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn clear_succeeds_on_a_fresh_index_path() {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join("index.json");

    textvault()
        .args(["clear", "--index"])
        .arg(&index_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));
}

#[test]
fn delete_succeeds_on_a_document_not_present() {
    let dir = TempDir::new().unwrap();
    let index_path = dir.path().join("index.json");

    textvault()
        .args(["delete", "no-such-doc", "--index"])
        .arg(&index_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
}

#[test]
fn stats_reports_against_an_empty_text_and_missing_video_fails() {
    let dir = TempDir::new().unwrap();
    let text_path = dir.path().join("doc.txt");
    fs::write(&text_path, b"hello world").unwrap();
    let video_path = dir.path().join("doc.mp4");

    // No video on disk yet and no embedder configured: probing a missing
    // artifact must fail, not panic.
    textvault()
        .arg("stats")
        .arg(&text_path)
        .args(["--video"])
        .arg(&video_path)
        .args(["--embedder-url", "http://127.0.0.1:1/unused"])
        .assert()
        .failure();
}
