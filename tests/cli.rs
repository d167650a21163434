//! Integration tests for the `tablepaste` command-line interface.
//!
//! Covers reading standard input and files, the `--html`, `--br` and
//! `--in-place` options, and error reporting.

use std::fs;

use tempfile::tempdir;

#[macro_use]
mod prelude;
use prelude::*;

fn tablepaste() -> Command {
    Command::cargo_bin("tablepaste").expect("Failed to create cargo command for tablepaste")
}

#[test]
fn test_cli_version_flag() {
    tablepaste()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("tablepaste {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_in_place_requires_file() {
    tablepaste().arg("--in-place").assert().failure();
}

#[test]
fn test_cli_converts_stdin() {
    tablepaste()
        .write_stdin("a\tb\nc\td\n")
        .assert()
        .success()
        .stdout(md_text!["| a | b |", "| --- | --- |", "| c | d |"]);
}

#[test]
fn test_cli_normalizes_markdown() {
    tablepaste()
        .write_stdin("|a|b|\n|:---|---:|\n|1|2|\n")
        .assert()
        .success()
        .stdout(md_text!["| a | b |", "| --- | --- |", "| 1 | 2 |"]);
}

#[test]
fn test_cli_html_option() {
    tablepaste()
        .arg("--html")
        .write_stdin("a & b\tc\n1\t<2>\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<table>\n"))
        .stdout(predicate::str::contains("<th>a &amp; b</th>"))
        .stdout(predicate::str::contains("<td>&lt;2&gt;</td>"))
        .stdout(predicate::str::ends_with("</table>\n"));
}

#[test]
fn test_cli_br_option() {
    tablepaste()
        .arg("--br")
        .write_stdin("h\tnote\n1\t\"first\nsecond\"\n")
        .assert()
        .success()
        .stdout(md_text!["| h | note |", "| --- | --- |", "| 1 | first<br>second |"]);
}

#[test]
fn test_cli_line_breaks_default_to_space() {
    tablepaste()
        .write_stdin("h\tnote\n1\t\"first\nsecond\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | first second |"));
}

#[rstest]
#[case::empty("", "No data provided")]
#[case::blank(" \n\n", "No data provided")]
#[case::prose("hello\nnot a table\n", "No valid table data found")]
fn test_cli_reports_errors(#[case] input: &str, #[case] message: &str) {
    tablepaste()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[test]
fn test_cli_files_keep_argument_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut expected = String::new();
    let mut paths = Vec::new();
    for i in 0..4 {
        let path = dir.path().join(format!("paste{i}.txt"));
        fs::write(&path, format!("A{i}\tB{i}\n{i}\t{i}\n")).expect("failed to write file");
        expected.push_str(&md_text![
            format!("| A{i} | B{i} |"),
            "| --- | --- |".to_string(),
            format!("| {i} | {i} |"),
        ]);
        paths.push(path);
    }
    tablepaste().args(&paths).assert().success().stdout(expected);
}

#[test]
fn test_cli_missing_file_fails() {
    let dir = tempdir().expect("failed to create temporary directory");
    let missing = dir.path().join("missing.txt");
    tablepaste()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_bad_file_names_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "just prose\n").expect("failed to write file");
    tablepaste()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes.txt"))
        .stderr(predicate::str::contains("No valid table data found"));
}

#[test]
fn test_cli_in_place_rewrites_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("table.md");
    fs::write(&path, "Name\tRole\nAda\tEngineer\n").expect("failed to write file");
    tablepaste()
        .arg("--in-place")
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    let out = fs::read_to_string(&path).expect("failed to read file");
    assert_eq!(
        out,
        md_text!["| Name | Role |", "| --- | --- |", "| Ada | Engineer |"]
    );
}

#[test]
fn test_cli_in_place_html() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("table.html");
    fs::write(&path, "| a |\n| --- |\n| 1 |\n").expect("failed to write file");
    tablepaste()
        .args(["--in-place", "--html"])
        .arg(&path)
        .assert()
        .success();
    let out = fs::read_to_string(&path).expect("failed to read file");
    assert!(out.contains("<td>1</td>"));
    assert!(out.ends_with("</table>\n"));
}
