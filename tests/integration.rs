use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_apidoc")))
}

const SUM_JS: &str = r#"/**
 * @function calculateSum
 * @param {number} a - first
 * @param {number} b - second
 * @returns {number} the sum
 */
function calculateSum(a, b) {
    return a + b;
}
"#;

const POINT_JS: &str = "/**\n * @class Point\n * @property {number} x - horizontal\n */\nclass Point {}\n";

fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

// -- stdin mode --

#[test]
fn stdin_mode_dumps_tree() {
    let assert = cmd().write_stdin(SUM_JS).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("(source_file\n  (doc_comment\n    (function_tag"));
    assert!(output.contains("(identifier \"calculateSum\")"));
    assert!(output.contains("(description \"the sum\")"));
}

#[test]
fn stdin_json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(SUM_JS)
        .assert()
        .success();

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = &value["blocks"][0]["entries"];
    assert_eq!(entries[0]["kind"], "function_tag");
    assert_eq!(entries[1]["type"], "number");
    assert_eq!(entries[3]["kind"], "returns_tag");
}

#[test]
fn stdin_unterminated_block_fails() {
    cmd()
        .write_stdin("code();\n/** never closed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "<stdin>:2:1: unterminated comment block",
        ));
}

#[test]
fn stdin_malformed_tag_fails() {
    cmd()
        .write_stdin("/** @param bad - no type */")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed @param tag"))
        .stderr(predicate::str::contains("`{type}`"));
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin(SUM_JS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- file mode --

#[test]
fn file_mode_prints_labelled_dumps() {
    let dir = TempDir::new().unwrap();
    let sum = write_file(&dir, "sum.js", SUM_JS);
    let point = write_file(&dir, "point.js", POINT_JS);

    let assert = cmd().arg(&sum).arg(&point).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // sorted by path
    let point_at = output.find(&format!(";; {}", point)).unwrap();
    let sum_at = output.find(&format!(";; {}", sum)).unwrap();
    assert!(point_at < sum_at);
    assert!(output.contains("(class_tag"));
}

#[test]
fn file_mode_writes_output_directory() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_file(&src, "sum.js", SUM_JS);
    write_file(&src, "point.ts", POINT_JS);
    write_file(&src, "README.md", "/** @param nope */");

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.path().join("sum.json").exists());
    assert!(out.path().join("point.json").exists());
    assert!(!out.path().join("README.json").exists());

    let output = std::fs::read_to_string(out.path().join("point.json")).unwrap();
    assert!(output.contains("\"property_tag\""));
}

#[test]
fn file_mode_rejects_clashing_output_names() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::create_dir(src.path().join("a")).unwrap();
    std::fs::create_dir(src.path().join("b")).unwrap();
    let first = write_file(&src, "a/x.js", "/** @class FromA */");
    let second = write_file(&src, "b/x.js", "/** @class FromB */");

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .args([&first, &second])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "{} and {} both map to output file x.sexp",
            first, second
        )));

    assert!(!out.path().join("x.sexp").exists());
}

#[test]
fn file_mode_glob_pattern() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "/** @class A */");
    write_file(&dir, "b.js", "/** @class B */");
    let pattern = format!("{}/*.js", dir.path().display());

    let assert = cmd().args(["-f", "json"]).arg(&pattern).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn file_mode_stops_on_first_error() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(&dir, "bad.js", "/** @returns {number\n */");
    let good = write_file(&dir, "good.js", SUM_JS);

    cmd()
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bad.js:1:14: malformed @returns tag"));
}

#[test]
fn keep_going_skips_bad_files() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(&dir, "bad.js", "/** unterminated");
    let good = write_file(&dir, "good.js", SUM_JS);

    cmd()
        .arg("--keep-going")
        .arg(&bad)
        .arg(&good)
        .assert()
        .failure()
        .stdout(predicate::str::contains("calculateSum"))
        .stderr(predicate::str::contains("skipping"))
        .stderr(predicate::str::contains("1 file(s) failed to parse"));
}

#[test]
fn unmatched_glob_warns() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.js", dir.path().display());

    cmd()
        .arg(&pattern)
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}

#[test]
fn verbose_logs_parsed_files() {
    let mut input = NamedTempFile::with_suffix(".js").unwrap();
    input.write_all(POINT_JS.as_bytes()).unwrap();

    cmd()
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("block closed"));
}
