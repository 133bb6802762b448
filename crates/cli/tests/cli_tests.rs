//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("wordlens")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

/// Command writing charts and saved text under `tmp`.
fn session(tmp: &TempDir) -> assert_cmd::Command {
    let mut cmd = cmd();
    cmd.arg("--output-dir")
        .arg(tmp.path().join("output_files"))
        .arg("--chart-dir")
        .arg(tmp.path().join("charts"));
    cmd
}

#[test]
fn test_cli_help_command() {
    cmd()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands"))
        .stderr(predicate::str::contains("chart <KIND>"));
}

#[test]
fn test_cli_end_of_input_ends_session() {
    cmd().write_stdin("").assert().success();
}

#[test]
fn test_cli_empty_url_prompts() {
    cmd()
        .write_stdin("url\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("请输入有效的网页 URL。"));
}

#[test]
fn test_cli_count_without_url_prompts() {
    cmd()
        .write_stdin("n 5\nchart pie\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("请输入有效的网页 URL。"))
        .stdout(predicate::str::contains("keywords").not());
}

#[test]
fn test_cli_full_session() {
    let tmp = TempDir::new().unwrap();
    let input = format!("url {}\nn 2\nchart pie\nsave\nquit\n", get_fixture_path("en_article.html"));

    session(&tmp)
        .args(["--tokenizer", "unicode"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("Top 2"))
        .stderr(predicate::str::contains("Saved page text to"));

    assert!(tmp.path().join("charts/word-cloud.svg").exists());
    assert!(tmp.path().join("charts/pie.svg").exists());
    assert!(tmp.path().join("output_files/news_1.txt").exists());
}

#[test]
fn test_cli_chinese_page() {
    let tmp = TempDir::new().unwrap();
    let input = format!("url {}\nn 1\n", get_fixture_path("zh_article.html"));

    session(&tmp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("苹果"));
}

#[test]
fn test_cli_interactive_chart() {
    let tmp = TempDir::new().unwrap();
    let input = format!("chart interactive-bar\nurl {}\n", get_fixture_path("en_article.html"));

    session(&tmp).write_stdin(input).assert().success();

    let page = std::fs::read_to_string(tmp.path().join("charts/interactive-bar.html")).unwrap();
    assert!(page.contains("Plotly.newPlot"));
}

#[test]
fn test_cli_reports_clamped_count() {
    let tmp = TempDir::new().unwrap();
    let input = format!("url {}\nn 999\n", get_fixture_path("en_article.html"));

    session(&tmp)
        .args(["--tokenizer", "unicode"])
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Keyword count 999 is outside"));
}

#[test]
fn test_cli_lists_chart_kinds() {
    cmd()
        .write_stdin("kinds\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("word-cloud"))
        .stderr(predicate::str::contains("交互式条形图"));
}

#[test]
fn test_cli_invalid_chart_kind() {
    cmd()
        .write_stdin("chart radar\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid chart kind"));
}

#[test]
fn test_cli_unknown_command() {
    cmd()
        .write_stdin("fetch everything\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn test_cli_missing_page_keeps_session() {
    let tmp = TempDir::new().unwrap();

    session(&tmp)
        .write_stdin("url file:///nonexistent/page.html\nhelp\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("Commands"));
}

#[test]
fn test_cli_missing_font_is_not_fatal() {
    cmd()
        .args(["--font", "/nonexistent/SimHei.ttf"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Font path: /nonexistent/SimHei.ttf"))
        .stderr(predicate::str::contains("Font file not found"));
}

#[test]
fn test_cli_invalid_tokenizer() {
    cmd().args(["--tokenizer", "klingon"]).assert().failure();
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordlens"));
}

#[test]
fn test_cli_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--chart-dir"))
        .stdout(predicate::str::contains("--tokenizer"));
}
