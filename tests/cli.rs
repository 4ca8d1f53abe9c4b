use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("pa11y-crawl").unwrap()
}

fn banner_start() -> String {
    format!(
        "  pa11y-crawl v{}\n  Crawl a site and run accessibility tests\n\n  Usage: pa11y-crawl [options] <url>\n",
        env!("CARGO_PKG_VERSION")
    )
}

#[test]
fn help_prints_banner_and_exits_zero() {
    for flag in ["-h", "--help"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(banner_start()))
            .stdout(contains("    -q, --quiet                 quiet mode: run tests with no output to stdout\n\n"))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn help_is_stable_across_runs() {
    let first = cmd().arg("--help").output().unwrap().stdout;
    let second = cmd().arg("--help").output().unwrap().stdout;
    assert_eq!(first, second);
}

#[test]
fn help_wins_over_other_flags() {
    cmd()
        .args(["-q", "-h", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(banner_start()));
}

#[test]
fn version_prints_version() {
    cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_url_prints_usage_and_fails() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(banner_start()))
        .stderr(contains("no URL specified"));
}

#[test]
fn unknown_flag_is_usage_error() {
    cmd()
        .args(["--bogus", "https://example.com"])
        .assert()
        .code(1)
        .stderr(contains("--bogus"));
}

#[test]
fn invalid_standard_is_usage_error() {
    cmd()
        .args(["-s", "WCAG3", "https://example.com"])
        .assert()
        .code(1)
        .stderr(contains("WCAG3"));
}

#[test]
fn conflicting_urls_is_usage_error() {
    cmd()
        .args(["-u", "https://a.example", "https://b.example"])
        .assert()
        .code(1)
        .stderr(contains("conflicting URLs"));
}

#[test]
fn non_http_url_is_error() {
    cmd()
        .arg("ftp://example.com")
        .assert()
        .code(2)
        .stderr(contains("Error: Unsupported URL scheme"));
}

#[test]
fn valid_run_prints_config_json() {
    let output = cmd()
        .args(["-u", "https://example.com", "-s", "WCAG2AAA", "-t", "2000", "-r", "ci", "-p"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["url"], "https://example.com/");
    assert_eq!(json["standard"], "WCAG2AAA");
    assert_eq!(json["timeout_ms"], 2000);
    assert_eq!(json["reporter"], "ci");
    assert_eq!(json["parallel"], true);
    assert_eq!(json["exclude_assets"], false);
}

#[test]
fn quiet_run_prints_nothing() {
    cmd()
        .args(["-q", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
