use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn scenario(body: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

const THREE_NEXTS: &str = r#"
viewport_width = 1200
cards = 6
gap = "20px"

[[events]]
type = "next"
[[events]]
type = "next"
[[events]]
type = "next"
[[events]]
type = "next"
"#;

#[test]
fn help_mentions_options() {
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn text_output_walks_to_the_last_page() {
    let file = scenario(THREE_NEXTS);
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    let output = cmd.arg(file.path()).assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5, "{text}");
    assert!(lines[0].contains("initial layout"), "{text}");
    assert!(lines[0].contains("index 0/3 visible 3"), "{text}");
    assert!(lines[3].contains("index 3/3"), "{text}");
    assert!(lines[3].contains("prev on next off"), "{text}");
    assert!(lines[4].ends_with("no-op"), "fourth next is a no-op: {text}");
}

#[test]
fn json_output_reports_one_relayout_per_burst() {
    let mut body = String::from("viewport_width = 1200\ncards = 6\n");
    for width in [1100, 1000, 900, 800, 650] {
        body.push_str(&format!(
            "[[events]]\ntype = \"resize\"\nwidth = {width}\n[[events]]\ntype = \"wait\"\nms = 10\n"
        ));
    }
    let file = scenario(&body);

    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    let output = cmd
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Vec<serde_json::Value> = String::from_utf8_lossy(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let relayouts: Vec<_> = records.iter().filter(|r| r["cause"] == "relayout").collect();
    assert_eq!(relayouts.len(), 1, "{records:?}");
    assert_eq!(relayouts[0]["frame"]["visible_count"], 2);
    assert_eq!(relayouts[0]["frame"]["max_index"], 4);
}

#[test]
fn environment_selects_page_steps() {
    let file = scenario(THREE_NEXTS);
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg(file.path())
        .env("SLIDETRACK__STEP", "page")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1 next               index 3/3"));
}

#[test]
fn config_file_changes_breakpoints() {
    let file = scenario(THREE_NEXTS);
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[breakpoints]\nsingle_max = 1300\ndouble_max = 1400").unwrap();

    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("index 0/5 visible 1"));
}

#[test]
fn invalid_config_is_rejected() {
    let file = scenario(THREE_NEXTS);
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg(file.path())
        .env("SLIDETRACK__BREAKPOINTS__SINGLE_MAX", "1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("breakpoints"));
}

#[test]
fn missing_scenario_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn empty_track_is_left_alone() {
    let file = scenario(
        "viewport_width = 1200\ncards = 0\n[[events]]\ntype = \"next\"\n",
    );
    let mut cmd = cargo_bin_cmd!("slidetrack-sim");
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
