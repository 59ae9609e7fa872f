//! CLI round trips over temporary working directories.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn lossmap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lossmap").expect("binary builds");
    cmd.current_dir(dir.path())
        .env_remove("LOSSMAP_ENDPOINT_URL")
        .env_remove("LOSSMAP_ENDPOINT_KEY");
    cmd
}

fn write_assessment(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("assessment written");
}

const SCORED_ASSESSMENT: &str = r#"
company = "Verma Textiles"

[[gaps]]
id = 1
active = true
quantity = 5.0
unit_cost = 500.0

[[gaps]]
id = 2
active = true
quantity = 3.0
unit_cost = 15000.0
"#;

#[test]
fn init_writes_starters_and_report_reads_them() {
    let dir = TempDir::new().unwrap();

    lossmap(&dir).arg("init").assert().success();
    assert!(dir.path().join("lossmap.toml").exists());
    assert!(dir.path().join("assessment.toml").exists());

    // Running init again without --force refuses
    lossmap(&dir).arg("init").assert().failure();

    let output = lossmap(&dir)
        .args(["report", "assessment.toml", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // Starter activates gap 1 with 5 h/week at ₹500
    assert_eq!(value["summary"]["total_annual_loss"], 120_000.0);
}

#[test]
fn terminal_report_shows_totals_and_tiers() {
    let dir = TempDir::new().unwrap();
    write_assessment(&dir, "session.toml", SCORED_ASSESSMENT);

    let output = lossmap(&dir)
        .args(["--plain", "report", "session.toml"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.contains("Company: Verma Textiles"));
    assert!(stdout.contains("Total annual loss: ₹6,60,000"));
    assert!(stdout.contains("HIGH"));
    assert!(stdout.contains("LOW"));
}

#[test]
fn export_writes_a_date_stamped_artifact() {
    let dir = TempDir::new().unwrap();
    write_assessment(&dir, "session.toml", SCORED_ASSESSMENT);

    lossmap(&dir)
        .args(["export", "session.toml"])
        .assert()
        .success();

    let exported: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| {
            name.starts_with("Leadership-Assessment-Report-") && name.ends_with(".json")
        })
        .collect();
    assert_eq!(exported.len(), 1);

    let content = fs::read_to_string(dir.path().join(&exported[0])).unwrap();
    let document: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(document["width"], 210.0);
    assert!(document["pages"].as_array().unwrap().len() >= 2);
}

#[test]
fn print_renders_html_but_refuses_an_empty_report() {
    let dir = TempDir::new().unwrap();
    write_assessment(&dir, "session.toml", SCORED_ASSESSMENT);
    write_assessment(&dir, "empty.toml", "gaps = []\n");

    let output = lossmap(&dir)
        .args(["print", "session.toml"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(stdout.contains("₹6,60,000"));

    let output = lossmap(&dir).args(["print", "empty.toml"]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nothing to print"));
}

#[test]
fn suggest_maps_problems_to_gap_titles() {
    let dir = TempDir::new().unwrap();

    let output = lossmap(&dir)
        .args(["--plain", "suggest", "meeting-waste,hiring-mistakes"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.contains("Meetings"));
    assert!(stdout.contains("Interviewing"));
    assert!(stdout.contains("2 unique gap(s)"));
}

#[test]
fn submit_without_endpoint_acknowledges_offline() {
    let dir = TempDir::new().unwrap();
    write_assessment(
        &dir,
        "session.toml",
        &format!(
            "{SCORED_ASSESSMENT}\n[lead]\nname = \"Asha\"\nemail = \"asha@example.in\"\nphone = \"+91 98765 43210\"\n"
        ),
    );

    let output = lossmap(&dir)
        .args(["--plain", "submit", "session.toml"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("No lead endpoint configured"));
}

#[test]
fn submit_with_missing_fields_fails_validation() {
    let dir = TempDir::new().unwrap();
    write_assessment(
        &dir,
        "session.toml",
        &format!("{SCORED_ASSESSMENT}\n[lead]\nname = \"Asha\"\n"),
    );

    let output = lossmap(&dir)
        .args(["submit", "session.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing required fields"));
}
