use assert_fs::prelude::*;
use predicates::prelude::*;

const RESULTS_JSON: &str = r#"{
  "OPTIVIS": [
    {"designMethod": "OPTIVIS", "enrollment": 15, "primaryEndpointPower": 0.65, "totalPatients": 150, "nToScreen": 300, "cost": 1500000},
    {"designMethod": "OPTIVIS", "enrollment": 20, "primaryEndpointPower": 0.8, "totalPatients": 200, "nToScreen": 400, "cost": 2000000},
    {"designMethod": "OPTIVIS", "enrollment": 25, "primaryEndpointPower": 0.9, "totalPatients": 250, "nToScreen": 500, "cost": 2500000}
  ],
  "TRADITIONAL": [
    {"designMethod": "TRADITIONAL", "enrollment": 9, "primaryEndpointPower": 0.7, "totalPatients": 90, "nToScreen": 270, "cost": 900000},
    {"designMethod": "TRADITIONAL", "enrollment": 25, "primaryEndpointPower": 0.79, "totalPatients": 250, "nToScreen": 500, "cost": 2500000},
    {"designMethod": "TRADITIONAL", "enrollment": 31, "primaryEndpointPower": 0.88, "totalPatients": 310, "nToScreen": 930, "cost": 3100000}
  ]
}"#;

fn results_file() -> assert_fs::NamedTempFile {
    let file = assert_fs::NamedTempFile::new("results.json").unwrap();
    file.write_str(RESULTS_JSON).unwrap();
    file
}

#[test]
fn highlight_uses_default_nominal_power() {
    let input = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optivis");
    cmd.args(["highlight", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Chart: Enrollment vs Power"))
        .stdout(predicate::str::contains("OPTIVIS index: 1 (x=20.00, y=0.80)"))
        .stdout(predicate::str::contains("Traditional index: 1 (x=25.00, y=0.79)"));
}

#[test]
fn highlight_follows_target_x() {
    let input = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optivis");
    cmd.args([
        "highlight",
        "-i",
        input.path().to_str().unwrap(),
        "-k",
        "sample-size-vs-cost",
        "-x",
        "245",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Chart: Sample Size vs Cost"))
        .stdout(predicate::str::contains("OPTIVIS index: 2 (x=250.00, y=2.50)"))
        .stdout(predicate::str::contains("Traditional index: 1 (x=250.00, y=2.50)"));
}

#[test]
fn highlight_matches_traditional_on_screen_counts() {
    let input = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optivis");
    cmd.args([
        "highlight",
        "-i",
        input.path().to_str().unwrap(),
        "-k",
        "sample-size-vs-screen",
        "-x",
        "245",
    ]);

    // power 0.9 would pick 0.88; 500 screened picks the 500 row
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Chart: Sample Size vs Patients Screened"))
        .stdout(predicate::str::contains("OPTIVIS index: 2 (x=250.00, y=500.00)"))
        .stdout(predicate::str::contains("Traditional index: 1 (x=250.00, y=500.00)"));
}

#[test]
fn report_prints_comparison_table() {
    let input = results_file();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optivis");
    cmd.args(["report", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Data source: results.json"))
        .stdout(predicate::str::contains("Total patients | 200 | 250 | 50"))
        .stdout(predicate::str::contains("Sample size reduction: 20.00%"));
}

#[test]
fn report_handles_results_without_valid_optivis_power() {
    let input = assert_fs::NamedTempFile::new("results.json").unwrap();
    input
        .write_str(r#"{"OPTIVIS": [{"designMethod": "OPTIVIS", "enrollment": 1, "primaryEndpointPower": 0.4, "totalPatients": 10, "nToScreen": 20, "cost": 100}]}"#)
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("optivis");
    cmd.args(["report", "-i", input.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No comparison available"));
}
