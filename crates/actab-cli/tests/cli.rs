use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn actab(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("actab").unwrap();
    cmd.arg("--dir").arg(dir.path());
    cmd
}

const PASTE: &str = "_30\tAxisX\t12\tBOOL\nwrapped tail text\n_31\tAxisX_NotHomed\t13\tBOOL\n";

#[test]
fn import_save_list_expand_workflow() {
    let dir = TempDir::new().unwrap();
    let paste = dir.path().join("paste.txt");
    std::fs::write(&paste, PASTE).unwrap();

    actab(&dir)
        .args(["import", "--save", "ServoAxis", "--description", "servo axis rows"])
        .arg(&paste)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template 'ServoAxis' with 2 actuators"));

    actab(&dir)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ServoAxis"))
        .stdout(predicate::str::contains("servo axis rows"));

    actab(&dir)
        .args(["expand", "--template", "ServoAxis", "--actuator", "40:AxisQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Actuator\tName"))
        .stdout(predicate::str::contains("_40\tAxisQ\t12\tBOOL"))
        .stdout(predicate::str::contains("_40\tAxisQ_NotHomed\t13\tBOOL"));
}

#[test]
fn import_reads_stdin() {
    let dir = TempDir::new().unwrap();
    actab(&dir)
        .arg("import")
        .write_stdin(PASTE)
        .assert()
        .success()
        .stdout(predicate::str::contains("{ActuatorName}_NotHomed"));
}

#[test]
fn import_of_unusable_text_reports_no_data() {
    let dir = TempDir::new().unwrap();
    actab(&dir)
        .arg("import")
        .write_stdin("_138\n_139\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data found"));
}

#[test]
fn expand_rejects_duplicate_actuator_numbers() {
    let dir = TempDir::new().unwrap();
    let paste = dir.path().join("paste.txt");
    std::fs::write(&paste, PASTE).unwrap();
    actab(&dir)
        .args(["import", "--save", "ServoAxis"])
        .arg(&paste)
        .assert()
        .success();

    actab(&dir)
        .args([
            "expand",
            "--template",
            "ServoAxis",
            "--actuator",
            "30:AxisX",
            "--actuator",
            "30:AxisZ",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate actuator number: 30"));
}

#[test]
fn expand_rejects_non_numeric_id() {
    let dir = TempDir::new().unwrap();
    let paste = dir.path().join("paste.txt");
    std::fs::write(&paste, PASTE).unwrap();
    actab(&dir)
        .args(["import", "--save", "ServoAxis"])
        .arg(&paste)
        .assert()
        .success();

    actab(&dir)
        .args(["expand", "--template", "ServoAxis", "--actuator", "3a:AxisX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain only digits"));
}

#[test]
fn expand_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    actab(&dir)
        .args(["expand", "--template", "Nope", "--actuator", "1:X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template 'Nope' not found"));
}

#[test]
fn template_export_import_round_trip() {
    let dir = TempDir::new().unwrap();
    let paste = dir.path().join("paste.txt");
    std::fs::write(&paste, PASTE).unwrap();
    actab(&dir)
        .args(["import", "--save", "ServoAxis"])
        .arg(&paste)
        .assert()
        .success();

    let exported = dir.path().join("servo.json");
    actab(&dir)
        .args(["template", "export", "ServoAxis"])
        .arg(&exported)
        .assert()
        .success();

    let other = TempDir::new().unwrap();
    actab(&other)
        .args(["template", "import"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("ServoAxis"));

    actab(&other)
        .args(["template", "show", "ServoAxis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Components per actuator: 2"));
}

#[test]
fn template_delete_removes_it() {
    let dir = TempDir::new().unwrap();
    let paste = dir.path().join("paste.txt");
    std::fs::write(&paste, PASTE).unwrap();
    actab(&dir)
        .args(["import", "--save", "ServoAxis"])
        .arg(&paste)
        .assert()
        .success();

    actab(&dir)
        .args(["template", "delete", "ServoAxis"])
        .assert()
        .success();

    actab(&dir)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates yet."));
}

#[test]
fn json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = actab(&dir)
        .args(["--json", "import"])
        .write_stdin(PASTE)
        .output()
        .unwrap();
    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
    assert_eq!(records[0]["name"], "{ActuatorName}");
}
