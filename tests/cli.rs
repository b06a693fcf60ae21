//! CLI behavior tests: exit codes, output formats, persistence, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BURNED_OUT: &str = r#"{
    "emotionalExhaustion": [3, 3, 3, 3, 3],
    "cynicism": [2, 2, 2, 2],
    "academicEfficacy": [3, 3, 3, 3, 3, 3]
}"#;

const NOT_BURNED_OUT: &str = r#"{
    "emotionalExhaustion": [1, 1, 1, 1, 1],
    "cynicism": [1, 1, 1, 1],
    "academicEfficacy": [5, 5, 5, 5, 5, 5]
}"#;

const HIGH_BURNOUT: &str = r#"{
    "emotionalExhaustion": [5, 5, 5, 5, 1],
    "cynicism": [6, 6, 6, 0],
    "academicEfficacy": [6, 6, 6, 6, 6, 6]
}"#;

fn mbiss_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mbiss"));
    cmd.current_dir(dir)
        .env_remove("MBISS_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_answers(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn no_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    mbiss_cmd(dir.path()).assert().failure().code(2);
}

#[test]
fn questions_lists_every_subscale() {
    let dir = TempDir::new().unwrap();
    mbiss_cmd(dir.path())
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotional Exhaustion"))
        .stdout(predicate::str::contains("I doubt the significance of my studies."))
        .stdout(predicate::str::contains("Academic Efficacy"));
}

#[test]
fn questions_json_valid() {
    let dir = TempDir::new().unwrap();
    let output = mbiss_cmd(dir.path())
        .args(["questions", "--json", "--variant", "extended"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["variant"], "extended");
    assert_eq!(value["sections"].as_array().unwrap().len(), 3);
}

#[test]
fn submit_writes_result_table() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", BURNED_OUT);

    mbiss_cmd(dir.path())
        .arg("submit")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotional Exhaustion Score: 15"))
        .stdout(predicate::str::contains("Burned Out"))
        .stderr(predicate::str::contains("saved"));

    let table = fs::read_to_string(dir.path().join("mbi_results.csv")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Timestamp,Emotional Exhaustion,Cynicism,Academic Efficacy,Classification"
    );
    assert!(lines[1].ends_with(",15,8,18,Burned Out"), "{}", lines[1]);
}

#[test]
fn two_submissions_give_two_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let first = write_answers(dir.path(), "first.json", BURNED_OUT);
    let second = write_answers(dir.path(), "second.json", NOT_BURNED_OUT);

    for answers in [&first, &second] {
        mbiss_cmd(dir.path())
            .args(["submit", "--quiet", "--answers"])
            .arg(answers)
            .assert()
            .success();
    }

    let table = fs::read_to_string(dir.path().join("mbi_results.csv")).unwrap();
    let rows: Vec<&str> = table.lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].ends_with("Burned Out") && !rows[0].ends_with("Not Burned Out"));
    assert!(rows[1].ends_with("Not Burned Out"));
}

#[test]
fn out_of_range_rating_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(
        dir.path(),
        "bad.json",
        r#"{
            "emotionalExhaustion": [3, 3, 7, 3, 3],
            "cynicism": [2, 2, 2, 2],
            "academicEfficacy": [3, 3, 3, 3, 3, 3]
        }"#,
    );

    mbiss_cmd(dir.path())
        .arg("submit")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
    assert!(!dir.path().join("mbi_results.csv").exists());
}

#[test]
fn short_subscale_is_rejected() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(
        dir.path(),
        "short.json",
        r#"{
            "emotionalExhaustion": [3, 3, 3, 3, 3],
            "cynicism": [2, 2, 2],
            "academicEfficacy": [3, 3, 3, 3, 3, 3]
        }"#,
    );

    mbiss_cmd(dir.path())
        .arg("submit")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected 4 ratings, got 3"));
}

#[test]
fn extended_requires_consent_flag_with_answers_file() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);

    mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended", "--answers"])
        .arg(&answers)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Consent"));
    assert!(!dir.path().join("mbi_results_extended.csv").exists());
}

#[test]
fn extended_submission_with_image() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);
    let image = dir.path().join("photo.PNG");
    fs::write(&image, [137u8, 80, 78, 71]).unwrap();

    let output = mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended", "--consent", "--json", "--answers"])
        .arg(&answers)
        .arg("--image")
        .arg(&image)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["assessment"]["classification"], "High Burnout");
    assert_eq!(value["assessment"]["scores"]["academicEfficacy"], 0);
    assert_eq!(value["record"]["ImageProvided"], true);

    let saved: Vec<_> = fs::read_dir(dir.path().join("uploaded_images"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].starts_with("image_") && saved[0].ends_with(".png"));

    assert!(!dir.path().join("mbi_results.csv").exists());
    let table = fs::read_to_string(dir.path().join("mbi_results_extended.csv")).unwrap();
    assert!(table.lines().next().unwrap().ends_with(",ImageProvided"));
    assert!(table.lines().nth(1).unwrap().ends_with(",21,18,0,High Burnout,true"));
}

#[test]
fn variants_in_one_directory_keep_separate_tables() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);

    mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended", "--consent", "--quiet", "--answers"])
        .arg(&answers)
        .assert()
        .success();
    mbiss_cmd(dir.path())
        .args(["submit", "--quiet", "--answers"])
        .arg(&answers)
        .assert()
        .success();

    let extended = fs::read_to_string(dir.path().join("mbi_results_extended.csv")).unwrap();
    let standard = fs::read_to_string(dir.path().join("mbi_results.csv")).unwrap();
    assert_eq!(extended.lines().count(), 2);
    assert_eq!(standard.lines().count(), 2);
    assert!(extended.lines().nth(1).unwrap().ends_with(",21,18,0,High Burnout,false"));
    assert!(standard.lines().nth(1).unwrap().ends_with(",21,18,36,Burned Out"));
}

#[test]
fn shared_table_refuses_the_other_rule() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);

    mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended", "--consent", "--quiet"])
        .args(["--results", "shared.csv", "--answers"])
        .arg(&answers)
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("shared.csv")).unwrap();

    mbiss_cmd(dir.path())
        .args(["submit", "--quiet", "--results", "shared.csv", "--answers"])
        .arg(&answers)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("refusing to add a binary result"));
    assert_eq!(fs::read_to_string(dir.path().join("shared.csv")).unwrap(), before);
}

#[test]
fn unsupported_image_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);
    let image = dir.path().join("photo.gif");
    fs::write(&image, b"GIF89a").unwrap();

    mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended", "--consent", "--answers"])
        .arg(&answers)
        .arg("--image")
        .arg(&image)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported image type"));
}

#[test]
fn interactive_form_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let stdin = vec!["2"; 15].join("\n");

    mbiss_cmd(dir.path())
        .args(["submit", "--quiet"])
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("EE 10 | CY 8 | AE 12 => Burned Out"));
}

#[test]
fn interactive_extended_declined_consent() {
    let dir = TempDir::new().unwrap();
    mbiss_cmd(dir.path())
        .args(["submit", "--variant", "extended"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Consent"));
}

#[test]
fn missing_answers_file_exit_2() {
    let dir = TempDir::new().unwrap();
    mbiss_cmd(dir.path())
        .args(["submit", "--answers", "nonexistent.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read answers"));
}

#[test]
fn results_summarizes_table() {
    let dir = TempDir::new().unwrap();
    let first = write_answers(dir.path(), "first.json", BURNED_OUT);
    let second = write_answers(dir.path(), "second.json", NOT_BURNED_OUT);
    for answers in [&first, &first, &second] {
        mbiss_cmd(dir.path())
            .args(["submit", "--quiet", "--answers"])
            .arg(answers)
            .assert()
            .success();
    }

    let output = mbiss_cmd(dir.path())
        .args(["results", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["submissions"], 3);
    assert_eq!(value["records"].as_array().unwrap().len(), 3);
    assert_eq!(value["summary"]["byClassification"][0]["classification"], "Burned Out");
    assert_eq!(value["summary"]["byClassification"][0]["count"], 2);
}

#[test]
fn results_on_empty_store() {
    let dir = TempDir::new().unwrap();
    mbiss_cmd(dir.path())
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("No submissions stored yet."));
}

#[test]
fn config_file_selects_variant_and_results_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".mbissrc.json"),
        r#"{ "variant": "extended", "resultsFile": "out/extended.csv" }"#,
    )
    .unwrap();
    let answers = write_answers(dir.path(), "a.json", HIGH_BURNOUT);

    mbiss_cmd(dir.path())
        .args(["submit", "--consent", "--quiet", "--answers"])
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("High Burnout"));
    assert!(dir.path().join("out").join("extended.csv").exists());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".mbissrc.json");
    mbiss_cmd(dir.path())
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();
    assert!(config_path.exists(), ".mbissrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("\"variant\": \"standard\""));
    assert!(content.contains("thresholds"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".mbissrc.json");
    fs::write(&config_path, "{}").unwrap();
    mbiss_cmd(dir.path())
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");
}
