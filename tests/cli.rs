use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn skilltune() -> Command {
    Command::cargo_bin("skilltune").unwrap()
}

const GOOD_CANDIDATE: &str = r#"```json
{
  "story": {"as_a": "budget manager", "i_want_to": "see negatives in red", "so_that": "problems stand out"},
  "rules": [
    {"id": "R1", "name": "negatives render red", "examples": [
      {"given": "balance is -500000", "when": "report renders", "then": "amount shows red"},
      {"given": "balance is 200000", "when": "report renders", "then": "amount shows black"}
    ]}
  ],
  "questions": {
    "blocker": ["Which pages are covered?"],
    "clarification": ["Is zero negative?"],
    "future": ["Color-blind palette?"]
  },
  "next_actions": ["confirm palette"]
}
```"#;

#[test]
fn test_cli_help() {
    skilltune().arg("--help").assert().success();
}

#[test]
fn test_cli_version() {
    skilltune()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skilltune"));
}

#[test]
fn test_score_command_prints_breakdown() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidate.txt");
    fs::write(&input, GOOD_CANDIDATE).unwrap();

    skilltune()
        .current_dir(dir.path())
        .args(["score", "--input", "candidate.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Structure: 1.00"))
        .stdout(predicate::str::contains("Diversity: 1.00"))
        .stdout(predicate::str::contains("Combined:"));
}

#[test]
fn test_score_command_unparseable_candidate_is_zero_not_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("garbage.txt");
    fs::write(&input, "definitely not a mapping").unwrap();

    skilltune()
        .current_dir(dir.path())
        .args(["score", "--input", "garbage.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined:  0.00"));
}

#[test]
fn test_score_command_missing_input_fails() {
    let dir = tempdir().unwrap();
    skilltune()
        .current_dir(dir.path())
        .args(["score", "--input", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_score_command_writes_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidate.txt");
    fs::write(&input, GOOD_CANDIDATE).unwrap();

    skilltune()
        .current_dir(dir.path())
        .args(["score", "--input", "candidate.txt", "--report-dir", "out"])
        .assert()
        .success();

    let reports: Vec<_> = fs::read_dir(dir.path().join("out"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(reports.len(), 1);
    let content = fs::read_to_string(reports[0].path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed["combined"].as_f64().unwrap() > 0.8);
}

#[test]
fn test_judge_command_without_credential_fails_before_scoring() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("candidate.txt");
    fs::write(&input, GOOD_CANDIDATE).unwrap();

    skilltune()
        .current_dir(dir.path())
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("SKILLTUNE_API_KEY")
        .args(["judge", "--input", "candidate.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credential"));
}

#[test]
fn test_dataset_fixed_split() {
    skilltune()
        .args(["dataset", "--mode", "fixed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 total, 3 train / 2 validation"));
}

#[test]
fn test_dataset_rejects_bad_ratio() {
    skilltune()
        .args(["dataset", "--mode", "fixed", "--ratio", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("split ratio"));
}

#[test]
fn test_dataset_random_seeded_is_reproducible() {
    let run = || {
        let output = skilltune()
            .args(["dataset", "--mode", "random", "--ratio", "0.7", "--seed", "7"])
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}
