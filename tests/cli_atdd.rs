use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn refscore() -> Command {
    Command::cargo_bin("refscore").expect("binary should compile")
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should create");
    }
    fs::write(&path, content).expect("file should write");
    path
}

#[test]
fn score_full_reproduction_is_completed_with_exit_zero() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "The quick brown fox jumps.");
    let candidate = write_file(&dir, "candidate.txt", "the quick brown fox jumps");

    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("progress: 100%"))
        .stdout(predicate::str::contains("[completed]"));
}

#[test]
fn score_partial_reproduction_exits_incomplete() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(
        &dir,
        "reference.txt",
        "the quick brown fox jumps over the lazy dog",
    );
    let candidate = write_file(&dir, "candidate.txt", "brown fox jumps");

    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("progress: 33%"));
}

#[test]
fn score_json_format_emits_response_shape() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "alpha beta gamma");
    let candidate = write_file(&dir, "candidate.txt", "alpha beta gamma");

    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"progress_percentage\": 100"))
        .stdout(predicate::str::contains("\"is_completed\": true"));
}

#[test]
fn score_overlap_strategy_ignores_word_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "a b");
    let candidate = write_file(&dir, "candidate.txt", "b a");

    // Alignment: no offset aligns both tokens.
    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("progress: 0%"));

    // Overlap: full vocabulary coverage, but below the default minimum
    // word threshold only the quality term contributes.
    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .arg("--strategy")
        .arg("overlap")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("progress: 40%"));
}

#[test]
fn score_empty_reference_exits_no_reference() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "  ...  ");
    let candidate = write_file(&dir, "candidate.txt", "some words");

    refscore()
        .arg("score")
        .arg(&candidate)
        .arg(&reference)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no reference text available"));
}

#[test]
fn check_records_progress_in_store() {
    let project = TempDir::new().expect("temp dir should be created");
    write_file(
        &project,
        "refscore.toml",
        r#"
[project]
name = "sample"
"#,
    );
    write_file(&project, "references/essay-1.md", "the quick brown fox");
    let candidate = write_file(&project, "draft.txt", "quick brown");

    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("essay-1")
        .arg("--user")
        .arg("ada")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("progress: 50%"))
        .stdout(predicate::str::contains("progress recorded:"));

    let store_content = fs::read_to_string(project.path().join(".refscore/progress.json"))
        .expect("store file should exist");
    assert!(store_content.contains("\"task\": \"essay-1\""));
    assert!(store_content.contains("\"user\": \"ada\""));
    assert!(store_content.contains("\"progress_percentage\": 50"));
}

#[test]
fn check_skips_rescoring_unchanged_submission() {
    let project = TempDir::new().expect("temp dir should be created");
    write_file(
        &project,
        "refscore.toml",
        r#"
[project]
name = "sample"
"#,
    );
    write_file(&project, "references/essay-1.md", "alpha beta gamma");
    let candidate = write_file(&project, "draft.txt", "alpha beta gamma");

    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("essay-1")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("progress: 100%"));

    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("essay-1")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("unchanged submission"))
        .stdout(predicate::str::contains("stored progress: 100%"));
}

#[test]
fn check_missing_reference_exits_no_reference() {
    let project = TempDir::new().expect("temp dir should be created");
    write_file(
        &project,
        "refscore.toml",
        r#"
[project]
name = "sample"
"#,
    );
    let candidate = write_file(&project, "draft.txt", "some words");

    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("missing-task")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "no reference text available for task: missing-task",
        ));
}

#[test]
fn check_warns_when_project_has_no_config() {
    let project = TempDir::new().expect("temp dir should be created");
    write_file(&project, "references/essay-1.md", "alpha beta gamma");
    let candidate = write_file(&project, "draft.txt", "alpha beta gamma");

    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("essay-1")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("no refscore.toml found"));
}

#[test]
fn check_honors_configured_overlap_strategy() {
    let project = TempDir::new().expect("temp dir should be created");
    write_file(
        &project,
        "refscore.toml",
        r#"
[project]
name = "sample"

[scoring]
strategy = "overlap"
target_words = 3
min_words = 1
"#,
    );
    write_file(&project, "references/essay-1.md", "gamma beta alpha");
    let candidate = write_file(&project, "draft.txt", "alpha beta gamma");

    // Reversed order still completes under the overlap strategy.
    refscore()
        .arg("check")
        .arg(project.path())
        .arg(&candidate)
        .arg("--task")
        .arg("essay-1")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("progress: 100%"));
}

#[test]
fn batch_scores_each_submission_and_reports_totals() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "the quick brown fox");
    let submissions = dir.path().join("submissions");
    fs::create_dir_all(&submissions).expect("submissions dir should create");
    fs::write(submissions.join("complete.txt"), "the quick brown fox")
        .expect("file should write");
    fs::write(submissions.join("partial.txt"), "quick brown").expect("file should write");

    refscore()
        .arg("batch")
        .arg(&submissions)
        .arg(&reference)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("complete.txt: 100% [completed]"))
        .stdout(predicate::str::contains("partial.txt: 50%"))
        .stdout(predicate::str::contains("completed 1/2 submissions"));
}

#[test]
fn batch_with_no_candidates_succeeds() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reference = write_file(&dir, "reference.txt", "words here");
    let submissions = dir.path().join("submissions");
    fs::create_dir_all(&submissions).expect("submissions dir should create");

    refscore()
        .arg("batch")
        .arg(&submissions)
        .arg(&reference)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("no candidate files"));
}

#[test]
fn init_writes_config_then_refuses_overwrite() {
    let project = TempDir::new().expect("temp dir should be created");

    refscore()
        .arg("init")
        .arg(project.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("initialized:"));
    assert!(project.path().join("refscore.toml").exists());
    assert!(project.path().join("references").is_dir());

    refscore()
        .arg("init")
        .arg(project.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));

    refscore()
        .arg("init")
        .arg(project.path())
        .arg("--force")
        .assert()
        .code(0);
}
