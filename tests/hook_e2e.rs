//! End-to-end tests: spawn the hook binary, feed it stdin JSON, check
//! stdout/stderr, exit codes, and the event log.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hook(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prompt-hook").expect("binary builds");
    // Isolate the run: probe root and log dir both inside the temp dir
    cmd.current_dir(temp.path())
        .env("PROMPT_HOOK_LOG_DIR", temp.path().join("logs"))
        .env_remove("PROMPT_HOOK_LOGGING_DISABLED");
    cmd
}

#[test]
fn enhances_a_flagged_prompt_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin(r#"{"prompt": "fix the login bug -e -test", "session_id": "abc"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Current Date:"))
        .stdout(predicate::str::contains("principal engineering standards"))
        .stdout(predicate::str::contains("CRITICAL DEVELOPMENT RULE"))
        .stdout(predicate::str::contains("comprehensive unit tests"));
}

#[test]
fn low_stakes_prompt_gets_only_ambient_context() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin(r#"{"prompt": "what time is it"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[Current Date:"))
        .stdout(predicate::str::contains("principal engineering standards").not());
}

#[test]
fn help_flag_on_empty_prompt_prints_the_reference() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin(r#"{"prompt": "-hh"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("THINKING MODES"))
        .stdout(predicate::str::contains("principal engineering standards").not());
}

#[test]
fn workflow_flag_without_install_prints_hint() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin(r#"{"prompt": "-bmad-story -e"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMad Story Mode"))
        .stdout(predicate::str::contains("principal engineering standards"));
}

#[test]
fn invalid_json_exits_one_with_bracketed_diagnostic() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin("this is not json")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[Prompt Hook Error:"));
}

#[test]
fn missing_fields_default_and_still_exit_zero() {
    let temp = TempDir::new().unwrap();
    hook(&temp).write_stdin("{}").assert().success();
}

#[test]
fn run_appends_one_event_log_line() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .write_stdin(r#"{"prompt": "fix the login bug -e", "session_id": "s-log"}"#)
        .assert()
        .success();

    let log = temp.path().join("logs").join("prompt_hooks.jsonl");
    let content = std::fs::read_to_string(&log).expect("log file written");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert_eq!(record["session_id"], "s-log");
    assert_eq!(record["clean_prompt"], "fix the login bug");
    assert_eq!(record["flags"][0], "e");
    assert_eq!(record["applied_flags"][0], "e");
    assert_eq!(record["auto_applied_standards"], false);
}

#[test]
fn disabled_logging_writes_no_file_and_keeps_output() {
    let temp = TempDir::new().unwrap();
    hook(&temp)
        .env("PROMPT_HOOK_LOGGING_DISABLED", "1")
        .write_stdin(r#"{"prompt": "fix the login bug"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("principal engineering standards"));

    assert!(!temp.path().join("logs").join("prompt_hooks.jsonl").exists());
}

#[test]
fn detected_workflow_root_changes_the_overview() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("bmad-core")).unwrap();
    std::fs::create_dir_all(temp.path().join("docs/stories")).unwrap();
    std::fs::write(temp.path().join("docs/stories/story-1.md"), "s").unwrap();

    hook(&temp)
        .write_stdin(r#"{"prompt": "continue the work -bmad"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[BMad Method Active]"))
        .stdout(predicate::str::contains("(1 stories)"))
        .stdout(predicate::str::contains("Not Detected").not());
}
