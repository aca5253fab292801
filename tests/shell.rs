//! End-to-end tests driving the `mini-shell` binary.
//!
//! There is no timeout on children: a command that never exits blocks the
//! shell forever, so every command used here terminates on its own.

use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shell(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mini-shell").unwrap();
    cmd.env("HOME", home).env_remove("MINISH_LOG").current_dir(home);
    cmd
}

/// Writes `body` to a script in `dir` and returns its path.
fn script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("script.msh");
    fs::write(&path, body).unwrap();
    path
}

fn canonical(dir: &TempDir) -> String {
    dir.path().canonicalize().unwrap().to_str().unwrap().to_string()
}

#[test]
fn test_interactive_banner_and_exit() {
    let home = tempfile::tempdir().unwrap();
    shell(home.path())
        .write_stdin("echo hello\nexit\necho unreachable\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to mini-shell."))
        .stdout(predicate::str::contains("shell $ hello\n"))
        .stdout(predicate::str::contains("Bye bye."))
        .stdout(predicate::str::contains("unreachable").not());
}

#[test]
fn test_eof_exits_cleanly() {
    let home = tempfile::tempdir().unwrap();
    shell(home.path()).write_stdin("echo hi").assert().success();
}

#[test]
fn test_config_prompt() {
    let home = tempfile::tempdir().unwrap();
    let rc = home.path().join("custom.rc");
    fs::write(&rc, "prompt=>> \nbanner=hello there\n").unwrap();
    shell(home.path())
        .arg("--config")
        .arg(&rc)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hello there\n>> "));
}

#[test]
fn test_sequence_runs_every_segment_in_order() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "false; echo one;echo two\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("one\ntwo\n"));
}

#[test]
fn test_pipeline_goes_through_the_channel() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "printf A | tr A B > out.txt\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(home.path().join("out.txt")).unwrap(), "B");
}

#[test]
fn test_double_bar_pipes_like_a_single_one() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "printf A || tr A B\nprintf C | tr C D |\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("BD"));
}

#[test]
fn test_three_stage_pipeline_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "echo a | cat | cat\necho still-here\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("still-here\n"))
        .stderr(predicate::str::contains("only two-stage pipelines"));
}

#[test]
fn test_output_redirect_truncates() {
    let home = tempfile::tempdir().unwrap();
    let target = home.path().join("x");
    let line = format!("echo redirected > {}\n", target.display());
    let path = script(&home, &format!("echo much longer first line > {}\n{}", target.display(), line));
    shell(home.path()).arg(&path).assert().success();
    assert_eq!(fs::read_to_string(&target).unwrap(), "redirected\n");
}

#[test]
fn test_input_redirect() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("words"), "pear\napple\n").unwrap();
    let path = script(&home, "sort < words\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("apple\npear\n"));
}

#[test]
fn test_double_gt_is_not_append() {
    // `>>` is two single `>` tokens: the first takes the second as its path
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "echo a >> f\n");
    shell(home.path()).arg(&path).assert().success();
    assert_eq!(fs::read_to_string(home.path().join(">")).unwrap(), "a f\n");
    assert!(!home.path().join("f").exists());
}

#[test]
fn test_redirect_failure_does_not_stop_the_shell() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "cat < missing.txt\necho still-here\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("still-here\n"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_unknown_program_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "no-such-program-xyz arg\necho next\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("next\n"))
        .stderr(predicate::str::contains("mini-shell: no-such-program-xyz"));
}

#[test]
fn test_cd_to_missing_dir_leaves_cwd() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "cd nonexistent_dir_xyz\npwd\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", canonical(&home))))
        .stderr(predicate::str::contains("cd: nonexistent_dir_xyz"));
}

#[test]
fn test_bare_cd_goes_home() {
    let home = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let path = script(&elsewhere, "cd\npwd\n");
    shell(home.path())
        .current_dir(elsewhere.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", canonical(&home))));
}

#[test]
fn test_bare_cd_without_home_stays_put() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "cd\npwd\n");
    shell(home.path())
        .env_remove("HOME")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", canonical(&home))))
        .stderr(predicate::str::contains("cd: HOME not set"));
}

#[test]
fn test_cd_into_subdir() {
    let home = tempfile::tempdir().unwrap();
    fs::create_dir(home.path().join("sub")).unwrap();
    let path = script(&home, "cd sub\npwd\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}/sub\n", canonical(&home))));
}

#[test]
fn test_prev_replays_the_last_line() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "prev\necho again\nprev\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("again\nPrevious command: echo again\nagain\n"));
}

#[test]
fn test_prev_replays_a_pipeline() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "printf abc | wc -c\nprev\n");
    let out = shell(home.path()).arg(&path).assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();
    let counts: Vec<&str> = out.lines().filter(|l| !l.starts_with("Previous")).map(str::trim).collect();
    assert_eq!(counts, vec!["3", "3"]);
}

#[test]
fn test_help_lists_builtins() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "help\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("Supported built-in commands: cd, prev, source, help, exit\n"));
}

#[test]
fn test_source_runs_file_and_ignores_exit() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("lib.msh"), "echo from-file\nexit\necho after-exit").unwrap();
    let path = script(&home, "source lib.msh\necho back\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("from-file\nafter-exit\nback\n"));
}

#[test]
fn test_source_missing_file_keeps_running() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "source nope.msh\nsource\necho alive\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("alive\n"))
        .stderr(predicate::str::contains("could not open"))
        .stderr(predicate::str::contains("expected filename"));
}

#[test]
fn test_quoted_argument_is_one_word() {
    let home = tempfile::tempdir().unwrap();
    let path = script(&home, "printf \"%s,\" \"hi there\" foo\n");
    shell(home.path())
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::diff("hi there,foo,"));
}

#[test]
fn test_missing_script_fails() {
    let home = tempfile::tempdir().unwrap();
    shell(home.path())
        .arg("does-not-exist.msh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.msh"));
}
