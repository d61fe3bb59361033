use assert_cmd::Command;
use predicates::prelude::*;

fn todo_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("todo-cli").unwrap();
    cmd.env("TODO_CLI_HOME", home);
    cmd
}

/// Pull the id out of a list line like "[ ] [MEDIUM] <id>: Buy milk".
fn extract_id(list_stdout: &str, title: &str) -> String {
    let line = list_stdout
        .lines()
        .find(|l| l.contains(title))
        .unwrap_or_else(|| panic!("no list line for {:?} in {:?}", title, list_stdout));
    let after_priority = line.rsplit("] ").next().unwrap();
    after_priority.split(':').next().unwrap().to_string()
}

#[test]
fn empty_list_prints_no_todos_found() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No todos found.\n");
}

#[test]
fn add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout("Success: Buy milk\n");

    todo_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Found 1 todo(s):\n\n"))
        .stdout(predicate::str::contains("[ ] [MEDIUM] "))
        .stdout(predicate::str::contains(": Buy milk"));
}

#[test]
fn add_with_options_shows_in_list_line() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .args(["add", "Buy milk", "--priority", "high", "--due-date", "2024-01-01"])
        .assert()
        .success();

    todo_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] [HIGH] "))
        .stdout(predicate::str::contains(": Buy milk (due: 2024-01-01)"));
}

#[test]
fn full_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .args(["add", "Buy milk", "--tag", "errand", "--description", "semi-skimmed"])
        .assert()
        .success();

    let list = todo_cmd(temp_dir.path()).arg("list").output().unwrap();
    let id = extract_id(&String::from_utf8(list.stdout).unwrap(), "Buy milk");

    todo_cmd(temp_dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("ID: {}", id)))
        .stdout(predicate::str::contains("Title: Buy milk"))
        .stdout(predicate::str::contains("Status: Pending"))
        .stdout(predicate::str::contains("Priority: medium"))
        .stdout(predicate::str::contains("Description: semi-skimmed"))
        .stdout(predicate::str::contains("Tags: errand"));

    todo_cmd(temp_dir.path())
        .args(["complete", &id])
        .assert()
        .success()
        .stdout("Success: Buy milk\n");

    todo_cmd(temp_dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Completed"));

    todo_cmd(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout("Success\n");

    todo_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No todos found.\n");
}

#[test]
fn completed_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path()).args(["add", "done"]).assert().success();
    todo_cmd(temp_dir.path()).args(["add", "open"]).assert().success();

    let list = todo_cmd(temp_dir.path()).arg("list").output().unwrap();
    let id = extract_id(&String::from_utf8(list.stdout).unwrap(), "done");

    todo_cmd(temp_dir.path()).args(["complete", &id]).assert().success();

    todo_cmd(temp_dir.path())
        .args(["list", "--completed", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 todo(s):"))
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("done"))
        .stdout(predicate::str::contains("open").not());
}

#[test]
fn show_missing_id_is_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .args(["show", "does-not-exist"])
        .assert()
        .success()
        .stdout("Todo not found.\n");
}

#[test]
fn delete_missing_id_renders_failed() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .args(["delete", "does-not-exist"])
        .assert()
        .success()
        .stdout("Failed\n");
}

#[test]
fn unknown_subcommand_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path())
        .arg("frobnicate")
        .assert()
        .failure();
}

#[test]
fn add_without_title_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path()).arg("add").assert().failure();
}

#[test]
fn data_persists_between_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    todo_cmd(temp_dir.path()).args(["add", "sticky"]).assert().success();

    todo_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("sticky"));
}
