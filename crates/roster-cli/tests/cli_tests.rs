//! End-to-end tests for the `roster` binary.
//!
//! Everything runs with `--offline` (the built-in fixture users) unless a
//! test is specifically about the network path.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `roster` with an isolated config directory and no inherited log filter.
fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"))
        .stdout(predicate::str::contains("users"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    let home = TempDir::new().unwrap();
    roster(&home).arg("frobnicate").assert().code(2);
}

// ── users list ────────────────────────────────────────────────────────────────

#[test]
fn list_shows_first_five_fixture_users() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leanne Graham"))
        .stdout(predicate::str::contains("Chelsey Dietrich"))
        .stdout(predicate::str::contains("Mrs. Dennis Schulist").not());
}

#[test]
fn list_as_json() {
    let home = TempDir::new().unwrap();
    let output = roster(&home)
        .args(["--offline", "--output-format", "json", "users", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let users = json_stdout(&output);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0]["id"], 1);
    assert_eq!(users[4]["email"], "Lucio_Hettinger@annie.ca");
}

#[test]
fn display_limit_from_environment() {
    let home = TempDir::new().unwrap();
    let output = roster(&home)
        .env("ROSTER_COLLECTION__DISPLAY_LIMIT", "2")
        .args(["--offline", "--output-format", "json", "users", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_stdout(&output).as_array().unwrap().len(), 2);
}

#[test]
fn unreachable_api_exits_1_with_fetch_message() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--api-url", "http://127.0.0.1:9/users", "users", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch users"));
}

#[test]
fn invalid_api_url_exits_4() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--api-url", "not a url", "users", "list"])
        .assert()
        .code(4);
}

// ── users show / create / update / delete ────────────────────────────────────

#[test]
fn show_fetches_any_fixture_user() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "show", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Glenna Reichert"));
}

#[test]
fn create_appends_with_next_id() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args([
            "--offline", "users", "create", "--name", "Ada Lovelace", "--email", "ada@x.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user 11"))
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn create_with_blank_name_exits_2() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "create", "--name", "  ", "--email", "a@x.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn update_changes_only_the_given_field() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "update", "3", "--email", "new@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clementine Bauch"))
        .stdout(predicate::str::contains("new@x.com"));
}

#[test]
fn update_without_fields_exits_2() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "update", "3"])
        .assert()
        .code(2);
}

#[test]
fn update_of_unloaded_user_exits_3() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "update", "8", "--name", "X"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("User 8 is not in the collection"));
}

#[test]
fn delete_with_yes_removes_the_user() {
    let home = TempDir::new().unwrap();
    let output = roster(&home)
        .args(["--offline", "--output-format", "json", "users", "delete", "2", "--yes"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let ids: Vec<u64> = json_stdout(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[test]
fn delete_without_yes_refuses_when_not_interactive() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "users", "delete", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

// ── theme ─────────────────────────────────────────────────────────────────────

#[test]
fn theme_toggle_from_default() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn theme_set_as_json() {
    let home = TempDir::new().unwrap();
    let output = roster(&home)
        .args(["--output-format", "json", "theme", "set", "dark"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["theme"], "dark");
}

// ── shell ─────────────────────────────────────────────────────────────────────

#[test]
fn shell_session_keeps_state_between_commands() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "shell"])
        .write_stdin(
            "create ada@x.com Ada Lovelace\n\
             update 1 name Leanne G\n\
             delete 2\n\
             update 9 name Nobody\n\
             theme toggle\n\
             bogus\n\
             quit\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Leanne G "))
        .stdout(predicate::str::contains("Users (5)"))
        .stdout(predicate::str::contains("User 9 is not in the collection"))
        .stdout(predicate::str::contains("Theme: dark"))
        .stdout(predicate::str::contains("Unknown command 'bogus'"));
}

#[test]
fn shell_ends_at_end_of_input() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--offline", "shell"])
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Users (5)"));
}

// ── init / config ─────────────────────────────────────────────────────────────

#[test]
fn init_then_read_back() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("roster.toml");
    let path_str = path.to_str().unwrap();

    roster(&home)
        .args(["init", "--path", path_str])
        .assert()
        .success();
    assert!(path.exists());

    roster(&home)
        .args(["--config", path_str, "config", "get", "collection.display_limit"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));

    // second init without --force refuses
    roster(&home)
        .args(["init", "--path", path_str])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_file_theme_is_the_starting_theme() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("dark.toml");
    std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

    roster(&home)
        .args(["--config", path.to_str().unwrap(), "theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn missing_config_file_exits_4() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["--config", "/definitely/not/here.toml", "theme", "show"])
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_exits_4() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}
