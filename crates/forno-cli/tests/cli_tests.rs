use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn forno_cmd() -> Command {
    let mut cmd = Command::cargo_bin("forno").expect("Failed to find forno binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    forno_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pizza order builder"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("voice"))
        .stdout(predicate::str::contains("menu"));
}

#[test]
fn test_cli_menu_lists_all_categories() {
    forno_cmd()
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("سایز نان"))
        .stdout(predicate::str::contains("سبزیجات"))
        .stdout(predicate::str::contains("340,000 تومان"))
        .stdout(predicate::str::contains("رایگان"));
}

#[test]
fn test_cli_menu_single_category() {
    forno_cmd()
        .args(["menu", "crust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("نوع خمیر"))
        .stdout(predicate::str::contains("`stuffed`"))
        .stdout(predicate::str::contains("45,000 تومان"))
        .stdout(predicate::str::contains("سایز نان").not());
}

#[test]
fn test_cli_menu_bake_options() {
    forno_cmd()
        .args(["menu", "bake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`well_done`"))
        .stdout(predicate::str::contains("برشته (Well Done)"));
}

#[test]
fn test_cli_menu_rejects_unknown_category() {
    forno_cmd().args(["menu", "dessert"]).assert().failure();
}

#[test]
fn test_cli_default_command_shows_menu() {
    forno_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("منوی پیتزاساز"));
}

#[test]
fn test_cli_build_back_exits_to_landing() {
    forno_cmd()
        .arg("build")
        .write_stdin("back\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("مرحله 1/8"))
        .stdout(predicate::str::contains("سایز نان"));
}

#[test]
fn test_cli_build_selection_updates_totals() {
    forno_cmd()
        .arg("build")
        .write_stdin("medium\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("260,000 تومان"));
}

#[test]
fn test_cli_build_next_moves_to_crust_step() {
    forno_cmd()
        .arg("build")
        .write_stdin("next\nback\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("مرحله 2/8"))
        .stdout(predicate::str::contains("✓ سایز نان"));
}

#[test]
fn test_cli_build_rejects_unknown_item() {
    forno_cmd()
        .arg("build")
        .write_stdin("calzone\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not on the menu"));
}

#[test]
fn test_cli_build_eof_exits_cleanly() {
    forno_cmd().arg("build").write_stdin("").assert().success();
}

#[test]
fn test_cli_voice_missing_file_fails() {
    forno_cmd()
        .args(["voice", "no-such-recording.wav"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read audio file"));
}
