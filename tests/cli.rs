use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "pol-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Start subcommand should expose the feed flags.
fn start_help_lists_feed_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--headless"))
        .stdout(contains("--seed"))
        .stdout(contains("--disconnected"))
        .stdout(contains("--initial-net-flow"));
}

#[test]
/// An unknown subcommand should fail with an error.
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("stop");
    cmd.assert().failure();
}
