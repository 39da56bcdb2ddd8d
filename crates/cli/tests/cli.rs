use assert_cmd::Command;

#[test]
fn help_exits_cleanly() {
    Command::cargo_bin("sitebuilder-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn unknown_environment_is_rejected_before_connecting() {
    Command::cargo_bin("sitebuilder-cli")
        .unwrap()
        .args(["--environment", "garbage"])
        .assert()
        .failure();
}
