use assert_cmd::Command;

pub fn roam2org_cmd() -> Command {
    let mut cmd = Command::cargo_bin("roam2org").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
