use assert_cmd::Command;

pub fn jsembed_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jsembed").unwrap();
    cmd.env_remove("JSEMBED_CONTENT");
    cmd.env_remove("JSEMBED_OUTPUT");
    cmd.env_remove("JSEMBED_SITE_URL");
    cmd
}
