use assert_cmd::Command;

pub fn docsync_cmd() -> Command {
	let mut cmd = Command::cargo_bin("docsync").expect("binary `docsync` should build");
	cmd.env("NO_COLOR", "1");
	cmd
}
