#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn portctl_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("portctl"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("PORTCTL_LOG");
	cmd
}

/// Create `<root>/<dir>/CONTROL` with the given content.
pub fn write_control(root: &Path, dir: &str, control: &str) -> std::io::Result<()> {
	let dir = root.join(dir);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("CONTROL"), control)
}
