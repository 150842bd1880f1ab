mod common;

use portctl_core::AnyEmptyResult;
use serde_json::Value;

fn write_ports(root: &std::path::Path) -> std::io::Result<()> {
	let ports = root.join("ports");
	common::write_control(&ports, "zlib", "Source: zlib\nVersion: 1.2.11\n")?;
	common::write_control(
		&ports,
		"curl",
		"Source: curl\nVersion: 7.55.1\nBuild-Depends: zlib, openssl\n",
	)?;
	common::write_control(&ports, "zlib-old", "Source: zlib\nVersion: 1.2.8\n")?;
	common::write_control(&ports, "broken", "Source curl\n")?;
	std::fs::create_dir_all(ports.join("empty"))
}

#[test]
fn ports_lists_valid_ports() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_ports(tmp.path())?;

	common::portctl_cmd()
		.arg("ports")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("curl 7.55.1\nzlib 1.2.11\n\n2 port(s)\n");

	Ok(())
}

#[test]
fn ports_json_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_ports(tmp.path())?;

	let output = common::portctl_cmd()
		.arg("ports")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["zlib"], "1.2.11");
	assert_eq!(json["curl"], "7.55.1");
	assert_eq!(json.as_object().map(serde_json::Map::len), Some(2));

	Ok(())
}

#[test]
fn ports_verbose_logs_skipped_directories() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_ports(tmp.path())?;

	common::portctl_cmd()
		.arg("ports")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("skipping port"));

	Ok(())
}

#[test]
fn ports_respects_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("portctl.toml"),
		"ports_dir = \"recipes\"\n\n[exclude]\npatterns = [\"legacy-*\"]\n",
	)?;
	let recipes = tmp.path().join("recipes");
	common::write_control(&recipes, "legacy-zlib", "Source: zlib\nVersion: 0.1\n")?;
	common::write_control(&recipes, "zlib", "Source: zlib\nVersion: 1.2.11\n")?;

	common::portctl_cmd()
		.arg("ports")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("zlib 1.2.11\n\n1 port(s)\n");

	Ok(())
}

#[test]
fn ports_without_ports_dir_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::portctl_cmd()
		.arg("ports")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2);

	Ok(())
}

#[test]
fn show_prints_port() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_ports(tmp.path())?;

	common::portctl_cmd()
		.arg("show")
		.arg("curl")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("curl\n"))
		.stdout(predicates::str::contains("Version        7.55.1"))
		.stdout(predicates::str::contains("Build-Depends  zlib, openssl"));

	Ok(())
}

#[test]
fn show_missing_field_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_control(&tmp.path().join("ports"), "nover", "Source: nover\n")?;

	common::portctl_cmd()
		.arg("show")
		.arg("nover")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("missing required field `Version`"));

	Ok(())
}

#[test]
fn package_prints_cached_manifest() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_control(
		&tmp.path().join("packages"),
		"zlib_x64-linux",
		"Package: zlib\nVersion: 1.2.11\nArchitecture: x64-linux\n",
	)?;

	let output = common::portctl_cmd()
		.arg("package")
		.arg("zlib:x64-linux")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;

	assert!(output.status.success());
	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["name"], "zlib");
	assert_eq!(json["architecture"], "x64-linux");

	Ok(())
}

#[test]
fn package_rejects_invalid_spec() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::portctl_cmd()
		.arg("package")
		.arg("zlib")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid package spec"));

	Ok(())
}
