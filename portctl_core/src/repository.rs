use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::CachedPackageManifest;
use crate::InstallPaths;
use crate::PackageSpec;
use crate::PortManifest;
use crate::PortctlError;
use crate::PortctlResult;
use crate::TextSource;
use crate::config::CONTROL_FILE_NAME;
use crate::get_single_paragraph;

/// Load the port described by `<dir>/CONTROL`.
pub fn try_load_port(source: &dyn TextSource, dir: &Path) -> PortctlResult<PortManifest> {
	let paragraph = get_single_paragraph(source, &dir.join(CONTROL_FILE_NAME))?;
	PortManifest::try_from(paragraph)
}

/// Load the manifest of a package already built into the package cache.
pub fn try_load_cached_package(
	source: &dyn TextSource,
	paths: &InstallPaths,
	spec: &PackageSpec,
) -> PortctlResult<CachedPackageManifest> {
	let path = paths.package_dir(spec).join(CONTROL_FILE_NAME);
	let paragraph = get_single_paragraph(source, &path)?;
	CachedPackageManifest::try_from(paragraph)
}

/// Load every port under `ports_dir`, in path order.
///
/// Subdirectories whose CONTROL file is missing, unreadable, malformed or
/// incomplete are left out without an error. Only failing to list
/// `ports_dir` itself, or an invalid exclude pattern, is reported.
pub fn load_all_ports(
	source: &dyn TextSource,
	ports_dir: &Path,
	exclude_patterns: &[String],
) -> PortctlResult<Vec<PortManifest>> {
	let exclude = build_exclude_matcher(ports_dir, exclude_patterns)?;
	let mut dirs = Vec::new();

	for entry in std::fs::read_dir(ports_dir)? {
		let path = entry?.path();
		if !path.is_dir() || exclude.matched(&path, true).is_ignore() {
			continue;
		}

		dirs.push(path);
	}

	// Sort for deterministic ordering.
	dirs.sort();

	Ok(dirs
		.iter()
		.filter_map(|dir| load_port_or_skip(source, dir))
		.collect())
}

fn load_port_or_skip(source: &dyn TextSource, dir: &Path) -> Option<PortManifest> {
	match try_load_port(source, dir) {
		Ok(port) => Some(port),
		Err(error) => {
			tracing::debug!(path = %dir.display(), %error, "skipping port");
			None
		}
	}
}

/// Build a `Gitignore` matcher from the `[exclude]` patterns of
/// `portctl.toml`, rooted at the ports directory.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> PortctlResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			PortctlError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}"))
		})?;
	}
	builder
		.build()
		.map_err(|e| PortctlError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

/// Map each port name to its version. When a name repeats, the first port in
/// `ports` wins and later ones are ignored.
pub fn extract_port_names_and_versions(ports: &[PortManifest]) -> BTreeMap<String, String> {
	let mut names_and_versions = BTreeMap::new();

	for port in ports {
		if let Entry::Vacant(entry) = names_and_versions.entry(port.name.clone()) {
			entry.insert(port.version.clone());
		}
	}

	names_and_versions
}
