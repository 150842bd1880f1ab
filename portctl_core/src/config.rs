use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::PackageSpec;
use crate::PortctlError;
use crate::PortctlResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"portctl.toml",
	".portctl.toml",
	".config/portctl.toml",
];

/// Name of the manifest file inside every port and package directory.
pub const CONTROL_FILE_NAME: &str = "CONTROL";

/// Configuration loaded from a `portctl.toml` file.
///
/// ```toml
/// ports_dir = "ports"
/// packages_dir = "packages"
/// max_file_size = 1048576
///
/// [exclude]
/// patterns = ["scratch-*", "!scratch-keep"]
/// ```
#[derive(Debug, Deserialize)]
pub struct PortctlConfig {
	/// Directory holding one subdirectory per port, relative to the root.
	#[serde(default = "default_ports_dir")]
	pub ports_dir: PathBuf,
	/// Directory holding built packages, relative to the root.
	#[serde(default = "default_packages_dir")]
	pub packages_dir: PathBuf,
	/// Largest CONTROL file that will be read, in bytes. Defaults to 10 MB.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
	/// Port directories to leave out when loading all ports.
	#[serde(default)]
	pub exclude: ExcludeConfig,
}

impl Default for PortctlConfig {
	fn default() -> Self {
		Self {
			ports_dir: default_ports_dir(),
			packages_dir: default_packages_dir(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
			exclude: ExcludeConfig::default(),
		}
	}
}

/// Gitignore-style patterns matched against port directory paths. Supports
/// negation (`!pattern`) and the usual wildcards.
#[derive(Debug, Default, Deserialize)]
pub struct ExcludeConfig {
	#[serde(default)]
	pub patterns: Vec<String>,
}

fn default_ports_dir() -> PathBuf {
	PathBuf::from("ports")
}

fn default_packages_dir() -> PathBuf {
	PathBuf::from("packages")
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

impl PortctlConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> PortctlResult<Option<PortctlConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: PortctlConfig =
			toml::from_str(&content).map_err(|e| PortctlError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}
}

/// Absolute locations of the ports tree and the built package cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
	pub root: PathBuf,
	pub ports: PathBuf,
	pub packages: PathBuf,
}

impl InstallPaths {
	pub fn new(root: &Path, config: &PortctlConfig) -> Self {
		Self {
			root: root.to_path_buf(),
			ports: root.join(&config.ports_dir),
			packages: root.join(&config.packages_dir),
		}
	}

	/// Directory of a single port.
	pub fn port_dir(&self, name: &str) -> PathBuf {
		self.ports.join(name)
	}

	/// Directory a built package is cached in: `<packages>/<name>_<triplet>`.
	pub fn package_dir(&self, spec: &PackageSpec) -> PathBuf {
		self.packages.join(spec.dir_name())
	}
}
