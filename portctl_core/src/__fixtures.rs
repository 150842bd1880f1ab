use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use crate::Paragraph;
use crate::PortManifest;
use crate::PortctlResult;
use crate::TextSource;

/// An in-memory [`TextSource`]. Unknown paths fail with `NotFound`.
#[derive(Debug, Default)]
pub struct MemorySource {
	files: HashMap<PathBuf, String>,
}

impl MemorySource {
	pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
		self.files.insert(path.into(), content.to_string());
		self
	}
}

impl TextSource for MemorySource {
	fn read_text(&self, path: &Path) -> PortctlResult<String> {
		self.files.get(path).cloned().ok_or_else(|| {
			std::io::Error::new(
				std::io::ErrorKind::NotFound,
				format!("{} not found", path.display()),
			)
			.into()
		})
	}
}

pub fn paragraph(fields: &[(&str, &str)]) -> Paragraph {
	fields.iter().copied().collect()
}

pub fn port(name: &str, version: &str) -> PortManifest {
	PortManifest {
		name: name.to_string(),
		version: version.to_string(),
		description: None,
		maintainer: None,
		build_depends: vec![],
		extra: BTreeMap::new(),
	}
}

pub fn zlib_control() -> &'static str {
	"Source: zlib\nVersion: 1.2.11\nDescription: A compression library\nMaintainer: \
	 someone@example.com\nBuild-Depends: \n"
}

pub fn curl_control() -> &'static str {
	"Source: curl\r\nVersion: 7.55.1\r\nBuild-Depends: zlib, openssl\r\nSupports: !uwp\r\n"
}

/// Create `<root>/<name>/CONTROL` with the given content.
pub fn write_port(root: &Path, name: &str, control: &str) {
	let dir = root.join(name);
	std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create {}: {e}", dir.display()));
	std::fs::write(dir.join("CONTROL"), control)
		.unwrap_or_else(|e| panic!("write {}: {e}", dir.display()));
}
