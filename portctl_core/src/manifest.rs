use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::Paragraph;
use crate::PortctlError;
use crate::PortctlResult;

/// A buildable port, projected from the paragraph in `<port>/CONTROL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortManifest {
	/// The `Source` field.
	pub name: String,
	pub version: String,
	pub description: Option<String>,
	pub maintainer: Option<String>,
	/// The `Build-Depends` field, split on commas.
	pub build_depends: Vec<String>,
	/// Fields with no dedicated member, kept verbatim.
	pub extra: BTreeMap<String, String>,
}

impl TryFrom<Paragraph> for PortManifest {
	type Error = PortctlError;

	fn try_from(mut paragraph: Paragraph) -> PortctlResult<Self> {
		Ok(Self {
			name: required(&mut paragraph, "Source")?,
			version: required(&mut paragraph, "Version")?,
			description: paragraph.take("Description"),
			maintainer: paragraph.take("Maintainer"),
			build_depends: paragraph
				.take("Build-Depends")
				.map(|value| parse_depends(&value))
				.unwrap_or_default(),
			extra: paragraph.into_inner(),
		})
	}
}

/// An already built package, projected from the paragraph in
/// `<packages>/<name>_<triplet>/CONTROL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedPackageManifest {
	/// The `Package` field.
	pub name: String,
	pub version: String,
	pub architecture: Option<String>,
	pub description: Option<String>,
	pub maintainer: Option<String>,
	pub depends: Vec<String>,
	pub extra: BTreeMap<String, String>,
}

impl TryFrom<Paragraph> for CachedPackageManifest {
	type Error = PortctlError;

	fn try_from(mut paragraph: Paragraph) -> PortctlResult<Self> {
		Ok(Self {
			name: required(&mut paragraph, "Package")?,
			version: required(&mut paragraph, "Version")?,
			architecture: paragraph.take("Architecture"),
			description: paragraph.take("Description"),
			maintainer: paragraph.take("Maintainer"),
			depends: paragraph
				.take("Depends")
				.map(|value| parse_depends(&value))
				.unwrap_or_default(),
			extra: paragraph.into_inner(),
		})
	}
}

fn required(paragraph: &mut Paragraph, field: &str) -> PortctlResult<String> {
	paragraph
		.take(field)
		.ok_or_else(|| PortctlError::MissingField {
			field: field.to_string(),
		})
}

/// Split a comma separated dependency list. Entries are trimmed and empty
/// entries dropped.
pub fn parse_depends(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.map(ToString::to_string)
		.collect()
}

/// A package name paired with the target triplet it was built for, written
/// `name:triplet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageSpec {
	pub name: String,
	pub triplet: String,
}

impl PackageSpec {
	/// Directory name of the cached package: `name_triplet`.
	pub fn dir_name(&self) -> String {
		format!("{}_{}", self.name, self.triplet)
	}
}

impl FromStr for PackageSpec {
	type Err = PortctlError;

	fn from_str(value: &str) -> PortctlResult<Self> {
		let Some((name, triplet)) = value.split_once(':') else {
			return Err(PortctlError::InvalidPackageSpec(value.to_string()));
		};

		if name.is_empty() || triplet.is_empty() || triplet.contains(':') {
			return Err(PortctlError::InvalidPackageSpec(value.to_string()));
		}

		Ok(Self {
			name: name.to_ascii_lowercase(),
			triplet: triplet.to_ascii_lowercase(),
		})
	}
}

impl fmt::Display for PackageSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.name, self.triplet)
	}
}
