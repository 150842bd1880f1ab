use std::collections::BTreeMap;

use derive_more::Deref;
use serde::Deserialize;
use serde::Serialize;

use crate::PortctlError;
use crate::PortctlResult;
use crate::cursor::Cursor;
use crate::cursor::is_line_end;
use crate::field::read_field_name;
use crate::field::read_field_value;

/// One record of a control file: field names mapped to their values.
///
/// Names are unique and compared case-sensitively. Values never contain `\r`
/// and have no trailing line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref)]
#[serde(transparent)]
pub struct Paragraph(BTreeMap<String, String>);

impl Paragraph {
	/// Look up a field value by its exact name.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Remove a field, returning its value.
	pub fn take(&mut self, name: &str) -> Option<String> {
		self.0.remove(name)
	}

	pub fn into_inner(self) -> BTreeMap<String, String> {
		self.0
	}
}

impl From<BTreeMap<String, String>> for Paragraph {
	fn from(fields: BTreeMap<String, String>) -> Self {
		Self(fields)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Paragraph {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

impl IntoIterator for Paragraph {
	type IntoIter = std::collections::btree_map::IntoIter<String, String>;
	type Item = (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Read fields until a blank line or the end of input closes the paragraph.
///
/// The cursor must be on the first character of a field name.
pub(crate) fn read_paragraph(cursor: &mut Cursor<'_>) -> PortctlResult<Paragraph> {
	let mut fields = BTreeMap::new();

	loop {
		let start = cursor.offset();
		let name = read_field_name(cursor)?;

		if fields.contains_key(name) {
			let location = cursor.location_of(start);
			return Err(PortctlError::DuplicateField {
				name: name.to_string(),
				line: location.line,
				column: location.column,
			});
		}

		let value = read_field_value(cursor);
		fields.insert(name.to_string(), value);

		if is_line_end(cursor.peek()) {
			return Ok(Paragraph(fields));
		}
	}
}
