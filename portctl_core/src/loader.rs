use std::path::Path;

use crate::Document;
use crate::Paragraph;
use crate::PortctlError;
use crate::PortctlResult;
use crate::config::DEFAULT_MAX_FILE_SIZE;
use crate::document::read_document;

/// Reads the text of a file.
pub trait TextSource: Sync {
	fn read_text(&self, path: &Path) -> PortctlResult<String>;
}

/// A [`TextSource`] backed by the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FileSystem {
	max_file_size: u64,
}

impl Default for FileSystem {
	fn default() -> Self {
		Self {
			max_file_size: DEFAULT_MAX_FILE_SIZE,
		}
	}
}

impl FileSystem {
	pub fn new(max_file_size: u64) -> Self {
		Self { max_file_size }
	}
}

impl TextSource for FileSystem {
	fn read_text(&self, path: &Path) -> PortctlResult<String> {
		let size = std::fs::metadata(path)?.len();
		if size > self.max_file_size {
			return Err(PortctlError::FileTooLarge {
				path: path.display().to_string(),
				size,
				limit: self.max_file_size,
			});
		}

		Ok(std::fs::read_to_string(path)?)
	}
}

/// Parse every paragraph in `text`.
pub fn parse_paragraphs(text: &str) -> PortctlResult<Document> {
	read_document(text)
}

/// Parse `text`, which must hold exactly one paragraph.
pub fn parse_single_paragraph(text: &str) -> PortctlResult<Paragraph> {
	let mut paragraphs = read_document(text)?;
	if paragraphs.len() != 1 {
		return Err(PortctlError::ExpectedOnlyOneParagraph {
			found: paragraphs.len(),
		});
	}

	Ok(paragraphs.remove(0))
}

/// Read `path` through `source` and parse every paragraph in it. Read errors
/// are returned unchanged.
pub fn get_paragraphs(source: &dyn TextSource, path: &Path) -> PortctlResult<Document> {
	let text = source.read_text(path)?;
	parse_paragraphs(&text)
}

/// Read `path` through `source` and parse its single paragraph.
pub fn get_single_paragraph(source: &dyn TextSource, path: &Path) -> PortctlResult<Paragraph> {
	let text = source.read_text(path)?;
	parse_single_paragraph(&text)
}
