use crate::Paragraph;
use crate::PortctlResult;
use crate::cursor::Cursor;
use crate::paragraph::read_paragraph;

/// The paragraphs of one source text, in the order they appear.
pub type Document = Vec<Paragraph>;

/// Split `source` into paragraphs.
///
/// Blank lines and stray whitespace between paragraphs are skipped. The first
/// malformed or duplicate field aborts the whole parse.
pub(crate) fn read_document(source: &str) -> PortctlResult<Document> {
	let mut cursor = Cursor::new(source);
	let mut paragraphs = Vec::new();

	loop {
		while matches!(cursor.peek(), Some(b'\n' | b'\r' | b' ' | b'\t')) {
			cursor.advance();
		}

		if cursor.peek().is_none() {
			break;
		}

		paragraphs.push(read_paragraph(&mut cursor)?);
	}

	tracing::trace!(paragraphs = paragraphs.len(), "parsed document");

	Ok(paragraphs)
}
