/// A forward-only position in the source text with a single byte of
/// lookahead.
///
/// Every byte the scanner branches on is ASCII, so the offsets the cursor
/// stops at always fall on `char` boundaries and slices taken between them
/// are valid `str`s.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
	source: &'a str,
	offset: usize,
}

impl<'a> Cursor<'a> {
	pub(crate) fn new(source: &'a str) -> Self {
		Self { source, offset: 0 }
	}

	/// The current byte, or `None` once the end of input is reached.
	pub(crate) fn peek(&self) -> Option<u8> {
		self.source.as_bytes().get(self.offset).copied()
	}

	/// Move forward one byte and return the new current byte. A no-op at the
	/// end of input.
	pub(crate) fn advance(&mut self) -> Option<u8> {
		if self.offset < self.source.len() {
			self.offset += 1;
		}

		self.peek()
	}

	/// Skip spaces and tabs only.
	pub(crate) fn skip_horizontal_whitespace(&mut self) -> Option<u8> {
		while matches!(self.peek(), Some(b' ' | b'\t')) {
			self.advance();
		}

		self.peek()
	}

	pub(crate) fn offset(&self) -> usize {
		self.offset
	}

	/// The text between `start` and the current offset.
	pub(crate) fn slice_from(&self, start: usize) -> &'a str {
		&self.source[start..self.offset]
	}

	pub(crate) fn location_of(&self, offset: usize) -> Location {
		Location::of(self.source, offset)
	}
}

pub(crate) fn is_alphanumeric(ch: Option<u8>) -> bool {
	ch.is_some_and(|ch| ch.is_ascii_alphanumeric())
}

pub(crate) fn is_line_end(ch: Option<u8>) -> bool {
	matches!(ch, None | Some(b'\r' | b'\n'))
}

/// 1-indexed line and column of a byte offset. Only built when reporting an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
	pub(crate) line: usize,
	pub(crate) column: usize,
}

impl Location {
	fn of(source: &str, offset: usize) -> Self {
		let prefix = &source.as_bytes()[..offset.min(source.len())];
		let line_start = prefix
			.iter()
			.rposition(|&byte| byte == b'\n' || byte == b'\r')
			.map_or(0, |index| index + 1);
		let line = 1 + prefix
			.iter()
			.enumerate()
			.filter(|&(index, &byte)| {
				byte == b'\n' || (byte == b'\r' && prefix.get(index + 1) != Some(&b'\n'))
			})
			.count();

		Self {
			line,
			column: offset - line_start + 1,
		}
	}
}
