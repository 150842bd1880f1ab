use crate::PortctlError;
use crate::PortctlResult;
use crate::cursor::Cursor;
use crate::cursor::is_alphanumeric;
use crate::cursor::is_line_end;

/// Read a field name and the `:` that terminates it.
///
/// On return the cursor sits on the first character of the value, any spaces
/// or tabs after the colon having been skipped.
pub(crate) fn read_field_name<'a>(cursor: &mut Cursor<'a>) -> PortctlResult<&'a str> {
	let start = cursor.offset();
	while is_alphanumeric(cursor.peek()) || cursor.peek() == Some(b'-') {
		cursor.advance();
	}

	let name = cursor.slice_from(start);
	if cursor.peek() != Some(b':') || name.is_empty() {
		let location = cursor.location_of(start);
		return Err(PortctlError::MalformedFieldName {
			name: name.to_string(),
			line: location.line,
			column: location.column,
		});
	}

	cursor.advance();
	cursor.skip_horizontal_whitespace();

	Ok(name)
}

/// Read a field value, following continuation lines.
///
/// Stops with the cursor on the first character of the next field name, or on
/// the terminator (or end of input) of the blank line that closes the
/// paragraph. Continuation lines are joined with a single `\n` and keep their
/// own leading whitespace.
pub(crate) fn read_field_value(cursor: &mut Cursor<'_>) -> String {
	let mut value = String::new();
	let mut line_start = cursor.offset();

	loop {
		while !is_line_end(cursor.peek()) {
			cursor.advance();
		}

		value.push_str(cursor.slice_from(line_start));

		if cursor.peek() == Some(b'\r') {
			cursor.advance();
		}
		if cursor.peek() == Some(b'\n') {
			cursor.advance();
		}

		if is_alphanumeric(cursor.peek()) {
			return value;
		}

		line_start = cursor.offset();
		if is_line_end(cursor.skip_horizontal_whitespace()) {
			return value;
		}

		value.push('\n');
	}
}
