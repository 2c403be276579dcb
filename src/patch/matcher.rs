use crate::pattern::Pattern;

/// Find every offset in `buffer` where `pattern` matches.
///
/// Matches may overlap: a hit at `i` does not stop `i + 1` from being checked.
/// Offsets come back in ascending order. A pattern longer than the buffer, or
/// an empty one, simply has no matches.
pub fn find_all(buffer: &[u8], pattern: &Pattern) -> Vec<usize> {
	if pattern.is_empty() || pattern.len() > buffer.len() {
		return Vec::new();
	}

	buffer
		.windows(pattern.len())
		.enumerate()
		.filter(|(_, window)| pattern.matches_at(window))
		.map(|(offset, _)| offset)
		.collect()
}
