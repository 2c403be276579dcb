use std::fmt;
use std::str::FromStr;

/// Patterns shorter than this many bytes are rejected.
pub const MIN_PATTERN_LEN: usize = 2;

/// Why a pattern string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("odd number of hex digits ({len})")]
	OddLength { len: usize },

	#[error("invalid hex pair: {0}")]
	InvalidHexPair(String),

	#[error("pattern too short: {len} bytes (minimum {})", MIN_PATTERN_LEN)]
	TooShort { len: usize },
}

/// One byte position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteSlot {
	/// Matches anything; never written.
	Wildcard,
	Byte(u8),
}

impl ByteSlot {
	pub fn is_wildcard(&self) -> bool {
		matches!(self, ByteSlot::Wildcard)
	}

	/// The concrete byte, or `None` for a wildcard.
	pub fn value(&self) -> Option<u8> {
		match self {
			ByteSlot::Wildcard => None,
			ByteSlot::Byte(b) => Some(*b),
		}
	}

	/// Check if this slot accepts the given byte.
	pub fn matches(&self, byte: u8) -> bool {
		match self {
			ByteSlot::Wildcard => true,
			ByteSlot::Byte(b) => *b == byte,
		}
	}
}

impl From<u8> for ByteSlot {
	fn from(byte: u8) -> Self {
		ByteSlot::Byte(byte)
	}
}

impl fmt::Display for ByteSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ByteSlot::Wildcard => f.write_str("??"),
			ByteSlot::Byte(b) => write!(f, "{b:02X}"),
		}
	}
}

/// A parsed byte pattern: a fixed-length run of concrete bytes and wildcards.
///
/// Patterns only come out of [`parse`], so every pattern holds at least
/// [`MIN_PATTERN_LEN`] slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
	slots: Vec<ByteSlot>,
}

impl Pattern {
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn slots(&self) -> &[ByteSlot] {
		&self.slots
	}

	/// Check if the pattern matches the start of `window`.
	///
	/// Returns false when `window` is shorter than the pattern.
	pub fn matches_at(&self, window: &[u8]) -> bool {
		window.len() >= self.slots.len()
			&& self
				.slots
				.iter()
				.zip(window)
				.all(|(slot, &byte)| slot.matches(byte))
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, slot) in self.slots.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{slot}")?;
		}
		Ok(())
	}
}

impl FromStr for Pattern {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}

/// Parse a hex-with-wildcards pattern string.
///
/// Every character other than `0-9`, `A-F`, `a-f` and `?` is dropped first, so
/// `"41 42"`, `"41:42"` and `"4142"` are the same pattern. The remaining text is
/// read two characters at a time; `??` is a wildcard byte.
pub fn parse(raw: &str) -> Result<Pattern, ParseError> {
	let cleaned: String = raw
		.chars()
		.filter(|c| c.is_ascii_hexdigit() || *c == '?')
		.collect();

	if cleaned.len() % 2 != 0 {
		return Err(ParseError::OddLength { len: cleaned.len() });
	}

	// Only ASCII survives cleaning, so byte offsets are char boundaries.
	let slots = (0..cleaned.len())
		.step_by(2)
		.map(|i| parse_pair(&cleaned[i..i + 2]))
		.collect::<Result<Vec<_>, _>>()?;

	if slots.len() < MIN_PATTERN_LEN {
		return Err(ParseError::TooShort { len: slots.len() });
	}

	Ok(Pattern { slots })
}

fn parse_pair(pair: &str) -> Result<ByteSlot, ParseError> {
	if pair == "??" {
		return Ok(ByteSlot::Wildcard);
	}
	if pair.contains('?') {
		return Err(ParseError::InvalidHexPair(pair.to_string()));
	}
	u8::from_str_radix(pair, 16)
		.map(ByteSlot::Byte)
		.map_err(|_| ParseError::InvalidHexPair(pair.to_string()))
}
