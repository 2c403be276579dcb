use crate::pattern::parser::{ParseError, Pattern};
use std::fmt;

/// Which half of a find/replace pair a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	Find,
	Replace,
	Both,
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Side::Find => "find",
			Side::Replace => "replace",
			Side::Both => "find and replace",
		})
	}
}

/// Why a find/replace pair was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// `source` is the find side's error when both sides failed.
	#[error("malformed {side} pattern: {source}")]
	Malformed {
		side: Side,
		#[source]
		source: ParseError,
	},

	#[error("pattern length mismatch: find has {find_len} bytes, replace has {replace_len}")]
	LengthMismatch { find_len: usize, replace_len: usize },
}

/// Check that both halves of a pair parsed and have the same length.
///
/// A rejected pair is rejected as a unit; neither side is returned. When both
/// slot counts are known and differ, the pair is a length mismatch even if one
/// side was also too short to stand on its own.
pub fn validate(
	find: Result<Pattern, ParseError>,
	replace: Result<Pattern, ParseError>,
) -> Result<(Pattern, Pattern), ValidationError> {
	if let (Some(find_len), Some(replace_len)) = (slot_count(&find), slot_count(&replace))
		&& find_len != replace_len
	{
		return Err(ValidationError::LengthMismatch {
			find_len,
			replace_len,
		});
	}

	match (find, replace) {
		(Ok(find), Ok(replace)) => Ok((find, replace)),
		(Err(source), Ok(_)) => Err(ValidationError::Malformed {
			side: Side::Find,
			source,
		}),
		(Ok(_), Err(source)) => Err(ValidationError::Malformed {
			side: Side::Replace,
			source,
		}),
		(Err(source), Err(_)) => Err(ValidationError::Malformed {
			side: Side::Both,
			source,
		}),
	}
}

/// Slot count of a parse outcome, when it got far enough to have one.
fn slot_count(parsed: &Result<Pattern, ParseError>) -> Option<usize> {
	match parsed {
		Ok(pattern) => Some(pattern.len()),
		Err(ParseError::TooShort { len }) => Some(*len),
		Err(_) => None,
	}
}
