//! Hex byte patterns for qatch.
//!
//! This module handles:
//! - Parsing hex-with-wildcard strings such as `"48 8B ?? 05"` into patterns
//! - Validating find/replace pairs before they touch a buffer

pub mod parser;
pub mod validator;

pub use parser::{ByteSlot, MIN_PATTERN_LEN, ParseError, Pattern, parse};
pub use validator::{Side, ValidationError, validate};
