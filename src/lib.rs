//! Qatch - quick patch tool for binary files.
//!
//! This library provides the core functionality for qatch, including:
//! - Hex-with-wildcards pattern parsing and pair validation
//! - Overlapping pattern matching over a byte buffer
//! - Wildcard-preserving replacement and the patch engine that drives it
//! - Patch manifest parsing and target file handling
//!
//! The patch engine works purely in memory; reading and writing the target
//! is left to the caller.
//!
//! # Example
//!
//! ```
//! use qatch::patch::{PatternResult, run};
//!
//! let mut buffer = vec![0x10, 0x41, 0x42, 0x41, 0x42, 0x20];
//! let outcome = run(&mut buffer, [("41 42", "43 44")]);
//!
//! assert!(outcome.modified);
//! assert_eq!(buffer, [0x10, 0x43, 0x44, 0x43, 0x44, 0x20]);
//! assert_eq!(outcome.reports[0].result, PatternResult::Replaced { count: 2 });
//! ```

pub mod config;
pub mod error;
pub mod patch;
pub mod pattern;
pub mod target;

pub use error::{QatchError, Result};
