//! Pattern matching and patching for qatch.
//!
//! This module handles:
//! - Finding every (possibly overlapping) match of a pattern in a buffer
//! - Writing replacement bytes while leaving wildcard positions alone
//! - Running a list of find/replace pairs and reporting each outcome

pub mod engine;
pub mod matcher;
pub mod replacer;

pub use engine::{PatchOutcome, PatternReport, PatternResult, run};
pub use matcher::find_all;
pub use replacer::apply;
