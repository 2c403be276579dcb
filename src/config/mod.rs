//! Patch manifest loading and parsing for qatch.
//!
//! This module handles:
//! - TOML manifest parsing
//! - Resolving the manifest's target relative to the manifest file
//! - Checking manifest patterns without applying them

pub mod parser;
pub mod types;

pub use parser::{load_manifest, parse_manifest_file, parse_manifest_str};
pub use types::{LoadedManifest, Manifest, PatchEntry};
