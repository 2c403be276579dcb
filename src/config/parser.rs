use crate::config::types::{LoadedManifest, Manifest};
use crate::error::{QatchError, Result};
use std::path::Path;

/// Parse a manifest file from the given path.
pub fn parse_manifest_file(path: &Path) -> Result<Manifest> {
	let content =
		std::fs::read_to_string(path).map_err(|source| QatchError::ManifestReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_manifest_str(&content, path)
}

/// Parse a manifest from a string (useful for testing).
pub fn parse_manifest_str(content: &str, path: &Path) -> Result<Manifest> {
	toml::from_str(content).map_err(|source| QatchError::ManifestParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Parse a manifest file and keep its path alongside it.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest> {
	let manifest = parse_manifest_file(path)?;
	log::debug!(
		"Loaded {} patches from {}",
		manifest.patches.len(),
		path.display()
	);
	Ok(LoadedManifest {
		manifest,
		path: path.to_path_buf(),
	})
}
