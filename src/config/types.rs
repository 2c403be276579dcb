use crate::pattern::{ValidationError, parse, validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level contents of a patch manifest (`*.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Manifest {
	/// File to patch. Relative paths are resolved against the manifest's directory.
	/// `--target` on the command line takes precedence.
	#[serde(default)]
	pub target: Option<PathBuf>,

	/// If true, copy the target to `<target>.BAK` before patching.
	#[serde(default)]
	pub backup: bool,

	/// Find/replace pairs, applied in order.
	#[serde(default)]
	pub patches: Vec<PatchEntry>,
}

/// A single find/replace pair from a manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchEntry {
	/// Hex pattern to search for, e.g. `"48 8B ?? 05"`.
	pub find: String,

	/// Hex pattern to write over each match. Must be as long as `find`.
	pub replace: String,

	/// Free-form label, shown by `qatch manifest show`.
	#[serde(default)]
	pub description: Option<String>,
}

/// A loaded manifest with its source path for resolving and display.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
	/// The parsed manifest.
	pub manifest: Manifest,

	/// The path this manifest was loaded from.
	pub path: PathBuf,
}

impl PatchEntry {
	/// Parse and validate this entry without applying it.
	pub fn check(&self) -> Result<(), ValidationError> {
		validate(parse(&self.find), parse(&self.replace)).map(|_| ())
	}
}

impl Manifest {
	/// The patches as raw (find, replace) pairs, in manifest order.
	pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.patches
			.iter()
			.map(|entry| (entry.find.as_str(), entry.replace.as_str()))
	}

	/// Every entry that would be rejected by the patch engine, with its index.
	pub fn invalid_patches(&self) -> Vec<(usize, &PatchEntry, ValidationError)> {
		self.patches
			.iter()
			.enumerate()
			.filter_map(|(i, entry)| entry.check().err().map(|err| (i, entry, err)))
			.collect()
	}
}

impl LoadedManifest {
	/// The manifest's target, resolved against the manifest's directory.
	pub fn target_path(&self) -> Option<PathBuf> {
		let target = self.manifest.target.as_ref()?;
		if target.is_absolute() {
			return Some(target.clone());
		}
		let base = self.path.parent().unwrap_or(Path::new(""));
		Some(base.join(target))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pattern::ParseError;

	fn entry(find: &str, replace: &str) -> PatchEntry {
		PatchEntry {
			find: find.to_string(),
			replace: replace.to_string(),
			description: None,
		}
	}

	#[test]
	fn test_pairs_keep_order() {
		let manifest = Manifest {
			patches: vec![entry("4142", "4344"), entry("9090", "CCCC")],
			..Default::default()
		};
		let pairs: Vec<_> = manifest.pairs().collect();
		assert_eq!(pairs, vec![("4142", "4344"), ("9090", "CCCC")]);
	}

	#[test]
	fn test_invalid_patches() {
		let manifest = Manifest {
			patches: vec![
				entry("4142", "4344"),
				entry("4?42", "4344"),
				entry("414243", "4344"),
			],
			..Default::default()
		};
		let invalid = manifest.invalid_patches();
		assert_eq!(invalid.len(), 2);

		assert_eq!(invalid[0].0, 1);
		assert!(matches!(
			&invalid[0].2,
			ValidationError::Malformed {
				source: ParseError::InvalidHexPair(_),
				..
			}
		));

		assert_eq!(invalid[1].0, 2);
		assert_eq!(
			invalid[1].2,
			ValidationError::LengthMismatch {
				find_len: 3,
				replace_len: 2,
			}
		);
	}

	#[test]
	fn test_target_path_relative_to_manifest() {
		let loaded = LoadedManifest {
			manifest: Manifest {
				target: Some(PathBuf::from("bin/app.exe")),
				..Default::default()
			},
			path: PathBuf::from("/work/patches/app.toml"),
		};
		assert_eq!(
			loaded.target_path(),
			Some(PathBuf::from("/work/patches/bin/app.exe"))
		);
	}

	#[test]
	fn test_target_path_absolute() {
		let loaded = LoadedManifest {
			manifest: Manifest {
				target: Some(PathBuf::from("/opt/app.exe")),
				..Default::default()
			},
			path: PathBuf::from("/work/patches/app.toml"),
		};
		assert_eq!(loaded.target_path(), Some(PathBuf::from("/opt/app.exe")));
	}

	#[test]
	fn test_target_path_bare_manifest_name() {
		let loaded = LoadedManifest {
			manifest: Manifest {
				target: Some(PathBuf::from("app.exe")),
				..Default::default()
			},
			path: PathBuf::from("app.toml"),
		};
		assert_eq!(loaded.target_path(), Some(PathBuf::from("app.exe")));
	}

	#[test]
	fn test_target_path_missing() {
		let loaded = LoadedManifest {
			manifest: Manifest::default(),
			path: PathBuf::from("app.toml"),
		};
		assert_eq!(loaded.target_path(), None);
	}
}
