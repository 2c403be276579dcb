use std::path::PathBuf;

/// Library-level structured errors for qatch.
///
/// These cover the file and manifest plumbing around the patch engine. Pattern
/// problems are not errors at this level; the engine reports them per pair.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum QatchError {
	#[error("File not found - {path}")]
	TargetNotFound { path: PathBuf },

	#[error("Failed to read target file: {path}")]
	TargetReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write target file: {path}")]
	TargetWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create backup {backup} of {path}")]
	BackupFailed {
		path: PathBuf,
		backup: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read manifest file: {path}")]
	ManifestReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse manifest file: {path}")]
	ManifestParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using QatchError.
pub type Result<T> = std::result::Result<T, QatchError>;
