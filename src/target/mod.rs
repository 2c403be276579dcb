//! Target file handling for qatch.
//!
//! This module handles:
//! - Reading the target file into memory
//! - Backup copies before patching
//! - Writing the patched buffer back

pub mod backup;

pub use backup::{backup_path, create_backup};

use crate::error::{QatchError, Result};
use std::path::Path;

/// Read the whole target file.
pub fn read_target(path: &Path) -> Result<Vec<u8>> {
	std::fs::read(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			QatchError::TargetNotFound {
				path: path.to_path_buf(),
			}
		} else {
			QatchError::TargetReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})
}

/// Overwrite the target file with `data`.
pub fn write_target(path: &Path, data: &[u8]) -> Result<()> {
	std::fs::write(path, data).map_err(|source| QatchError::TargetWriteError {
		path: path.to_path_buf(),
		source,
	})?;
	log::debug!("Wrote {} bytes to {}", data.len(), path.display());
	Ok(())
}
