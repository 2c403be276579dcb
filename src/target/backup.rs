use crate::error::{QatchError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the full file name of a backup copy.
pub const BACKUP_SUFFIX: &str = ".BAK";

/// The backup path for a target: `game.exe` becomes `game.exe.BAK`.
pub fn backup_path(target: &Path) -> PathBuf {
	let mut name = OsString::from(target.as_os_str());
	name.push(BACKUP_SUFFIX);
	PathBuf::from(name)
}

/// Copy the target to its backup path, replacing any earlier backup.
///
/// Returns the path of the backup.
pub fn create_backup(target: &Path) -> Result<PathBuf> {
	let backup = backup_path(target);

	std::fs::copy(target, &backup).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound && !target.exists() {
			QatchError::TargetNotFound {
				path: target.to_path_buf(),
			}
		} else {
			QatchError::BackupFailed {
				path: target.to_path_buf(),
				backup: backup.clone(),
				source,
			}
		}
	})?;

	log::debug!("Copied {} to {}", target.display(), backup.display());
	Ok(backup)
}
