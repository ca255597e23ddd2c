use crate::shared::error::LockStateError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file (report, expected lock state, config): 100 MB
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that `path` is a regular file that is not a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, never its target.
///
/// # Errors
/// Returns an error if metadata cannot be read, the path is a symlink,
/// or the path is not a regular file.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        return Err(LockStateError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the option at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within `max_size`.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(LockStateError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the report or check that the right file was passed".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after the symlink, file-type and size checks.
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    let size = validate_regular_file(path, file_description)?;
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        LockStateError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
