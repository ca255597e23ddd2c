use crate::ports::outbound::{DependentsReader, LockStateReader};
use crate::shared::error::LockStateError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading input files from the file system
///
/// Implements both the DependentsReader and LockStateReader ports. Every read
/// goes through the shared security checks (no symlinks, regular files only,
/// size limit).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsReader for FileSystemReader {
    fn read_dependents(&self, report_path: &Path) -> Result<String> {
        if !report_path.exists() {
            return Err(LockStateError::ReportNotFound {
                path: report_path.to_path_buf(),
                suggestion: format!(
                    "No dependents report at \"{}\".\n   \
                     Run from the directory containing dependents.toml, or pass the file with --report.",
                    report_path.display()
                ),
            }
            .into());
        }

        read_checked(report_path, "dependents report")
    }
}

impl LockStateReader for FileSystemReader {
    fn read_lock_state(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(LockStateError::FileRead {
                path: path.to_path_buf(),
                details: "expected lock-state file does not exist".to_string(),
            }
            .into());
        }

        read_checked(path, "lock-state file")
    }
}
