use crate::shared::Result;
use std::path::Path;

/// LockStateReader port for reading a previously rendered lock state
///
/// Used when verifying: the content is compared line by line with the
/// freshly rendered constraints.
pub trait LockStateReader {
    /// Reads the expected lock-state file at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be read
    fn read_lock_state(&self, path: &Path) -> Result<String>;
}
