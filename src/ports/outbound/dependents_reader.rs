use crate::shared::Result;
use std::path::Path;

/// DependentsReader port for reading a dependents report
///
/// This port abstracts the file system access needed to load the TOML
/// report that lists components and the constraints imposed on them.
pub trait DependentsReader {
    /// Reads the dependents report at `report_path`
    ///
    /// # Returns
    /// The raw content of the report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist
    /// - The file cannot be read due to permissions, size limits or I/O errors
    fn read_dependents(&self, report_path: &Path) -> Result<String>;
}
