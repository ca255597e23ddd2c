use crate::application::read_models::LockStateReadModel;
use crate::shared::Result;

/// LockStateFormatter port for formatting rendered constraints
///
/// This port abstracts the output format (plain text lines, JSON, ...).
pub trait LockStateFormatter {
    /// Formats the read model into the final output document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &LockStateReadModel) -> Result<String>;
}
