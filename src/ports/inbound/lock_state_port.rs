use crate::application::dto::{RenderRequest, RenderResponse};
use crate::shared::Result;

/// LockStatePort - Inbound port for rendering (and optionally verifying) a lock state
///
/// This port is the application's public API for driving adapters such as the CLI.
pub trait LockStatePort {
    /// Renders the constraints of the report named in `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report cannot be read or parsed
    /// - The expected lock-state file cannot be read
    fn render_lock_state(&self, request: RenderRequest) -> Result<RenderResponse>;
}
