use crate::lock_state::services::DuplicateDisplay;
use std::path::PathBuf;

/// RenderRequest - Internal request DTO for the render use case
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Path to the dependents report
    pub report_path: PathBuf,
    /// How constraints that normalize to the same token are shown
    pub duplicate_display: DuplicateDisplay,
    /// Expected lock-state file to verify against, if any
    pub verify_against: Option<PathBuf>,
}

impl RenderRequest {
    pub fn new(
        report_path: PathBuf,
        duplicate_display: DuplicateDisplay,
        verify_against: Option<PathBuf>,
    ) -> Self {
        Self {
            report_path,
            duplicate_display,
            verify_against,
        }
    }
}
