use crate::lock_state::domain::RenderedLine;
use crate::lock_state::services::VerificationResult;

/// RenderResponse - Internal response DTO from the render use case
///
/// Carries the structured lines so adapters can format them as they need.
#[derive(Debug, Clone)]
pub struct RenderResponse {
    /// One line per component, in component order
    pub lines: Vec<RenderedLine>,
    /// Number of raw constraints read from the report after deduplication
    pub constraint_count: usize,
    /// Verification outcome; None when no expected file was given
    pub verification: Option<VerificationResult>,
}

impl RenderResponse {
    pub fn new(
        lines: Vec<RenderedLine>,
        constraint_count: usize,
        verification: Option<VerificationResult>,
    ) -> Self {
        Self {
            lines,
            constraint_count,
            verification,
        }
    }

    pub fn component_count(&self) -> usize {
        self.lines.len()
    }

    /// Rendered lines as plain strings
    pub fn line_strings(&self) -> Vec<String> {
        self.lines.iter().map(RenderedLine::to_string).collect()
    }

    /// True when a verification ran and found differences
    pub fn is_out_of_date(&self) -> bool {
        self.verification
            .as_ref()
            .is_some_and(|result| !result.is_up_to_date())
    }
}
