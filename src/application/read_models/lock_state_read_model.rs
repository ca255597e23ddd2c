//! Lock-state read model consumed by the formatters

use serde::Serialize;

/// Query-side view of a rendered lock state
#[derive(Debug, Clone, Serialize)]
pub struct LockStateReadModel {
    pub metadata: ReportMetadataView,
    pub components: Vec<ComponentLineView>,
    /// Present only when a verification ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationView>,
}

/// Who produced the output and when
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 UTC timestamp
    pub generated_at: String,
}

/// One component with its displayed constraints
#[derive(Debug, Clone, Serialize)]
pub struct ComponentLineView {
    pub component: String,
    pub constraints: Vec<String>,
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationView {
    pub up_to_date: bool,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    pub out_of_order: bool,
}

impl LockStateReadModel {
    /// Rendered lines in component order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.line.as_str())
    }
}
