use std::path::Path;
use lockstate::prelude::*;

/// Mock DependentsReader for testing
pub struct MockDependentsReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockDependentsReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DependentsReader for MockDependentsReader {
    fn read_dependents(&self, _report_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock dependents report read failure");
        }
        Ok(self.content.clone())
    }
}
