use std::path::Path;
use lockstate::prelude::*;

/// Mock LockStateReader serving a fixed expected lock state
pub struct MockLockStateReader {
    pub content: Option<String>,
}

impl MockLockStateReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
        }
    }

    /// Reader that fails every read, as if the file were missing
    pub fn empty() -> Self {
        Self { content: None }
    }
}

impl LockStateReader for MockLockStateReader {
    fn read_lock_state(&self, path: &Path) -> Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock lock state not found: {}", path.display()),
        }
    }
}
