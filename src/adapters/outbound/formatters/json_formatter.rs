use crate::application::read_models::LockStateReadModel;
use crate::ports::outbound::LockStateFormatter;
use crate::shared::Result;

/// JsonFormatter serializes the whole read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStateFormatter for JsonFormatter {
    fn format(&self, model: &LockStateReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(model)?;
        output.push('\n');
        Ok(output)
    }
}
