use crate::application::read_models::LockStateReadModel;
use crate::ports::outbound::LockStateFormatter;
use crate::shared::Result;

/// TextFormatter writes one `<component> -> <constraints>` line per component.
///
/// This is the format of an expected lock-state file, so `--verify` can read
/// back whatever this formatter wrote.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LockStateFormatter for TextFormatter {
    fn format(&self, model: &LockStateReadModel) -> Result<String> {
        let mut output = String::new();
        for line in model.lines() {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}
