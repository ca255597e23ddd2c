use crate::lock_state::services::VerificationResult;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Renders a failed verification as a unified-diff style listing:
/// `- line` for expected lines that are gone, `+ line` for new ones.
pub struct VerificationDiff {
    colored: bool,
}

impl VerificationDiff {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Colors only when stderr is a terminal and `NO_COLOR` is unset
    pub fn for_stderr() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && std::io::stderr().is_terminal())
    }

    pub fn render(&self, result: &VerificationResult) -> String {
        let mut output = String::new();

        for line in &result.missing {
            let entry = format!("- {}", line);
            if self.colored {
                output.push_str(&entry.red().to_string());
            } else {
                output.push_str(&entry);
            }
            output.push('\n');
        }

        for line in &result.unexpected {
            let entry = format!("+ {}", line);
            if self.colored {
                output.push_str(&entry.green().to_string());
            } else {
                output.push_str(&entry);
            }
            output.push('\n');
        }

        output
    }

    pub fn print(&self, result: &VerificationResult) {
        let rendered = self.render(result);
        if !rendered.is_empty() {
            eprint!("{}", rendered);
        }
    }
}
