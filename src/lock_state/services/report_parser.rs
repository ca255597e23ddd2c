use crate::lock_state::domain::{ComponentId, ConstraintSet, DeclaredConstraint};
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// Report format version this parser understands
pub const REPORT_FORMAT_VERSION: u32 = 1;

/// Entries as read from a report, in file order
pub type ReportEntries = Vec<(ComponentId, ConstraintSet<DeclaredConstraint>)>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependentsReport {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    component: Vec<ReportComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportComponent {
    id: String,
    #[serde(default)]
    constraints: Vec<String>,
}

/// ReportParser reads a dependents report:
///
/// ```toml
/// version = 1
///
/// [[component]]
/// id = "io.grpc:grpc-api:1.27.1"
/// constraints = ["[1.27.1]"]
/// ```
///
/// Component order is left as written; ordering is applied afterwards.
pub struct ReportParser;

impl ReportParser {
    pub fn parse(content: &str) -> Result<ReportEntries> {
        let report: DependentsReport =
            toml::from_str(content).context("Invalid dependents report TOML")?;

        if let Some(version) = report.version {
            if version != REPORT_FORMAT_VERSION {
                anyhow::bail!(
                    "Unsupported report version {} (expected {})",
                    version,
                    REPORT_FORMAT_VERSION
                );
            }
        }

        report
            .component
            .into_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<_> {
                let id = ComponentId::parse(&entry.id)
                    .with_context(|| format!("component[{}] has an invalid id", index))?;
                let constraints: ConstraintSet<DeclaredConstraint> = entry
                    .constraints
                    .into_iter()
                    .map(DeclaredConstraint::new)
                    .collect();
                Ok((id, constraints))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock_state::domain::{ComponentIdentifier, VersionConstraint};

    #[test]
    fn test_parse_components_in_file_order() {
        let content = r#"
version = 1

[[component]]
id = "io.grpc:grpc-netty:1.27.1"
constraints = ["[1.27.1]", "1.27.1"]

[[component]]
id = "io.grpc:grpc-api:1.27.1"
constraints = ["[1.27.1]"]
"#;
        let entries = ReportParser::parse(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.display_name(), "io.grpc:grpc-netty:1.27.1");
        let raw: Vec<_> = entries[0].1.iter().map(|c| c.string_value()).collect();
        assert_eq!(raw, vec!["[1.27.1]", "1.27.1"]);
        assert_eq!(entries[1].0.display_name(), "io.grpc:grpc-api:1.27.1");
    }

    #[test]
    fn test_constraints_default_to_empty() {
        let content = r#"
[[component]]
id = "project :core"
"#;
        let entries = ReportParser::parse(content).unwrap();
        assert!(entries[0].1.is_empty());
    }

    #[test]
    fn test_duplicate_raw_constraints_are_merged() {
        let content = r#"
[[component]]
id = "a:b:1"
constraints = ["1.0", "1.0", "[1.0]"]
"#;
        let entries = ReportParser::parse(content).unwrap();
        assert_eq!(entries[0].1.len(), 2);
    }

    #[test]
    fn test_empty_report() {
        assert!(ReportParser::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ReportParser::parse("[[component]\nid =").unwrap_err();
        assert!(err.to_string().contains("Invalid dependents report TOML"));
    }

    #[test]
    fn test_invalid_component_id() {
        let content = r#"
[[component]]
id = "a:b:1"

[[component]]
id = "  "
"#;
        let err = ReportParser::parse(content).unwrap_err();
        assert!(err.to_string().contains("component[1] has an invalid id"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let content = r#"
[[component]]
id = "a:b:1"
constraint = "1.0"
"#;
        assert!(ReportParser::parse(content).is_err());
    }

    #[test]
    fn test_unsupported_version() {
        let err = ReportParser::parse("version = 2").unwrap_err();
        assert!(err.to_string().contains("Unsupported report version 2"));
    }
}
