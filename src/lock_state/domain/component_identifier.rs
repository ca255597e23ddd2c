use crate::shared::error::LockStateError;
use crate::shared::Result;
use std::fmt;

/// Maximum length for a component identifier (security limit)
const MAX_COMPONENT_ID_LENGTH: usize = 512;

/// Prefix Gradle uses when displaying a project component
const PROJECT_PREFIX: &str = "project ";

/// Identity of a resolved dependency as seen by the renderer.
///
/// The renderer only ever asks for the display name; ordering is supplied
/// separately (see `policies::component_ordering`).
pub trait ComponentIdentifier {
    fn display_name(&self) -> &str;
}

/// What kind of component an identifier names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// A project in the same build, e.g. `project :core`
    Project { path: String },
    /// An external module, `group:module:version`
    Module {
        group: String,
        module: String,
        version: String,
    },
    /// Anything else (file dependencies, opaque ids); displayed verbatim
    Other,
}

/// Concrete component identifier parsed from a dependents report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    kind: ComponentKind,
    display: String,
}

impl ComponentId {
    /// Parses an identifier string.
    ///
    /// `project <path>` is a project, three non-empty `:`-separated parts are a
    /// module, any other non-empty string is kept as an opaque identifier.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid(value, "identifier is empty"));
        }

        if value.len() > MAX_COMPONENT_ID_LENGTH {
            return Err(invalid(
                value,
                &format!(
                    "identifier is too long ({} bytes). Maximum allowed: {} bytes",
                    value.len(),
                    MAX_COMPONENT_ID_LENGTH
                ),
            ));
        }

        // the outer trim guarantees a non-empty path after the prefix;
        // the display keeps the input's spacing
        if let Some(path) = value.strip_prefix(PROJECT_PREFIX) {
            return Ok(Self {
                kind: ComponentKind::Project {
                    path: path.trim().to_string(),
                },
                display: value.to_string(),
            });
        }

        let parts: Vec<&str> = value.split(':').collect();
        if let [group, module, version] = parts.as_slice() {
            if !group.is_empty() && !module.is_empty() && !version.is_empty() {
                return Ok(Self::module(group, module, version));
            }
        }

        Ok(Self {
            kind: ComponentKind::Other,
            display: value.to_string(),
        })
    }

    pub fn module(group: &str, module: &str, version: &str) -> Self {
        Self {
            kind: ComponentKind::Module {
                group: group.to_string(),
                module: module.to_string(),
                version: version.to_string(),
            },
            display: format!("{}:{}:{}", group, module, version),
        }
    }

    pub fn project(path: &str) -> Self {
        Self {
            kind: ComponentKind::Project {
                path: path.to_string(),
            },
            display: format!("{}{}", PROJECT_PREFIX, path),
        }
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }
}

fn invalid(value: &str, reason: &str) -> anyhow::Error {
    LockStateError::InvalidComponentId {
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl ComponentIdentifier for ComponentId {
    fn display_name(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}
