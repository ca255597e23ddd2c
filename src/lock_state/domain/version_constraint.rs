use std::fmt;

/// A version constraint imposed on a component by one of its dependents.
///
/// Only the raw string form is visible to the renderer. It may carry
/// exact-version bracket syntax (`[1.27.1]`) or be a bare token.
pub trait VersionConstraint {
    fn string_value(&self) -> &str;
}

/// Constraint as declared in a dependents report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredConstraint(String);

impl DeclaredConstraint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VersionConstraint for DeclaredConstraint {
    fn string_value(&self) -> &str {
        &self.0
    }
}

impl VersionConstraint for String {
    fn string_value(&self) -> &str {
        self
    }
}

impl VersionConstraint for &str {
    fn string_value(&self) -> &str {
        self
    }
}

impl fmt::Display for DeclaredConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeclaredConstraint {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
