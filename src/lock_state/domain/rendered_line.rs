use std::fmt;

/// Separator between the component and its constraints
pub const ARROW: &str = " -> ";

/// One rendered lock-state line: a component and the constraint tokens shown for it.
///
/// Displays as `<component> -> <token>` for a single token and
/// `<component> -> {a, b}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    component: String,
    constraints: Vec<String>,
}

impl RenderedLine {
    pub fn new(component: String, constraints: Vec<String>) -> Self {
        Self {
            component,
            constraints,
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    /// The part after the arrow
    pub fn rendered_constraints(&self) -> String {
        match self.constraints.as_slice() {
            [single] => single.clone(),
            many => format!("{{{}}}", many.join(", ")),
        }
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.component, ARROW, self.rendered_constraints())
    }
}
