use super::ConstraintNormalizer;
use crate::lock_state::domain::{
    ComponentIdentifier, ConstraintSet, Dependents, RenderedLine, VersionConstraint,
};

/// How constraints that normalize to the same token are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateDisplay {
    /// Deduplicate on raw constraint values only: `{"[1.0]", "1.0"}` shows as `{1.0, 1.0}`
    #[default]
    Verbatim,
    /// Also deduplicate normalized tokens: `{"[1.0]", "1.0"}` shows as `1.0`
    Collapsed,
}

/// LockStateRenderer turns a `Dependents` mapping into one line per component.
///
/// Components are emitted in mapping order. Within a component, constraints
/// keep the set's first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockStateRenderer {
    duplicate_display: DuplicateDisplay,
}

impl LockStateRenderer {
    pub fn new(duplicate_display: DuplicateDisplay) -> Self {
        Self { duplicate_display }
    }

    pub fn duplicate_display(&self) -> DuplicateDisplay {
        self.duplicate_display
    }

    /// Renders every entry, keeping the structured form
    pub fn render<C, V>(&self, dependents: &Dependents<C, V>) -> Vec<RenderedLine>
    where
        C: ComponentIdentifier,
        V: VersionConstraint,
    {
        dependents
            .iter()
            .map(|(component, constraints)| {
                RenderedLine::new(
                    component.display_name().to_string(),
                    self.normalized_tokens(constraints),
                )
            })
            .collect()
    }

    /// Renders every entry as `<component> -> <constraint-or-set>`
    pub fn pretty_print_constraints<C, V>(&self, dependents: &Dependents<C, V>) -> Vec<String>
    where
        C: ComponentIdentifier,
        V: VersionConstraint,
    {
        self.render(dependents)
            .iter()
            .map(RenderedLine::to_string)
            .collect()
    }

    fn normalized_tokens<V: VersionConstraint>(&self, constraints: &ConstraintSet<V>) -> Vec<String> {
        let normalized = constraints
            .iter()
            .map(|constraint| ConstraintNormalizer::normalize(constraint.string_value()));

        match self.duplicate_display {
            DuplicateDisplay::Verbatim => normalized.map(str::to_string).collect(),
            DuplicateDisplay::Collapsed => {
                let mut tokens: Vec<String> = Vec::with_capacity(constraints.len());
                for token in normalized {
                    if !tokens.iter().any(|seen| seen == token) {
                        tokens.push(token.to_string());
                    }
                }
                tokens
            }
        }
    }
}

/// Renders with the default verbatim duplicate display
pub fn pretty_print_constraints<C, V>(dependents: &Dependents<C, V>) -> Vec<String>
where
    C: ComponentIdentifier,
    V: VersionConstraint,
{
    LockStateRenderer::default().pretty_print_constraints(dependents)
}
