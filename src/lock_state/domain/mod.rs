pub mod component_identifier;
pub mod dependents;
pub mod rendered_line;
pub mod version_constraint;

pub use component_identifier::{ComponentId, ComponentIdentifier, ComponentKind};
pub use dependents::{ConstraintSet, Dependents};
pub use rendered_line::RenderedLine;
pub use version_constraint::{DeclaredConstraint, VersionConstraint};
