/// Lock-state domain: identifiers, constraints, ordering policy and the
/// pure services that render and verify constraint lines.
pub mod domain;
pub mod policies;
pub mod services;
