pub mod constraint_normalizer;
pub mod lock_state_renderer;
pub mod lock_state_verifier;
pub mod report_parser;

pub use constraint_normalizer::ConstraintNormalizer;
pub use lock_state_renderer::{pretty_print_constraints, DuplicateDisplay, LockStateRenderer};
pub use lock_state_verifier::{LockStateVerifier, VerificationResult};
pub use report_parser::{ReportEntries, ReportParser};
