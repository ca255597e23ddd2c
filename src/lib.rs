//! lockstate - pretty-print the constraints behind a dependency lock state
//!
//! Reads a dependents report (which components are constrained, and by which
//! declared version constraints), orders it, and renders one
//! `<component> -> <constraints>` line per component. Exact-version brackets
//! are stripped, so `[1.27.1]` prints as `1.27.1`. The rendered lines can be
//! verified against an expected lock-state file.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lock_state`): Component ids, constraint sets, ordering and rendering
//! - **Application Layer** (`application`): Use cases, DTOs, factories and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use lockstate::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RenderLockStateUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = RenderRequest::new(
//!     PathBuf::from("dependents.toml"),
//!     DuplicateDisplay::Verbatim,
//!     None,
//! );
//! let response = use_case.execute(request)?;
//!
//! for line in response.line_strings() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod lock_state;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, VerificationDiff};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{OutputFormat, RenderRequest, RenderResponse};
    pub use crate::application::read_models::{LockStateReadModel, LockStateReadModelBuilder};
    pub use crate::application::use_cases::RenderLockStateUseCase;
    pub use crate::lock_state::domain::{
        ComponentId, ComponentIdentifier, ComponentKind, ConstraintSet, DeclaredConstraint,
        Dependents, RenderedLine, VersionConstraint,
    };
    pub use crate::lock_state::policies::ComponentOrdering;
    pub use crate::lock_state::services::{
        pretty_print_constraints, ConstraintNormalizer, DuplicateDisplay, LockStateRenderer,
        LockStateVerifier, ReportParser, VerificationResult,
    };
    pub use crate::ports::inbound::LockStatePort;
    pub use crate::ports::outbound::{
        DependentsReader, LockStateFormatter, LockStateReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, LockStateError};
    pub use crate::shared::Result;
}
