//! Read models for the query side
//!
//! View-optimized structs that formatters consume instead of domain types.

pub mod lock_state_read_model;
pub mod lock_state_read_model_builder;

pub use lock_state_read_model::{
    ComponentLineView, LockStateReadModel, ReportMetadataView, VerificationView,
};
pub use lock_state_read_model_builder::LockStateReadModelBuilder;
