use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a stale lock state apart from
/// a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - rendered, or verified and up to date
    Success = 0,
    /// The rendered lock state differs from the expected file
    LockStateOutOfDate = 1,
    /// Invalid command-line arguments (clap parsing errors)
    ///
    /// clap exits with this status itself during argument parsing; the
    /// binary never constructs this variant.
    InvalidArguments = 2,
    /// Application error (missing report, parse failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LockStateOutOfDate => write!(f, "Lock State Out Of Date (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for lock-state rendering.
///
/// Uses thiserror to derive Display and Error traits, keeping the
/// user-facing hints next to each failure.
#[derive(Debug, Error)]
pub enum LockStateError {
    #[error("Dependents report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependents report: {path}\nDetails: {details}\n\n💡 Hint: Each [[component]] entry needs an 'id' string and an optional 'constraints' array")]
    ReportParse { path: PathBuf, details: String },

    #[error("Invalid component identifier: '{value}'\nReason: {reason}")]
    InvalidComponentId { value: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}
