/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are raised as `LockStateError` and converted at the `?` boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
