/// Mock implementations for testing
mod mock_dependents_reader;
mod mock_lock_state_reader;
mod mock_progress_reporter;

pub use mock_dependents_reader::MockDependentsReader;
pub use mock_lock_state_reader::MockLockStateReader;
pub use mock_progress_reporter::MockProgressReporter;
