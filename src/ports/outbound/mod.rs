/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod dependents_reader;
pub mod formatter;
pub mod lock_state_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependents_reader::DependentsReader;
pub use formatter::LockStateFormatter;
pub use lock_state_reader::LockStateReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
