/// Console adapters for stderr feedback
mod progress_reporter;
mod verification_diff;

pub use progress_reporter::StderrProgressReporter;
pub use verification_diff::VerificationDiff;
