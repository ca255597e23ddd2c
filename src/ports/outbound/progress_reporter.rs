/// ProgressReporter port for user feedback during a run
///
/// Messages go to a diagnostic channel (stderr for the CLI), never to the
/// rendered output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports an error or failed check
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
