use crate::application::dto::{RenderRequest, RenderResponse};
use crate::lock_state::domain::{ComponentId, DeclaredConstraint, Dependents, RenderedLine};
use crate::lock_state::policies::ComponentOrdering;
use crate::lock_state::services::{
    LockStateRenderer, LockStateVerifier, ReportParser, VerificationResult,
};
use crate::ports::inbound::LockStatePort;
use crate::ports::outbound::{DependentsReader, LockStateReader, ProgressReporter};
use crate::shared::error::LockStateError;
use crate::shared::Result;
use std::path::Path;

/// RenderLockStateUseCase - Core use case for rendering lock-state constraints
///
/// Reads a dependents report, orders it with `ComponentOrdering`, renders one
/// line per component and optionally verifies the result against an
/// expected lock-state file.
///
/// # Type Parameters
/// * `DR` - DependentsReader implementation
/// * `LR` - LockStateReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderLockStateUseCase<DR, LR, PR> {
    dependents_reader: DR,
    lock_state_reader: LR,
    progress_reporter: PR,
}

impl<DR, LR, PR> RenderLockStateUseCase<DR, LR, PR>
where
    DR: DependentsReader,
    LR: LockStateReader,
    PR: ProgressReporter,
{
    /// Creates a new RenderLockStateUseCase with injected dependencies
    pub fn new(dependents_reader: DR, lock_state_reader: LR, progress_reporter: PR) -> Self {
        Self {
            dependents_reader,
            lock_state_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    pub fn execute(&self, request: RenderRequest) -> Result<RenderResponse> {
        // Step 1: Read, parse and order the report
        let dependents = self.load_dependents(&request.report_path)?;

        // Step 2: Render
        let renderer = LockStateRenderer::new(request.duplicate_display);
        let lines = renderer.render(&dependents);

        // Step 3: Verify if requested
        let verification = match request.verify_against.as_deref() {
            Some(expected_path) => Some(self.verify(expected_path, &lines)?),
            None => None,
        };

        Ok(RenderResponse::new(
            lines,
            dependents.total_constraint_count(),
            verification,
        ))
    }

    fn load_dependents(
        &self,
        report_path: &Path,
    ) -> Result<Dependents<ComponentId, DeclaredConstraint>> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependents report from: {}",
            report_path.display()
        ));

        let content = self.dependents_reader.read_dependents(report_path)?;
        let entries = ReportParser::parse(&content).map_err(|e| LockStateError::ReportParse {
            path: report_path.to_path_buf(),
            details: format!("{:#}", e),
        })?;

        let dependents = Dependents::sorted_by(entries, ComponentOrdering::compare);

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s) with {} constraint(s)",
            dependents.len(),
            dependents.total_constraint_count()
        ));

        Ok(dependents)
    }

    fn verify(&self, expected_path: &Path, lines: &[RenderedLine]) -> Result<VerificationResult> {
        self.progress_reporter.report(&format!(
            "🔍 Verifying against: {}",
            expected_path.display()
        ));

        let content = self.lock_state_reader.read_lock_state(expected_path)?;
        let expected = LockStateVerifier::parse_expected(&content);
        let actual: Vec<String> = lines.iter().map(RenderedLine::to_string).collect();
        let result = LockStateVerifier::verify(&expected, &actual);

        if result.is_up_to_date() {
            self.progress_reporter
                .report_completion("✅ Lock state is up to date");
        } else {
            if result.out_of_order {
                self.progress_reporter
                    .report_warning("⚠️  Lock state lines are out of order");
            }
            self.progress_reporter.report_error(&format!(
                "❌ Lock state is out of date: {} missing, {} unexpected",
                result.missing.len(),
                result.unexpected.len()
            ));
        }

        Ok(result)
    }
}

impl<DR, LR, PR> LockStatePort for RenderLockStateUseCase<DR, LR, PR>
where
    DR: DependentsReader,
    LR: LockStateReader,
    PR: ProgressReporter,
{
    fn render_lock_state(&self, request: RenderRequest) -> Result<RenderResponse> {
        self.execute(request)
    }
}
