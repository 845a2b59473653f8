//! The migration workflow: an explicit state machine sequencing
//! generation, validation, bounded regeneration, and explanation.

use crate::composer::MigrationComposer;
use crate::context::MigrationContext;
use crate::error::{MigrateResult, MigrationError};
use crate::report::ValidationReport;

/// Maximum number of regeneration attempts before the workflow gives
/// up: up to four generate/regenerate cycles in total.
pub const MAX_REGENERATIONS: u32 = 3;

/// The enumerated workflow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// Initial state, nothing requested yet.
    Start,
    /// Waiting on the combined SQL script.
    Generating,
    /// Waiting on a validation report.
    Validating,
    /// Waiting on a corrected script after a failed validation.
    Regenerating,
    /// Waiting on the audit explanation.
    Explaining,
    /// Terminal: script validated and explained.
    Passed,
    /// Terminal: validation still failing after the retry budget.
    Failed,
}

impl WorkflowPhase {
    /// Whether the workflow halts in this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }
}

/// The mutable state of one workflow run.
///
/// Owned exclusively by the run that drives it; `retry_count` never
/// decreases.
#[derive(Debug, Clone)]
pub struct WorkflowState {
    /// The reconciliation contexts seeding the run.
    pub contexts: Vec<MigrationContext>,
    /// The current combined SQL script.
    pub sql_script: String,
    /// The most recent validation report.
    pub validation_report: Option<ValidationReport>,
    /// The audit explanation, empty until `Explaining` completes.
    pub explanation: String,
    /// Regeneration attempts performed so far.
    pub retry_count: u32,
    /// Current state.
    pub phase: WorkflowPhase,
}

impl WorkflowState {
    /// Seed a fresh state from reconciliation output.
    pub fn new(contexts: Vec<MigrationContext>) -> Self {
        Self {
            contexts,
            sql_script: String::new(),
            validation_report: None,
            explanation: String::new(),
            retry_count: 0,
            phase: WorkflowPhase::Start,
        }
    }

    /// The context validation and explanation run against.
    ///
    /// Always the first context, even when several tables are in play.
    /// Non-emptiness is checked when the workflow starts.
    fn representative(&self) -> &MigrationContext {
        &self.contexts[0]
    }

    /// Record a transition.
    fn advance(&mut self, phase: WorkflowPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "workflow transition");
        self.phase = phase;
    }
}

/// The final result of a workflow run.
///
/// Carries the full final state, so the last script and validation
/// report stay retrievable for diagnosis even when the run failed.
#[derive(Debug)]
pub struct WorkflowOutcome {
    /// Final workflow state.
    pub state: WorkflowState,
}

impl WorkflowOutcome {
    /// Whether the run produced a validated, explained script.
    pub fn passed(&self) -> bool {
        self.state.phase == WorkflowPhase::Passed
    }

    /// One-line summary for logs and CLI output.
    pub fn summary(&self) -> String {
        match self.state.phase {
            WorkflowPhase::Passed => format!(
                "migration script validated after {} regeneration(s)",
                self.state.retry_count
            ),
            WorkflowPhase::Failed => format!(
                "no successful migration script produced after {} regeneration(s)",
                self.state.retry_count
            ),
            _ => "workflow did not reach a terminal state".to_string(),
        }
    }
}

/// Drives the generate → validate → {pass | retry | fail} → explain
/// sequence against a composer boundary.
///
/// Strictly sequential: each composer call is awaited before the next
/// transition, and every pass through a composer-calling state issues
/// exactly one request.
pub struct MigrationWorkflow<'a, C: MigrationComposer> {
    composer: &'a C,
    max_regenerations: u32,
}

impl<'a, C: MigrationComposer> MigrationWorkflow<'a, C> {
    /// Create a workflow over a composer boundary.
    pub fn new(composer: &'a C) -> Self {
        Self {
            composer,
            max_regenerations: MAX_REGENERATIONS,
        }
    }

    /// Run the workflow to a terminal state.
    ///
    /// Returns `Ok` with the outcome for both terminal states; reaching
    /// `Failed` is a normal outcome, not an error. A composer failure
    /// aborts the run and propagates as
    /// [`MigrationError::Compose`](crate::error::MigrationError).
    pub async fn run(&self, contexts: Vec<MigrationContext>) -> MigrateResult<WorkflowOutcome> {
        if contexts.is_empty() {
            return Err(MigrationError::EmptyReconciliation);
        }

        let mut state = WorkflowState::new(contexts);

        state.advance(WorkflowPhase::Generating);
        tracing::info!(tables = state.contexts.len(), "generating migration script");
        state.sql_script = self.composer.generate(&state.contexts).await?;

        loop {
            state.advance(WorkflowPhase::Validating);
            let report = self
                .composer
                .validate(&state.sql_script, state.representative())
                .await?;
            tracing::info!(
                summary = %report.summary(),
                attempt = state.retry_count + 1,
                "validated migration script"
            );

            if !report.has_errors {
                state.validation_report = Some(report);
                break;
            }

            if state.retry_count >= self.max_regenerations {
                state.validation_report = Some(report);
                state.advance(WorkflowPhase::Failed);
                return Ok(WorkflowOutcome { state });
            }

            state.advance(WorkflowPhase::Regenerating);
            state.retry_count += 1;
            tracing::info!(
                retry = state.retry_count,
                budget = self.max_regenerations,
                "regenerating migration script"
            );
            state.sql_script = self.composer.regenerate(&state.contexts, &report).await?;
            state.validation_report = Some(report);
        }

        state.advance(WorkflowPhase::Explaining);
        state.explanation = self
            .composer
            .explain(&state.sql_script, state.representative())
            .await?;

        state.advance(WorkflowPhase::Passed);
        Ok(WorkflowOutcome { state })
    }
}
