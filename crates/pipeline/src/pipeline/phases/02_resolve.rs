use crate::pipeline::context::IngestContext;
use crate::pipeline::phase_trait::IngestPhase;
use crate::pipeline::state::PipelineState;
use crate::resolver::resolve;
use adcgraph_core::IngestError;
use tracing::debug;

/// Phase 2: applies the bindings queued during the scan.
#[derive(Debug, Default)]
pub struct ResolvePhase;

impl IngestPhase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn state(&self) -> PipelineState {
        PipelineState::Phase2Resolving
    }

    fn execute(&self, context: &mut IngestContext) -> Result<(), IngestError> {
        let pending = std::mem::take(&mut context.pending);
        debug!(bindings = pending.len(), "Resolving deferred bindings");

        let warnings = resolve(&mut context.registries, pending);
        context.diagnostics.warnings.extend(warnings);
        Ok(())
    }
}
