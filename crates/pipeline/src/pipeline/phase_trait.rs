use super::context::IngestContext;
use super::state::PipelineState;
use adcgraph_core::IngestError;

/// One pass over the run's context. Phases execute in a fixed order and
/// each moves the run into its own state before executing.
pub trait IngestPhase: Send + Sync {
    fn name(&self) -> &'static str;

    fn state(&self) -> PipelineState;

    fn execute(&self, context: &mut IngestContext) -> Result<(), IngestError>;
}
