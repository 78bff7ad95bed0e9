pub mod context;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;
pub mod state;

pub use context::{IngestContext, SourceLine};
pub use orchestrator::{ingest, GraphBuilder};
pub use phase_trait::IngestPhase;
pub use state::PipelineState;
