//! Progress handler trait and events

use crate::model::CommandKind;
use std::time::Duration;

/// Events emitted while an ingestion run moves through its phases
#[derive(Debug, Clone)]
pub enum IngestEvent {
    /// Run started
    Started { total_lines: usize },

    /// A pipeline phase started
    PhaseStarted { phase: &'static str },

    /// A recognized command was applied to the registries
    CommandApplied {
        line_number: usize,
        command: CommandKind,
    },

    /// A vserver binding was queued for phase 2
    BindingDeferred {
        line_number: usize,
        vserver: String,
        service_group: String,
    },

    /// A pipeline phase finished
    PhaseComplete {
        phase: &'static str,
        duration: Duration,
    },

    /// Run finished with a graph
    Completed {
        vservers: usize,
        malformed: usize,
        warnings: usize,
        total_time: Duration,
    },

    /// Run aborted
    Aborted { error: String },
}

/// Trait for observing ingestion progress
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &IngestEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &IngestEvent) {}
}
