use super::state::PipelineState;
use crate::registry::Registries;
use crate::resolver::PendingBinding;
use adcgraph_core::model::LbMethod;
use adcgraph_core::{Diagnostics, IngestEvent, IngestReport, ProgressHandler};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// An input line with its 1-based position in the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Everything one run reads and writes. Created per run and consumed into
/// the report, so concurrent runs never share registries.
pub struct IngestContext {
    pub lines: Vec<SourceLine>,
    pub default_lb_method: LbMethod,
    pub progress_handler: Arc<dyn ProgressHandler>,
    pub registries: Registries,
    pub device_ip: Option<IpAddr>,
    pub pending: Vec<PendingBinding>,
    pub diagnostics: Diagnostics,
    state: PipelineState,
}

impl IngestContext {
    pub fn new<I, S>(
        lines: I,
        default_lb_method: LbMethod,
        progress_handler: Arc<dyn ProgressHandler>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| SourceLine {
                number: i + 1,
                text: text.as_ref().to_string(),
            })
            .collect();

        Self {
            lines,
            default_lb_method,
            progress_handler,
            registries: Registries::new(),
            device_ip: None,
            pending: Vec::new(),
            diagnostics: Diagnostics::default(),
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Moves the run forward. Backward or repeated transitions are ignored.
    pub fn advance(&mut self, next: PipelineState) {
        if self.state.can_advance_to(next) {
            debug!(from = %self.state, to = %next, "Pipeline state change");
            self.state = next;
        }
    }

    pub fn emit(&self, event: IngestEvent) {
        self.progress_handler.on_progress(&event);
    }

    pub fn into_report(self) -> IngestReport {
        IngestReport {
            device_ip: self.device_ip,
            vservers: self.registries.vservers.into_inner(),
            service_groups: self.registries.service_groups.into_inner(),
            servers: self.registries.servers.into_inner(),
            diagnostics: self.diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcgraph_core::NoOpHandler;

    #[test]
    fn test_lines_are_numbered_from_one() {
        let context = IngestContext::new(["a", "b"], LbMethod::default(), Arc::new(NoOpHandler));
        assert_eq!(context.lines[0].number, 1);
        assert_eq!(context.lines[1].text, "b");
        assert_eq!(context.state(), PipelineState::Idle);
    }

    #[test]
    fn test_advance_is_forward_only() {
        let mut context = IngestContext::new(
            Vec::<String>::new(),
            LbMethod::default(),
            Arc::new(NoOpHandler),
        );
        context.advance(PipelineState::Phase2Resolving);
        context.advance(PipelineState::Phase1Scanning);
        assert_eq!(context.state(), PipelineState::Phase2Resolving);
    }
}
