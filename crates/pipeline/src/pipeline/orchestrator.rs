use super::context::IngestContext;
use super::phase_trait::IngestPhase;
use super::phases::{resolve::ResolvePhase, scan::ScanPhase};
use super::state::PipelineState;
use adcgraph_core::model::LbMethod;
use adcgraph_core::{
    AdcGraphConfig, IngestError, IngestEvent, IngestReport, NoOpHandler, ProgressHandler,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Builds the object graph for one configuration dump per call.
///
/// The builder holds only settings, so one instance can serve any number of
/// runs, including concurrent ones on different threads.
#[derive(Clone)]
pub struct GraphBuilder {
    default_lb_method: LbMethod,
    progress_handler: Arc<dyn ProgressHandler>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(&AdcGraphConfig::default())
    }
}

impl GraphBuilder {
    pub fn new(config: &AdcGraphConfig) -> Self {
        Self {
            default_lb_method: config.default_lb_method.clone(),
            progress_handler: Arc::new(NoOpHandler),
        }
    }

    pub fn with_progress_handler(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = handler;
        self
    }

    pub fn build<I, S>(&self, lines: I) -> Result<IngestReport, IngestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut context = IngestContext::new(
            lines,
            self.default_lb_method.clone(),
            self.progress_handler.clone(),
        );

        debug!(lines = context.lines.len(), "Building graph");
        context.emit(IngestEvent::Started {
            total_lines: context.lines.len(),
        });

        let phases: Vec<Box<dyn IngestPhase>> =
            vec![Box::new(ScanPhase::new()), Box::new(ResolvePhase)];

        for phase in phases {
            let phase_name = phase.name();
            context.advance(phase.state());
            info!(phase = %phase_name, "Starting phase");
            context.emit(IngestEvent::PhaseStarted { phase: phase_name });

            let phase_start = Instant::now();
            if let Err(e) = phase.execute(&mut context) {
                error!(phase = %phase_name, error = %e, "Phase failed");
                context.emit(IngestEvent::Aborted {
                    error: e.to_string(),
                });
                return Err(e);
            }

            info!(
                phase = %phase_name,
                duration_ms = phase_start.elapsed().as_millis(),
                "Phase complete"
            );
            context.emit(IngestEvent::PhaseComplete {
                phase: phase_name,
                duration: phase_start.elapsed(),
            });
        }

        context.advance(PipelineState::Done);

        let handler = Arc::clone(&context.progress_handler);
        let report = context.into_report();

        debug!(
            vservers = report.vservers.len(),
            malformed = report.diagnostics.malformed.len(),
            warnings = report.diagnostics.warnings.len(),
            total_time_ms = start.elapsed().as_millis(),
            "Graph built"
        );
        handler.on_progress(&IngestEvent::Completed {
            vservers: report.vservers.len(),
            malformed: report.diagnostics.malformed.len(),
            warnings: report.diagnostics.warnings.len(),
            total_time: start.elapsed(),
        });

        Ok(report)
    }
}

/// Runs the pipeline with built-in defaults.
pub fn ingest<I, S>(lines: I) -> Result<IngestReport, IngestError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GraphBuilder::default().build(lines)
}
