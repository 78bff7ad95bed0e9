//! Logging-based progress handler

use super::{IngestEvent, ProgressHandler};
use tracing::{debug, error, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &IngestEvent) {
        match event {
            IngestEvent::Started { total_lines } => {
                info!(lines = total_lines, "Starting ingestion");
            }
            IngestEvent::PhaseStarted { phase } => {
                debug!(phase = %phase, "Phase started");
            }
            IngestEvent::CommandApplied {
                line_number,
                command,
            } => {
                debug!(line = line_number, command = %command, "Command applied");
            }
            IngestEvent::BindingDeferred {
                line_number,
                vserver,
                service_group,
            } => {
                debug!(
                    line = line_number,
                    vserver = %vserver,
                    service_group = %service_group,
                    "Binding deferred to resolve phase"
                );
            }
            IngestEvent::PhaseComplete { phase, duration } => {
                debug!(
                    phase = %phase,
                    duration_ms = duration.as_millis(),
                    "Phase complete"
                );
            }
            IngestEvent::Completed {
                vservers,
                malformed,
                warnings,
                total_time,
            } => {
                if *malformed > 0 || *warnings > 0 {
                    warn!(
                        vservers,
                        malformed,
                        warnings,
                        total_time_ms = total_time.as_millis(),
                        "Ingestion complete with diagnostics"
                    );
                } else {
                    info!(
                        vservers,
                        total_time_ms = total_time.as_millis(),
                        "Ingestion complete"
                    );
                }
            }
            IngestEvent::Aborted { error: reason } => {
                error!(error = %reason, "Ingestion aborted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_handler_accepts_every_event() {
        let handler = LoggingHandler;
        handler.on_progress(&IngestEvent::Started { total_lines: 1 });
        handler.on_progress(&IngestEvent::BindingDeferred {
            line_number: 1,
            vserver: "V1".to_string(),
            service_group: "SG1".to_string(),
        });
        handler.on_progress(&IngestEvent::Completed {
            vservers: 0,
            malformed: 1,
            warnings: 0,
            total_time: Duration::ZERO,
        });
        handler.on_progress(&IngestEvent::Aborted {
            error: "device IP not found".to_string(),
        });
    }
}
