use crate::classifier::{LineClassifier, Route};
use crate::extractors::{
    extract_cert_binding, extract_device_ip, extract_group_binding, extract_server,
    extract_service_group, extract_vserver, extract_vserver_binding, vserver_name,
};
use crate::layout::CommandLayout;
use crate::pipeline::context::{IngestContext, SourceLine};
use crate::pipeline::phase_trait::IngestPhase;
use crate::pipeline::state::PipelineState;
use crate::resolver::PendingBinding;
use crate::tokenizer::tokenize;
use adcgraph_core::model::MonitorBinding;
use adcgraph_core::{
    CommandKind, ExtractError, IngestError, IngestEvent, IngestWarning, MalformedCommand,
};
use tracing::{debug, trace, warn};

/// Outcome of applying one recognized line.
enum Applied {
    Done,
    /// The line shares a known prefix but is a form this engine ignores.
    Skipped,
}

/// Phase 1: classifies every line and applies it, queueing vserver
/// bindings for the resolve phase.
#[derive(Debug, Default)]
pub struct ScanPhase {
    classifier: LineClassifier,
}

impl ScanPhase {
    pub fn new() -> Self {
        Self::default()
    }

    fn scan_line(&self, context: &mut IngestContext, line: &SourceLine) -> Result<(), IngestError> {
        let tokens = tokenize(&line.text);

        let layout = match self.classifier.route(&tokens) {
            Route::Ignore => {
                trace!(line = line.number, "Ignoring unrecognized line");
                return Ok(());
            }
            Route::Immediate(layout) | Route::Deferred(layout) => layout,
        };

        match apply(context, layout, line, &tokens)? {
            Ok(Applied::Done) => context.emit(IngestEvent::CommandApplied {
                line_number: line.number,
                command: layout.kind,
            }),
            Ok(Applied::Skipped) => {
                trace!(line = line.number, command = %layout.kind, "Skipping unsupported form");
            }
            Err(error) => {
                warn!(
                    line = line.number,
                    command = %layout.kind,
                    error = %error,
                    "Skipping malformed command"
                );
                context.diagnostics.malformed.push(MalformedCommand {
                    line_number: line.number,
                    command: layout.kind,
                    line: line.text.clone(),
                    error,
                });
            }
        }

        Ok(())
    }
}

impl IngestPhase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn state(&self) -> PipelineState {
        PipelineState::Phase1Scanning
    }

    fn execute(&self, context: &mut IngestContext) -> Result<(), IngestError> {
        let lines = std::mem::take(&mut context.lines);
        for line in &lines {
            self.scan_line(context, line)?;
        }

        debug!(
            servers = context.registries.servers.len(),
            service_groups = context.registries.service_groups.len(),
            vservers = context.registries.vservers.len(),
            deferred = context.pending.len(),
            "Scan complete"
        );
        Ok(())
    }
}

/// The outer result carries fatal errors; the inner one per-line failures.
fn apply(
    context: &mut IngestContext,
    layout: &CommandLayout,
    line: &SourceLine,
    tokens: &[String],
) -> Result<Result<Applied, ExtractError>, IngestError> {
    let applied = match layout.kind {
        CommandKind::DeviceConfig => {
            let ip = extract_device_ip(tokens).map_err(|e| device_ip_error(e, line))?;
            if context.device_ip.is_some_and(|current| current != ip) {
                debug!(line = line.number, device_ip = %ip, "Device IP redeclared");
            }
            context.device_ip = Some(ip);
            Ok(Applied::Done)
        }
        CommandKind::AddServer => extract_server(tokens).map(|server| {
            let name = server.name.clone();
            if context.registries.servers.insert(server).is_some() {
                duplicate(context, line, layout.kind, name);
            }
            Applied::Done
        }),
        CommandKind::AddServiceGroup => extract_service_group(tokens).map(|group| {
            let name = group.name.clone();
            if context.registries.service_groups.insert(group).is_some() {
                duplicate(context, line, layout.kind, name);
            }
            Applied::Done
        }),
        CommandKind::AddLbVserver => {
            let device_ip = context
                .device_ip
                .ok_or_else(|| IngestError::DeviceIpMissing {
                    line_number: line.number,
                    vserver: vserver_name(tokens).to_string(),
                })?;
            extract_vserver(tokens, device_ip, &context.default_lb_method).map(|vip| {
                let name = vip.name.clone();
                if context.registries.vservers.insert(vip).is_some() {
                    duplicate(context, line, layout.kind, name);
                }
                Applied::Done
            })
        }
        CommandKind::BindServiceGroup => {
            extract_group_binding(tokens).map(|fact| apply_group_binding(context, line, fact))
        }
        CommandKind::BindSslVserver => extract_cert_binding(tokens).map(|fact| match fact {
            Some(fact) => {
                match context.registries.vservers.get_mut(&fact.vserver) {
                    Some(vip) => vip.bind_cert_key(fact.binding),
                    None => unknown(
                        context,
                        IngestWarning::UnknownVserver {
                            line_number: line.number,
                            vserver: fact.vserver,
                        },
                    ),
                }
                Applied::Done
            }
            None => Applied::Skipped,
        }),
        CommandKind::BindLbVserver => extract_vserver_binding(tokens).map(|fact| match fact {
            Some(fact) => {
                context.emit(IngestEvent::BindingDeferred {
                    line_number: line.number,
                    vserver: fact.vserver.clone(),
                    service_group: fact.service_group.clone(),
                });
                context.pending.push(PendingBinding {
                    line_number: line.number,
                    vserver: fact.vserver,
                    service_group: fact.service_group,
                });
                Applied::Done
            }
            None => Applied::Skipped,
        }),
    };

    Ok(applied)
}

fn apply_group_binding(
    context: &mut IngestContext,
    line: &SourceLine,
    fact: crate::extractors::GroupBindingFact,
) -> Applied {
    let registries = &mut context.registries;
    let Some(group) = registries.service_groups.get_mut(&fact.service_group) else {
        unknown(
            context,
            IngestWarning::UnknownServiceGroup {
                line_number: line.number,
                service_group: fact.service_group,
            },
        );
        return Applied::Done;
    };

    let mut missing_server = None;
    if let Some(member) = fact.member {
        match registries.servers.get(&member.server) {
            Some(server) => group.bind_server(server.bound_at(member.port)),
            None => missing_server = Some(member.server),
        }
    }
    if let Some(monitor) = fact.monitor {
        group.bind_monitor(MonitorBinding::new(monitor));
    }

    if let Some(server) = missing_server {
        unknown(
            context,
            IngestWarning::UnknownServer {
                line_number: line.number,
                service_group: fact.service_group,
                server,
            },
        );
    }
    Applied::Done
}

fn device_ip_error(error: ExtractError, line: &SourceLine) -> IngestError {
    match error {
        ExtractError::InvalidField { value, .. } => IngestError::DeviceIpMalformed {
            line_number: line.number,
            value,
        },
        ExtractError::MissingOption { .. } | ExtractError::TooFewTokens { .. } => {
            IngestError::DeviceIpNotFound {
                line_number: line.number,
                line: line.text.clone(),
            }
        }
    }
}

fn duplicate(context: &mut IngestContext, line: &SourceLine, command: CommandKind, name: String) {
    warn!(line = line.number, command = %command, name = %name, "Duplicate declaration replaces earlier entry");
    context
        .diagnostics
        .warnings
        .push(IngestWarning::DuplicateDeclaration {
            line_number: line.number,
            command,
            name,
        });
}

fn unknown(context: &mut IngestContext, warning: IngestWarning) {
    warn!(line = warning.line_number(), "{}", warning);
    context.diagnostics.warnings.push(warning);
}
