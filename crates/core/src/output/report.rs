use crate::error::ExtractError;
use crate::model::{CommandKind, Server, ServiceGroup, Vip};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::net::IpAddr;

/// Finished object graph of one ingestion run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    pub device_ip: Option<IpAddr>,
    /// Virtual servers by name, in declaration order.
    pub vservers: IndexMap<String, Vip>,
    pub service_groups: IndexMap<String, ServiceGroup>,
    pub servers: IndexMap<String, Server>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestStatus {
    Resolved,
    ResolvedWithWarnings,
}

impl IngestReport {
    pub fn status(&self) -> IngestStatus {
        if self.diagnostics.is_empty() {
            IngestStatus::Resolved
        } else {
            IngestStatus::ResolvedWithWarnings
        }
    }

    pub fn vserver(&self, name: &str) -> Option<&Vip> {
        self.vservers.get(name)
    }

    /// Mutable access for collaborators that fill in operational status
    /// after ingestion.
    pub fn vserver_mut(&mut self, name: &str) -> Option<&mut Vip> {
        self.vservers.get_mut(name)
    }

    pub fn server_mut(&mut self, name: &str) -> Option<&mut Server> {
        self.servers.get_mut(name)
    }
}

/// Everything the run skipped or dropped, for the caller to inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub malformed: Vec<MalformedCommand>,
    pub warnings: Vec<IngestWarning>,
}

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.malformed.is_empty() && self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.malformed.len() + self.warnings.len()
    }
}

/// A recognized command whose tokens did not fit its layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedCommand {
    pub line_number: usize,
    pub command: CommandKind,
    pub line: String,
    pub error: ExtractError,
}

impl fmt::Display for MalformedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: malformed `{}` command: {}",
            self.line_number, self.command, self.error
        )
    }
}

/// A relationship or declaration that was accepted but could not take
/// full effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IngestWarning {
    UnknownServer {
        line_number: usize,
        service_group: String,
        server: String,
    },
    UnknownServiceGroup {
        line_number: usize,
        service_group: String,
    },
    UnknownVserver {
        line_number: usize,
        vserver: String,
    },
    DuplicateDeclaration {
        line_number: usize,
        command: CommandKind,
        name: String,
    },
    /// A virtual server bound to the same service group more than once.
    DuplicateBinding {
        line_number: usize,
        vserver: String,
        service_group: String,
    },
}

impl IngestWarning {
    pub fn line_number(&self) -> usize {
        match self {
            IngestWarning::UnknownServer { line_number, .. }
            | IngestWarning::UnknownServiceGroup { line_number, .. }
            | IngestWarning::UnknownVserver { line_number, .. }
            | IngestWarning::DuplicateDeclaration { line_number, .. }
            | IngestWarning::DuplicateBinding { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::UnknownServer {
                line_number,
                service_group,
                server,
            } => write!(
                f,
                "line {}: service group `{}` binds unknown server `{}`",
                line_number, service_group, server
            ),
            IngestWarning::UnknownServiceGroup {
                line_number,
                service_group,
            } => write!(
                f,
                "line {}: unknown service group `{}`",
                line_number, service_group
            ),
            IngestWarning::UnknownVserver {
                line_number,
                vserver,
            } => write!(f, "line {}: unknown virtual server `{}`", line_number, vserver),
            IngestWarning::DuplicateDeclaration {
                line_number,
                command,
                name,
            } => write!(
                f,
                "line {}: `{} {}` replaces an earlier declaration",
                line_number, command, name
            ),
            IngestWarning::DuplicateBinding {
                line_number,
                vserver,
                service_group,
            } => write!(
                f,
                "line {}: virtual server `{}` is already bound to `{}`",
                line_number, vserver, service_group
            ),
        }
    }
}
