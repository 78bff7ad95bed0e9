use super::Server;
use serde::{Deserialize, Serialize};

/// A named pool of servers behind a shared health-check policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub name: String,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub monitors: Vec<MonitorBinding>,
}

/// A health monitor attached to a service group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorBinding {
    pub monitor_name: String,
    #[serde(default)]
    pub status: MonitorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl MonitorBinding {
    pub fn new(monitor_name: impl Into<String>) -> Self {
        Self {
            monitor_name: monitor_name.into(),
            status: MonitorStatus::default(),
        }
    }
}

impl ServiceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            servers: Vec::new(),
            monitors: Vec::new(),
        }
    }

    pub fn bind_server(&mut self, server: Server) {
        self.servers.push(server);
    }

    pub fn bind_monitor(&mut self, monitor: MonitorBinding) {
        self.monitors.push(monitor);
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
