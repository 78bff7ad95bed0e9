use super::{Port, ServerAddress};
use serde::{Deserialize, Serialize};

/// A backend compute target declared by `add server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub name: String,
    pub address: ServerAddress,
    /// `None` until a service group or virtual server binding supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Port>,
    #[serde(default)]
    pub status: ServerStatus,
}

/// Operational state filled in by health collaborators after ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_change_time_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks_since_last_change: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<MonitorResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorResponse {
    pub monitor_name: String,
    pub last_response: String,
}

impl Server {
    pub fn new(name: impl Into<String>, address: ServerAddress) -> Self {
        Self {
            name: name.into(),
            address,
            port: None,
            status: ServerStatus::default(),
        }
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.port = Some(port);
        self
    }

    /// Copy of this server as seen through a binding that pins its port.
    pub fn bound_at(&self, port: Option<Port>) -> Self {
        let mut copy = self.clone();
        if port.is_some() {
            copy.port = port;
        }
        copy
    }
}
