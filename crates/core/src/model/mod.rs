//! Logical object graph reconstructed from a configuration dump.

mod address;
mod command;
mod port;
mod server;
mod service_group;
mod vendor;
mod vserver;

pub use address::ServerAddress;
pub use command::CommandKind;
pub use port::{ParsePortError, Port};
pub use server::{MonitorResponse, Server, ServerStatus};
pub use service_group::{MonitorBinding, MonitorStatus, ServiceGroup};
pub use vendor::{LbMethod, ServiceType};
pub use vserver::{CertKeyBinding, Vip};
