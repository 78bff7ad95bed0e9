//! Pure token → entity extractors, one per command family.
//!
//! Extractors depend only on the tokens of a single line plus whatever the
//! caller passes in explicitly (device IP, default method). Registries and
//! cross-line state belong to the pipeline.

mod binding;
mod device;
mod server;
mod service_group;
mod ssl;
mod vserver;

pub use binding::{
    extract_group_binding, extract_vserver_binding, GroupBindingFact, MemberRef,
    VserverBindingFact,
};
pub use device::{extract_device_ip, IP_ADDRESS_FLAG};
pub use server::extract_server;
pub use service_group::extract_service_group;
pub use ssl::{extract_cert_binding, CertBindingFact};
pub use vserver::{extract_vserver, vserver_name, LB_METHOD_FLAG};

use crate::layout::{layout_for, Fields};
use adcgraph_core::model::Port;
use adcgraph_core::{CommandKind, ExtractError};

/// Fields of a command whose layout accepts every line under its prefix.
fn fields_of(kind: CommandKind, tokens: &[String]) -> Result<Fields<'_>, ExtractError> {
    layout_for(kind)
        .fields(tokens)?
        .ok_or_else(|| ExtractError::invalid("command", &tokens.join(" "), "unsupported form"))
}

fn parse_port(value: &str) -> Result<Port, ExtractError> {
    value
        .parse::<Port>()
        .map_err(|e| ExtractError::invalid("port", value, e))
}
