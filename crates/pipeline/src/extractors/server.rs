use super::{fields_of, parse_port};
use crate::layout::FieldRole;
use adcgraph_core::model::{Server, ServerAddress};
use adcgraph_core::{CommandKind, ExtractError};

/// `add server NAME ADDRESS [PORT] [-flag value ...]`
pub fn extract_server(tokens: &[String]) -> Result<Server, ExtractError> {
    let fields = fields_of(CommandKind::AddServer, tokens)?;

    let name = fields.require(FieldRole::Name)?;
    let address = ServerAddress::parse(fields.require(FieldRole::Address)?);
    let mut server = Server::new(name, address);

    if let Some(port) = fields.get(FieldRole::Port) {
        server = server.with_port(parse_port(port)?);
    }

    Ok(server)
}
