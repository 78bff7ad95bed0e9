use super::fields_of;
use crate::layout::FieldRole;
use adcgraph_core::model::ServiceGroup;
use adcgraph_core::{CommandKind, ExtractError};

/// `add serviceGroup NAME TYPE [-flag value ...]`; only the name is kept.
pub fn extract_service_group(tokens: &[String]) -> Result<ServiceGroup, ExtractError> {
    let fields = fields_of(CommandKind::AddServiceGroup, tokens)?;
    Ok(ServiceGroup::new(fields.require(FieldRole::Name)?))
}
