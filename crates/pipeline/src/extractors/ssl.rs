use crate::layout::{layout_for, FieldRole};
use adcgraph_core::model::CertKeyBinding;
use adcgraph_core::{CommandKind, ExtractError};

/// Token count of a primary certificate binding; longer lines carry `-SNICert`
/// or similar trailing options and are treated as SNI bindings.
const PRIMARY_BINDING_TOKENS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertBindingFact {
    pub vserver: String,
    pub binding: CertKeyBinding,
}

/// `bind ssl vserver VS -certkeyName CERT [...]`
///
/// Returns `Ok(None)` for the cipher, curve and policy forms that share the
/// prefix but bind no certificate.
pub fn extract_cert_binding(tokens: &[String]) -> Result<Option<CertBindingFact>, ExtractError> {
    let Some(fields) = layout_for(CommandKind::BindSslVserver).fields(tokens)? else {
        return Ok(None);
    };

    let vserver = fields.require(FieldRole::Vserver)?.to_string();
    let cert = fields.require(FieldRole::CertKey)?;

    let binding = if fields.len() == PRIMARY_BINDING_TOKENS {
        CertKeyBinding::primary(cert)
    } else {
        CertKeyBinding::sni(cert)
    };

    Ok(Some(CertBindingFact { vserver, binding }))
}
