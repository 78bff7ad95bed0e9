use super::{fields_of, parse_port};
use crate::layout::{layout_for, FieldRole};
use adcgraph_core::model::Port;
use adcgraph_core::{CommandKind, ExtractError};

const MONITOR_FLAG: &str = "-monitorName";
/// `bind serviceGroup SG` plus at least one member or option token.
const MIN_GROUP_BINDING_TOKENS: usize = 4;

/// One `bind serviceGroup` line: a member server, a monitor, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBindingFact {
    pub service_group: String,
    pub member: Option<MemberRef>,
    pub monitor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRef {
    pub server: String,
    pub port: Option<Port>,
}

/// `bind serviceGroup SG [SERVER [PORT]] [-monitorName MON] ...`
pub fn extract_group_binding(tokens: &[String]) -> Result<GroupBindingFact, ExtractError> {
    let fields = fields_of(CommandKind::BindServiceGroup, tokens)?;
    if fields.len() < MIN_GROUP_BINDING_TOKENS {
        return Err(ExtractError::TooFewTokens {
            expected: MIN_GROUP_BINDING_TOKENS,
            found: fields.len(),
        });
    }

    let member = match fields.get(FieldRole::Member) {
        Some(server) => Some(MemberRef {
            server: server.to_string(),
            port: fields.get(FieldRole::Port).map(parse_port).transpose()?,
        }),
        None => None,
    };

    Ok(GroupBindingFact {
        service_group: fields.require(FieldRole::ServiceGroup)?.to_string(),
        member,
        monitor: fields.option(MONITOR_FLAG).map(str::to_string),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VserverBindingFact {
    pub vserver: String,
    pub service_group: String,
}

/// `bind lb vserver VS SG`
///
/// Returns `Ok(None)` for policy bindings (`bind lb vserver VS -policyName
/// ...`), which share the prefix.
pub fn extract_vserver_binding(
    tokens: &[String],
) -> Result<Option<VserverBindingFact>, ExtractError> {
    let Some(fields) = layout_for(CommandKind::BindLbVserver).fields(tokens)? else {
        return Ok(None);
    };

    Ok(Some(VserverBindingFact {
        vserver: fields.require(FieldRole::Vserver)?.to_string(),
        service_group: fields.require(FieldRole::ServiceGroup)?.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use yare::parameterized;

    fn member(server: &str, port: Option<Port>) -> Option<MemberRef> {
        Some(MemberRef {
            server: server.to_string(),
            port,
        })
    }

    #[parameterized(
        server_only = { "bind serviceGroup SG1 S1", member("S1", None), None },
        server_and_port = { "bind serviceGroup SG1 S1 8080", member("S1", Some(Port::Number(8080))), None },
        wildcard_port = { "bind serviceGroup SG1 S1 *", member("S1", Some(Port::Any)), None },
        trailing_options = { "bind serviceGroup SG1 S1 80 -weight 10 -CustomServerID 7", member("S1", Some(Port::Number(80))), None },
        monitor_only = { "bind serviceGroup SG1 -monitorName http-ecv", None, Some("http-ecv") },
        monitor_with_state = { "bind serviceGroup SG1 -monitorName ping -state DISABLED", None, Some("ping") },
        dangling_monitor = { "bind serviceGroup SG1 -monitorName", None, None },
    )]
    fn test_group_binding(line: &str, expected_member: Option<MemberRef>, monitor: Option<&str>) {
        let fact = extract_group_binding(&tokenize(line)).unwrap();
        assert_eq!(fact.service_group, "SG1");
        assert_eq!(fact.member, expected_member);
        assert_eq!(fact.monitor.as_deref(), monitor);
    }

    #[test]
    fn test_group_binding_needs_something_to_bind() {
        assert_eq!(
            extract_group_binding(&tokenize("bind serviceGroup SG1")).unwrap_err(),
            ExtractError::TooFewTokens {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_group_binding_bad_port() {
        assert!(matches!(
            extract_group_binding(&tokenize("bind serviceGroup SG1 S1 eighty")),
            Err(ExtractError::InvalidField { field: "port", .. })
        ));
    }

    #[test]
    fn test_vserver_binding() {
        let fact = extract_vserver_binding(&tokenize("bind lb vserver V1 SG1"))
            .unwrap()
            .unwrap();
        assert_eq!(
            fact,
            VserverBindingFact {
                vserver: "V1".to_string(),
                service_group: "SG1".to_string(),
            }
        );
    }

    #[test]
    fn test_vserver_policy_binding_is_ignored() {
        let tokens = tokenize("bind lb vserver V1 -policyName rw_pol -priority 100 -type REQUEST");
        assert_eq!(extract_vserver_binding(&tokens).unwrap(), None);
    }

    #[test]
    fn test_vserver_binding_too_short() {
        assert!(extract_vserver_binding(&tokenize("bind lb vserver V1")).is_err());
    }
}
