//! Second pass: applies queued vserver → service group bindings.

use crate::registry::Registries;
use adcgraph_core::IngestWarning;
use tracing::{debug, warn};

/// A `bind lb vserver` line recorded during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBinding {
    pub line_number: usize,
    pub vserver: String,
    pub service_group: String,
}

/// Applies every pending binding in recorded order.
///
/// Must run after all `bind serviceGroup` lines have been applied, so each
/// VIP sees its group's final member list. A binding naming an unknown VIP or
/// service group creates nothing and yields a warning, as does a repeat of a
/// binding already applied.
pub fn resolve(
    registries: &mut Registries,
    pending: impl IntoIterator<Item = PendingBinding>,
) -> Vec<IngestWarning> {
    let mut warnings = Vec::new();

    for binding in pending {
        let Some(group) = registries.service_groups.get(&binding.service_group) else {
            warn!(
                line = binding.line_number,
                vserver = %binding.vserver,
                service_group = %binding.service_group,
                "Dropping binding to unknown service group"
            );
            warnings.push(IngestWarning::UnknownServiceGroup {
                line_number: binding.line_number,
                service_group: binding.service_group,
            });
            continue;
        };

        let Some(vip) = registries.vservers.get_mut(&binding.vserver) else {
            warn!(
                line = binding.line_number,
                vserver = %binding.vserver,
                "Dropping binding from unknown virtual server"
            );
            warnings.push(IngestWarning::UnknownVserver {
                line_number: binding.line_number,
                vserver: binding.vserver,
            });
            continue;
        };

        if vip.is_bound_to(&group.name) {
            warn!(
                line = binding.line_number,
                vserver = %vip.name,
                service_group = %group.name,
                "Ignoring repeated binding"
            );
            warnings.push(IngestWarning::DuplicateBinding {
                line_number: binding.line_number,
                vserver: binding.vserver,
                service_group: binding.service_group,
            });
            continue;
        }

        vip.bind_service_group(group);
        debug!(
            vserver = %vip.name,
            service_group = %group.name,
            servers = group.servers.len(),
            monitors = group.monitors.len(),
            "Resolved binding"
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcgraph_core::model::{
        LbMethod, MonitorBinding, Port, Server, ServerAddress, ServiceGroup, ServiceType, Vip,
    };

    fn registries() -> Registries {
        let mut registries = Registries::new();

        let mut group = ServiceGroup::new("SG1");
        group.bind_server(Server::new("S1", ServerAddress::parse("10.1.1.1")).with_port(Port::Number(8080)));
        group.bind_monitor(MonitorBinding::new("ping"));
        registries.service_groups.insert(group);

        registries.vservers.insert(Vip::new(
            "V1",
            ServiceType::Http,
            "20.0.0.1".parse().unwrap(),
            Port::Number(80),
            LbMethod::default(),
            "10.0.0.1".parse().unwrap(),
        ));
        registries
    }

    fn pending(vserver: &str, service_group: &str) -> PendingBinding {
        PendingBinding {
            line_number: 7,
            vserver: vserver.to_string(),
            service_group: service_group.to_string(),
        }
    }

    #[test]
    fn test_resolves_known_binding() {
        let mut registries = registries();
        let warnings = resolve(&mut registries, vec![pending("V1", "SG1")]);

        assert!(warnings.is_empty());
        let vip = registries.vservers.get("V1").unwrap();
        assert_eq!(vip.servers.len(), 1);
        assert_eq!(vip.servers[0].port, Some(Port::Number(80)));
        assert_eq!(vip.monitors[0].monitor_name, "ping");
        assert_eq!(vip.service_groups, vec!["SG1".to_string()]);

        let group = registries.service_groups.get("SG1").unwrap();
        assert_eq!(group.servers[0].port, Some(Port::Number(8080)));
    }

    #[test]
    fn test_repeated_binding_is_applied_once() {
        let mut registries = registries();
        let mut second = pending("V1", "SG1");
        second.line_number = 9;
        let warnings = resolve(&mut registries, vec![pending("V1", "SG1"), second]);

        assert_eq!(
            warnings,
            vec![IngestWarning::DuplicateBinding {
                line_number: 9,
                vserver: "V1".to_string(),
                service_group: "SG1".to_string(),
            }]
        );
        let vip = registries.vservers.get("V1").unwrap();
        assert_eq!(vip.servers.len(), 1);
        assert_eq!(vip.monitors.len(), 1);
        assert_eq!(vip.service_groups, vec!["SG1".to_string()]);
    }

    #[test]
    fn test_unknown_service_group_is_dropped() {
        let mut registries = registries();
        let warnings = resolve(&mut registries, vec![pending("V1", "ghost")]);

        assert_eq!(
            warnings,
            vec![IngestWarning::UnknownServiceGroup {
                line_number: 7,
                service_group: "ghost".to_string(),
            }]
        );
        let vip = registries.vservers.get("V1").unwrap();
        assert!(vip.servers.is_empty());
        assert!(vip.monitors.is_empty());
    }

    #[test]
    fn test_unknown_vserver_creates_nothing() {
        let mut registries = registries();
        let warnings = resolve(&mut registries, vec![pending("V9", "SG1")]);

        assert!(matches!(
            warnings.as_slice(),
            [IngestWarning::UnknownVserver { vserver, .. }] if vserver == "V9"
        ));
        assert_eq!(registries.vservers.len(), 1);
    }
}
