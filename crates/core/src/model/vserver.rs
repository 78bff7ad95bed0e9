use super::{LbMethod, MonitorBinding, Port, Server, ServiceGroup, ServiceType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A load-balancing virtual server (VIP) declared by `add lb vserver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vip {
    pub name: String,
    pub ip: IpAddr,
    pub port: Port,
    pub service_type: ServiceType,
    pub lb_method: LbMethod,
    /// Management address of the appliance that owns this VIP.
    pub device_ip: IpAddr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub service_groups: Vec<String>,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub monitors: Vec<MonitorBinding>,
    #[serde(default)]
    pub cert_keys: Vec<CertKeyBinding>,
}

/// A certificate-key pair bound to an SSL virtual server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertKeyBinding {
    pub cert_key_name: String,
    /// Secondary certificate selected by SNI rather than the default one.
    pub sni_cert: bool,
}

impl CertKeyBinding {
    pub fn primary(cert_key_name: impl Into<String>) -> Self {
        Self {
            cert_key_name: cert_key_name.into(),
            sni_cert: false,
        }
    }

    pub fn sni(cert_key_name: impl Into<String>) -> Self {
        Self {
            cert_key_name: cert_key_name.into(),
            sni_cert: true,
        }
    }
}

impl Vip {
    pub fn new(
        name: impl Into<String>,
        service_type: ServiceType,
        ip: IpAddr,
        port: Port,
        lb_method: LbMethod,
        device_ip: IpAddr,
    ) -> Self {
        Self {
            name: name.into(),
            ip,
            port,
            service_type,
            lb_method,
            device_ip,
            state: None,
            service_groups: Vec::new(),
            servers: Vec::new(),
            monitors: Vec::new(),
            cert_keys: Vec::new(),
        }
    }

    pub fn is_bound_to(&self, service_group: &str) -> bool {
        self.service_groups.iter().any(|name| name == service_group)
    }

    /// Pulls a service group's members and monitors onto this VIP.
    ///
    /// Callers skip groups for which `is_bound_to` already holds.
    ///
    /// Every copied server answers on the VIP's port; the group itself is
    /// left untouched so other VIPs bound to it see the original ports.
    pub fn bind_service_group(&mut self, group: &ServiceGroup) {
        let port = self.port;
        self.servers.extend(
            group
                .servers
                .iter()
                .map(|server| server.bound_at(Some(port))),
        );
        self.monitors.extend(group.monitors.iter().cloned());
        self.service_groups.push(group.name.clone());
    }

    pub fn bind_cert_key(&mut self, binding: CertKeyBinding) {
        self.cert_keys.push(binding);
    }

    pub fn primary_cert(&self) -> Option<&CertKeyBinding> {
        self.cert_keys.iter().find(|c| !c.sni_cert)
    }

    pub fn sni_certs(&self) -> impl Iterator<Item = &CertKeyBinding> {
        self.cert_keys.iter().filter(|c| c.sni_cert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServerAddress;

    fn vip(port: Port) -> Vip {
        Vip::new(
            "V1",
            ServiceType::Http,
            "20.0.0.1".parse().unwrap(),
            port,
            LbMethod::default(),
            "10.0.0.1".parse().unwrap(),
        )
    }

    #[test]
    fn test_bind_service_group_rewrites_ports_on_copies() {
        let mut group = ServiceGroup::new("SG1");
        group.bind_server(Server::new("S1", ServerAddress::parse("10.1.1.1")).with_port(Port::Number(8080)));
        group.bind_server(Server::new("S2", ServerAddress::parse("10.1.1.2")));
        group.bind_monitor(MonitorBinding::new("ping"));

        let mut v = vip(Port::Number(80));
        v.bind_service_group(&group);

        assert_eq!(v.servers.len(), 2);
        assert!(v.servers.iter().all(|s| s.port == Some(Port::Number(80))));
        assert_eq!(v.monitors, group.monitors);
        assert_eq!(v.service_groups, vec!["SG1".to_string()]);
        assert_eq!(group.servers[0].port, Some(Port::Number(8080)));
        assert_eq!(group.servers[1].port, None);
    }

    #[test]
    fn test_binding_two_groups_appends() {
        let mut a = ServiceGroup::new("A");
        a.bind_server(Server::new("S1", ServerAddress::parse("10.1.1.1")));
        let mut b = ServiceGroup::new("B");
        b.bind_server(Server::new("S2", ServerAddress::parse("10.1.1.2")));

        let mut v = vip(Port::Any);
        v.bind_service_group(&a);
        v.bind_service_group(&b);

        let names: Vec<_> = v.servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["S1", "S2"]);
        assert!(v.servers.iter().all(|s| s.port == Some(Port::Any)));
        assert!(v.is_bound_to("A"));
        assert!(v.is_bound_to("B"));
        assert!(!v.is_bound_to("C"));
    }

    #[test]
    fn test_primary_and_sni_certs() {
        let mut v = vip(Port::Number(443));
        v.bind_cert_key(CertKeyBinding::primary("default-cert"));
        v.bind_cert_key(CertKeyBinding::sni("alt-cert"));

        assert_eq!(v.primary_cert().unwrap().cert_key_name, "default-cert");
        let sni: Vec<_> = v.sni_certs().map(|c| c.cert_key_name.as_str()).collect();
        assert_eq!(sni, vec!["alt-cert"]);
    }
}
