use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Where a backend server lives.
///
/// Servers are usually declared by IP, but domain-based servers
/// (`add server web www.example.com`) keep their hostname as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerAddress {
    Ip(IpAddr),
    Domain(String),
}

impl ServerAddress {
    pub fn parse(token: &str) -> Self {
        match token.parse::<IpAddr>() {
            Ok(ip) => ServerAddress::Ip(ip),
            Err(_) => ServerAddress::Domain(token.to_string()),
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            ServerAddress::Ip(ip) => Some(*ip),
            ServerAddress::Domain(_) => None,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerAddress::Ip(ip) => write!(f, "{}", ip),
            ServerAddress::Domain(name) => f.write_str(name),
        }
    }
}

impl From<IpAddr> for ServerAddress {
    fn from(ip: IpAddr) -> Self {
        ServerAddress::Ip(ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_and_ipv6() {
        assert_eq!(
            ServerAddress::parse("10.1.1.1").ip(),
            Some("10.1.1.1".parse().unwrap())
        );
        assert!(ServerAddress::parse("fd00::10").ip().is_some());
    }

    #[test]
    fn test_parse_domain() {
        let addr = ServerAddress::parse("www.example.com");
        assert_eq!(addr, ServerAddress::Domain("www.example.com".to_string()));
        assert_eq!(addr.to_string(), "www.example.com");
        assert!(addr.ip().is_none());
    }

    #[test]
    fn test_untagged_round_trip() {
        let json = serde_json::to_string(&ServerAddress::parse("10.0.0.7")).unwrap();
        assert_eq!(json, "\"10.0.0.7\"");
        let back: ServerAddress = serde_json::from_str("\"db.internal\"").unwrap();
        assert_eq!(back, ServerAddress::Domain("db.internal".to_string()));
    }
}
