use super::{fields_of, parse_port};
use crate::layout::FieldRole;
use adcgraph_core::model::{LbMethod, ServiceType, Vip};
use adcgraph_core::{CommandKind, ExtractError};
use std::net::IpAddr;

pub const LB_METHOD_FLAG: &str = "-lbMethod";

/// `add lb vserver NAME TYPE IP PORT [-lbMethod M] ...`
///
/// FTP virtual servers carry a `[ftp://FTP` marker between the type and the
/// address, which shifts the address and port one position right.
pub fn extract_vserver(
    tokens: &[String],
    device_ip: IpAddr,
    default_method: &LbMethod,
) -> Result<Vip, ExtractError> {
    let fields = fields_of(CommandKind::AddLbVserver, tokens)?;

    let name = fields.require(FieldRole::Name)?;
    let service_type = ServiceType::from_token(fields.require(FieldRole::ServiceType)?);

    let ip_token = fields.require(FieldRole::Address)?;
    let ip = ip_token
        .parse::<IpAddr>()
        .map_err(|e| ExtractError::invalid("vserver IP", ip_token, e))?;
    let port = parse_port(fields.require(FieldRole::Port)?)?;

    let lb_method = fields
        .option(LB_METHOD_FLAG)
        .map(LbMethod::from_token)
        .unwrap_or_else(|| default_method.clone());

    Ok(Vip::new(name, service_type, ip, port, lb_method, device_ip))
}

/// Name token of a vserver declaration, for errors raised before extraction.
pub fn vserver_name(tokens: &[String]) -> &str {
    tokens.get(3).map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;
    use adcgraph_core::model::Port;
    use yare::parameterized;

    fn device() -> IpAddr {
        "10.0.0.1".parse().unwrap()
    }

    fn extract(line: &str) -> Result<Vip, ExtractError> {
        extract_vserver(&tokenize(line), device(), &LbMethod::default())
    }

    #[test]
    fn test_basic_vserver() {
        let vip = extract("add lb vserver V1 HTTP 20.0.0.1 80").unwrap();

        assert_eq!(vip.name, "V1");
        assert_eq!(vip.service_type, ServiceType::Http);
        assert_eq!(vip.ip, "20.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(vip.port, Port::Number(80));
        assert_eq!(vip.lb_method, LbMethod::LeastConnection);
        assert_eq!(vip.device_ip, device());
        assert!(vip.servers.is_empty());
        assert!(vip.cert_keys.is_empty());
    }

    #[parameterized(
        absent = { "add lb vserver V1 HTTP 20.0.0.1 80", LbMethod::LeastConnection },
        round_robin = { "add lb vserver V1 HTTP 20.0.0.1 80 -lbMethod ROUNDROBIN", LbMethod::RoundRobin },
        after_other_flags = { "add lb vserver V1 SSL 20.0.0.1 443 -persistenceType NONE -lbMethod SOURCEIPHASH -cltTimeout 180", LbMethod::SourceIpHash },
        dangling = { "add lb vserver V1 HTTP 20.0.0.1 80 -lbMethod", LbMethod::LeastConnection },
        followed_by_flag = { "add lb vserver V1 HTTP 20.0.0.1 80 -lbMethod -cltTimeout 180", LbMethod::LeastConnection },
        unknown = { "add lb vserver V1 HTTP 20.0.0.1 80 -lbMethod FASTEST", LbMethod::Custom("FASTEST".to_string()) },
    )]
    fn test_lb_method(line: &str, expected: LbMethod) {
        assert_eq!(extract(line).unwrap().lb_method, expected);
    }

    #[test]
    fn test_configured_default_method() {
        let vip = extract_vserver(
            &tokenize("add lb vserver V1 HTTP 20.0.0.1 80"),
            device(),
            &LbMethod::RoundRobin,
        )
        .unwrap();
        assert_eq!(vip.lb_method, LbMethod::RoundRobin);
    }

    #[test]
    fn test_ftp_marker_shifts_positions() {
        let vip = extract("add lb vserver ftp_vs FTP [ftp://FTP 20.0.0.9 21 -lbMethod ROUNDROBIN").unwrap();
        assert_eq!(vip.name, "ftp_vs");
        assert_eq!(vip.service_type, ServiceType::Ftp);
        assert_eq!(vip.lb_method, LbMethod::RoundRobin);
        assert_eq!(vip.ip, "20.0.0.9".parse::<IpAddr>().unwrap());
        assert_eq!(vip.port, Port::Number(21));
    }

    #[test]
    fn test_ftp_marker_without_address() {
        assert!(extract("add lb vserver ftp_vs FTP [ftp://FTP 20.0.0.9").is_err());
    }

    #[test]
    fn test_wildcard_port_and_admin_state() {
        let vip = extract("add lb vserver V1 ANY 20.0.0.1 * -state DISABLED").unwrap();
        assert_eq!(vip.port, Port::Any);
        assert_eq!(vip.service_type, ServiceType::Any);
        assert_eq!(vip.state, None);
    }

    #[test]
    fn test_unknown_service_type_is_kept() {
        let vip = extract("add lb vserver V1 QUIC 20.0.0.1 443").unwrap();
        assert_eq!(vip.service_type, ServiceType::Custom("QUIC".to_string()));
    }

    #[test]
    fn test_malformed_fields() {
        assert_eq!(
            extract("add lb vserver V1 HTTP 20.0.0.1").unwrap_err(),
            ExtractError::TooFewTokens {
                expected: 7,
                found: 6
            }
        );
        assert!(matches!(
            extract("add lb vserver V1 HTTP web.example.com 80"),
            Err(ExtractError::InvalidField {
                field: "vserver IP",
                ..
            })
        ));
        assert!(matches!(
            extract("add lb vserver V1 HTTP 20.0.0.1 99999"),
            Err(ExtractError::InvalidField { field: "port", .. })
        ));
    }

    #[test]
    fn test_vserver_name() {
        assert_eq!(vserver_name(&tokenize("add lb vserver V1 HTTP")), "V1");
        assert_eq!(vserver_name(&tokenize("add lb vserver")), "");
    }
}
