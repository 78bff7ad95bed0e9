use crate::layout::option_value;
use adcgraph_core::ExtractError;
use std::net::IpAddr;

pub const IP_ADDRESS_FLAG: &str = "-IPAddress";

/// Reads the appliance's management address from a `set ns config` line.
///
/// A missing flag (or a flag with no value) is `MissingOption`; a value that
/// is not an address is `InvalidField`. The pipeline treats both as fatal.
pub fn extract_device_ip(tokens: &[String]) -> Result<IpAddr, ExtractError> {
    let value = option_value(tokens, IP_ADDRESS_FLAG).ok_or(ExtractError::MissingOption {
        flag: IP_ADDRESS_FLAG,
    })?;

    value
        .parse::<IpAddr>()
        .map_err(|e| ExtractError::invalid("device IP", value, e))
}
