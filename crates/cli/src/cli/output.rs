//! Output formatting for ingestion reports
//!
//! JSON and YAML serialize the report as-is. The human format prints one
//! tree per virtual server followed by any diagnostics.

use adcgraph_core::{AdcGraphConfig, IngestReport, IngestStatus, Vip};
use anyhow::{Context, Result};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &IngestReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize ingestion report to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize ingestion report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    pub fn format_config(&self, config: &AdcGraphConfig) -> Result<String> {
        let config_map = config.to_display_map();
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config_map)
                .context("Failed to serialize config to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(&config_map).context("Failed to serialize config to YAML")
            }
            OutputFormat::Human => Ok(config.to_string()),
        }
    }

    fn format_human(&self, report: &IngestReport) -> String {
        let mut output = String::new();

        match report.status() {
            IngestStatus::Resolved => output.push_str("\u{2713} Configuration Graph\n"),
            IngestStatus::ResolvedWithWarnings => {
                output.push_str("\u{26A0} Configuration Graph (with diagnostics)\n")
            }
        }
        output.push_str(RULE);
        output.push_str("\n\n");

        let device = report
            .device_ip
            .map_or_else(|| "(not declared)".to_string(), |ip| ip.to_string());
        output.push_str(&format!("Device IP:       {}\n", device));
        output.push_str(&format!("Servers:         {}\n", report.servers.len()));
        output.push_str(&format!("Service Groups:  {}\n", report.service_groups.len()));
        output.push_str(&format!("Virtual Servers: {}\n", report.vservers.len()));

        for vip in report.vservers.values() {
            output.push('\n');
            push_vip(&mut output, vip);
        }

        if !report.diagnostics.is_empty() {
            output.push_str("\n\u{26A0} Diagnostics:\n");
            for malformed in &report.diagnostics.malformed {
                output.push_str(&format!("  - {}\n", malformed));
            }
            for warning in &report.diagnostics.warnings {
                output.push_str(&format!("  - {}\n", warning));
            }
        }

        output
    }
}

fn push_vip(output: &mut String, vip: &Vip) {
    output.push_str(&format!(
        "{} {} {}:{} ({})\n",
        vip.name, vip.service_type, vip.ip, vip.port, vip.lb_method
    ));

    let mut rows = Vec::new();
    if let Some(state) = &vip.state {
        rows.push(format!("State: {}", state));
    }
    if !vip.service_groups.is_empty() {
        rows.push(format!("Service Groups: {}", vip.service_groups.join(", ")));
    }
    for server in &vip.servers {
        let port = server.port.map_or_else(String::new, |p| format!(":{}", p));
        rows.push(format!("Server {} {}{}", server.name, server.address, port));
    }
    for monitor in &vip.monitors {
        rows.push(format!("Monitor {}", monitor.monitor_name));
    }
    for cert in &vip.cert_keys {
        let kind = if cert.sni_cert { "SNI" } else { "primary" };
        rows.push(format!("Cert {} ({})", cert.cert_key_name, kind));
    }

    if rows.is_empty() {
        output.push_str("\u{2514}\u{2500} (no bindings)\n");
        return;
    }

    let last = rows.len() - 1;
    for (i, row) in rows.iter().enumerate() {
        let connector = if i == last { "\u{2514}" } else { "\u{251C}" };
        output.push_str(&format!("{}\u{2500} {}\n", connector, row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcgraph_pipeline::ingest;

    fn create_test_report() -> IngestReport {
        ingest([
            "set ns config -IPAddress 10.0.0.1",
            "add server S1 10.1.1.1",
            "add serviceGroup SG1 HTTP",
            "bind serviceGroup SG1 S1 8080",
            "bind serviceGroup SG1 -monitorName ping",
            "add lb vserver V1 SSL 20.0.0.1 443 -lbMethod ROUNDROBIN",
            "bind lb vserver V1 SG1",
            "bind ssl vserver V1 -certkeyName site-cert",
        ])
        .unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter.format(&create_test_report()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["vservers"]["V1"]["lb_method"], "ROUNDROBIN");
        assert_eq!(parsed["vservers"]["V1"]["servers"][0]["port"], "443");
    }

    #[test]
    fn test_yaml_format() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter.format(&create_test_report()).unwrap();

        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed["device_ip"].as_str(), Some("10.0.0.1"));
        assert!(output.contains("site-cert"));
    }

    #[test]
    fn test_human_format() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format(&create_test_report()).unwrap();

        assert!(output.starts_with("\u{2713} Configuration Graph"));
        assert!(output.contains("Device IP:       10.0.0.1"));
        assert!(output.contains("V1 SSL 20.0.0.1:443 (ROUNDROBIN)"));
        assert!(output.contains("Server S1 10.1.1.1:443"));
        assert!(output.contains("Monitor ping"));
        assert!(output.contains("\u{2514}\u{2500} Cert site-cert (primary)"));
        assert!(!output.contains("Diagnostics"));
    }

    #[test]
    fn test_human_format_lists_diagnostics() {
        let report = ingest([
            "set ns config -IPAddress 10.0.0.1",
            "add lb vserver V1 HTTP 20.0.0.1 80",
            "bind lb vserver V1 SG_MISSING",
            "add server S1",
        ])
        .unwrap();

        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&report)
            .unwrap();
        assert!(output.contains("with diagnostics"));
        assert!(output.contains("unknown service group `SG_MISSING`"));
        assert!(output.contains("malformed `add server` command"));
        assert!(output.contains("(no bindings)"));
    }

    #[test]
    fn test_config_formats() {
        let config = AdcGraphConfig::default();

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_config(&config)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["default_lb_method"], "LEASTCONNECTION");

        let human = OutputFormatter::new(OutputFormat::Human)
            .format_config(&config)
            .unwrap();
        assert!(human.contains("adcgraph configuration:"));
    }
}
