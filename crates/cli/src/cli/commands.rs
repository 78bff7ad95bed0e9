use adcgraph_core::model::LbMethod;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rebuilds the load-balancing object graph from an ADC configuration dump
#[derive(Parser, Debug)]
#[command(
    name = "adcgraph",
    about = "Rebuilds the load-balancing object graph from an ADC configuration dump",
    version,
    author,
    long_about = "adcgraph reads a running-configuration dump, extracts servers, service groups \
                  and virtual servers, and resolves the bindings between them into one graph \
                  per virtual server. Bindings may appear in any order in the dump."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Ingest a configuration dump and print the resolved graph",
        long_about = "Reads a configuration dump line by line, builds the object graph and \
                      prints it.\n\n\
                      Exit codes: 0 resolved, 1 aborted or I/O failure, 2 resolved with \
                      diagnostics under --strict.\n\n\
                      Examples:\n  \
                      adcgraph ingest ns.conf\n  \
                      adcgraph ingest ns.conf --format json --output graph.json\n  \
                      cat ns.conf | adcgraph ingest - --strict"
    )]
    Ingest(IngestArgs),

    #[command(
        about = "Show the effective configuration",
        long_about = "Prints the configuration assembled from ADCGRAPH_* environment \
                      variables and built-in defaults.\n\n\
                      Examples:\n  \
                      adcgraph config\n  \
                      adcgraph config --format json"
    )]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct IngestArgs {
    #[arg(value_name = "FILE", help = "Configuration dump to read, or - for stdin")]
    pub input: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Exit with status 2 when the graph has diagnostics")]
    pub strict: bool,

    #[arg(
        long,
        value_name = "METHOD",
        value_parser = parse_lb_method,
        help = "Method for virtual servers declared without -lbMethod"
    )]
    pub default_lb_method: Option<LbMethod>,
}

impl IngestArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_lb_method(s: &str) -> Result<LbMethod, String> {
    LbMethod::known(&s.to_uppercase()).ok_or_else(|| {
        format!(
            "Invalid load-balancing method: {}. Valid options: {}",
            s,
            LbMethod::all_variants()
                .iter()
                .map(LbMethod::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_ingest_args() {
        let args = CliArgs::parse_from(["adcgraph", "ingest", "ns.conf"]);
        match args.command {
            Commands::Ingest(ingest_args) => {
                assert_eq!(ingest_args.input, PathBuf::from("ns.conf"));
                assert_eq!(ingest_args.format, OutputFormatArg::Human);
                assert!(ingest_args.output.is_none());
                assert!(!ingest_args.strict);
                assert!(ingest_args.default_lb_method.is_none());
                assert!(!ingest_args.reads_stdin());
            }
            _ => panic!("Expected Ingest command"),
        }
    }

    #[test]
    fn test_ingest_with_options() {
        let args = CliArgs::parse_from([
            "adcgraph",
            "ingest",
            "-",
            "--format",
            "json",
            "--strict",
            "--default-lb-method",
            "roundrobin",
        ]);
        match args.command {
            Commands::Ingest(ingest_args) => {
                assert!(ingest_args.reads_stdin());
                assert_eq!(ingest_args.format, OutputFormatArg::Json);
                assert!(ingest_args.strict);
                assert_eq!(ingest_args.default_lb_method, Some(LbMethod::RoundRobin));
            }
            _ => panic!("Expected Ingest command"),
        }
    }

    #[test]
    fn test_invalid_lb_method() {
        let result =
            CliArgs::try_parse_from(["adcgraph", "ingest", "ns.conf", "--default-lb-method", "fastest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["adcgraph", "config", "--log-level", "debug"]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));

        let result = CliArgs::try_parse_from(["adcgraph", "-v", "-q", "config"]);
        assert!(result.is_err());
    }
}
