use adcgraph_cli::cli::commands::{CliArgs, Commands, ConfigArgs, IngestArgs};
use adcgraph_cli::cli::output::OutputFormatter;
use adcgraph_cli::{NAME, VERSION};
use adcgraph_core::logging::{init_logging, parse_level, LoggingConfig};
use adcgraph_core::{AdcGraphConfig, IngestStatus, LoggingHandler};
use adcgraph_pipeline::GraphBuilder;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing::{debug, error, info, warn, Level};

const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_DIAGNOSTICS: i32 = 2;

fn main() {
    let args = CliArgs::parse();

    let config = match AdcGraphConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };
    init_logging_from_args(&args, &config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Ingest(ingest_args) => handle_ingest(ingest_args, config),
        Commands::Config(config_args) => handle_config(config_args, &config),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &AdcGraphConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    init_logging(LoggingConfig {
        level,
        use_json: config.log_json,
        ..LoggingConfig::default()
    });
}

fn handle_ingest(args: &IngestArgs, mut config: AdcGraphConfig) -> i32 {
    if let Some(method) = &args.default_lb_method {
        config.default_lb_method = method.clone();
    }
    config.strict |= args.strict;

    if let Err(e) = config.validate() {
        error!("{}", e);
        return EXIT_FAILURE;
    }

    let lines = match read_input(args) {
        Ok(lines) => lines,
        Err(e) => {
            error!("{:#}", e);
            return EXIT_FAILURE;
        }
    };

    let builder = GraphBuilder::new(&config).with_progress_handler(Arc::new(LoggingHandler));
    let report = match builder.build(&lines) {
        Ok(report) => report,
        Err(e) => {
            error!(line = e.line_number(), "Ingestion aborted: {}", e);
            return EXIT_FAILURE;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    let rendered = match formatter.format(&report) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("{:#}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = write_output(args.output.as_deref(), &rendered) {
        error!("{:#}", e);
        return EXIT_FAILURE;
    }

    match report.status() {
        IngestStatus::Resolved => EXIT_OK,
        IngestStatus::ResolvedWithWarnings if config.strict => {
            warn!(
                diagnostics = report.diagnostics.len(),
                "Strict mode: graph has diagnostics"
            );
            EXIT_DIAGNOSTICS
        }
        IngestStatus::ResolvedWithWarnings => EXIT_OK,
    }
}

fn handle_config(args: &ConfigArgs, config: &AdcGraphConfig) -> i32 {
    if let Err(e) = config.validate() {
        warn!("{}", e);
    }

    match OutputFormatter::new(args.format.into()).format_config(config) {
        Ok(rendered) => {
            print_rendered(&rendered);
            EXIT_OK
        }
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

fn read_input(args: &IngestArgs) -> Result<Vec<String>> {
    let bytes = if args.reads_stdin() {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read configuration from stdin")?;
        buffer
    } else {
        fs::read(&args.input).with_context(|| {
            format!("Failed to read configuration from {}", args.input.display())
        })?
    };

    // Banners and comments may carry non-UTF-8 bytes; recognized commands are ASCII.
    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().map(str::to_string).collect())
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "Output written");
        }
        None => print_rendered(rendered),
    }
    Ok(())
}

fn print_rendered(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
}
