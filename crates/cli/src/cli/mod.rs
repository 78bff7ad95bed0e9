pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, ConfigArgs, IngestArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
