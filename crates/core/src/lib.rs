//! Shared types for the adcgraph ingestion engine.
//!
//! - [`model`]: servers, service groups, virtual servers and their bindings
//! - [`output`]: the report a finished run hands to its caller
//! - [`error`]: fatal and per-line failure conditions
//! - [`config`], [`logging`], [`progress`]: ambient plumbing shared by the
//!   pipeline and the CLI

#[macro_use]
mod vendor_enum_macro;

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod progress;

pub use config::{AdcGraphConfig, ConfigError};
pub use error::{ExtractError, IngestError};
pub use logging::{init_default, init_from_env, init_logging, LoggingConfig};
pub use model::{
    CertKeyBinding, CommandKind, LbMethod, MonitorBinding, Port, Server, ServerAddress,
    ServiceGroup, ServiceType, Vip,
};
pub use output::{Diagnostics, IngestReport, IngestStatus, IngestWarning, MalformedCommand};
pub use progress::{IngestEvent, LoggingHandler, NoOpHandler, ProgressHandler};
