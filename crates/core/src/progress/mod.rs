//! Progress reporting for ingestion runs

mod handler;
mod logging;

pub use handler::{IngestEvent, NoOpHandler, ProgressHandler};
pub use logging::LoggingHandler;
