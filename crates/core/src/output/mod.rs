//! Result types handed to reporting collaborators once a run completes.

pub mod report;

pub use report::{Diagnostics, IngestReport, IngestStatus, IngestWarning, MalformedCommand};
