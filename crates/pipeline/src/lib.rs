//! Two-phase ingestion of load balancer configuration dumps.
//!
//! Lines are tokenized, classified by command prefix and applied to
//! per-run registries. `bind lb vserver` lines are queued and resolved only
//! after every line has been read, so a virtual server always receives the
//! final member list of the service group it binds.

pub mod classifier;
pub mod extractors;
pub mod layout;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod tokenizer;

pub use classifier::{LineClassifier, Route};
pub use pipeline::{ingest, GraphBuilder, IngestContext, PipelineState};
pub use registry::{Registries, Registry};
pub use resolver::{resolve, PendingBinding};
pub use tokenizer::tokenize;
