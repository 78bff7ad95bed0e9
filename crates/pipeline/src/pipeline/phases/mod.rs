// Ingestion runs in two passes: the scan applies declarations and
// immediate bindings line by line and queues vserver bindings; the resolve
// pass applies the queue once every service group is complete.

#[path = "01_scan.rs"]
pub mod scan;
#[path = "02_resolve.rs"]
pub mod resolve;
