use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; all events share the `receipts` target
/// so they can be filtered with `RUST_LOG=receipts=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "receipts", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "receipts", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "receipts", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "receipts", "{}", message);
    }
}
