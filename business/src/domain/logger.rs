/// Logging port used by the receipt use cases.
///
/// Keeps the domain free of any concrete logging backend; see the `logger`
/// infrastructure crate for the `tracing` adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
