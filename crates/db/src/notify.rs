//! Notification sink for human-readable operation notices.

/// Fire-and-forget sink for informational messages emitted by the
/// linkage services (currently only the unlink notice).
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
}

/// Default sink: routes notices into the `tracing` pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
