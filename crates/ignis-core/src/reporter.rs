use crate::error::Error;

/// Sink for categorized initializer failures.
///
/// The initializer reports every failure here before returning it, so hosts
/// can route failures to their own channel without wrapping each call site.
/// Injected at construction; tests substitute a recording fake.
pub trait ErrorReporter: Send + Sync {
    /// Record a failure that is about to be surfaced to the caller.
    fn report(&self, error: &Error);
}

/// Default reporter forwarding failures to the log facade.
#[derive(Debug, Clone, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &Error) {
        log::error!("initializer failure [{}]: {}", error.code(), error);
    }
}
