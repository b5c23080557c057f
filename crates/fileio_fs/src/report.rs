use tracing::error;

use crate::Error;

/// Observes failures before they are returned to the caller.
///
/// Reporting is for observability only; it cannot alter or swallow the error.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &Error);
}

impl<F> ErrorReporter for F
where
    F: Fn(&Error) + Send + Sync,
{
    fn report(&self, error: &Error) {
        self(error)
    }
}

/// Default reporter, logs each failure as a `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &Error) {
        error!(
            path = %error.path().display(),
            operation = ?error.operation(),
            kind = ?error.kind(),
            "{error}"
        );
    }
}
