//! # fileio_fs
//!
//! A thin synchronous layer over the host file system for whole-file text
//! access.
//!
//! [`FileAccessor`] lists directories, reads files as UTF-8, writes text or
//! JSON, and removes files. Each method is a direct call into `std::fs`.
//! Failures are handed to an [`ErrorReporter`] and then returned to the caller
//! with the host error preserved as the source, so callers decide whether to
//! retry, report or abort.

use std::fmt::{Debug, Formatter};
use std::io;
use std::path::Path;
use std::sync::Arc;

mod config;
mod error;
mod list;
pub mod log;
mod payload;
mod read;
mod remove;
mod report;
#[cfg(all(test, unix))]
mod test_utils;
mod write;

pub use config::Config;
pub use error::{Error, ErrorKind, Operation, Result};
pub use payload::Payload;
pub use report::{ErrorReporter, TracingReporter};

/// Stateless façade over the host's directory listing, read, write and
/// delete primitives.
#[derive(Clone)]
pub struct FileAccessor {
    config: Config,
    reporter: Arc<dyn ErrorReporter>,
}

impl Default for FileAccessor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Debug for FileAccessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAccessor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FileAccessor {
    pub fn new(config: Config) -> Self {
        Self { config, reporter: Arc::new(TracingReporter) }
    }

    /// Replaces the hook that observes failures before they are returned.
    pub fn reporter(mut self, reporter: impl ErrorReporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn fail<T>(&self, error: Error) -> Result<T> {
        if self.config.report_failures {
            self.reporter.report(&error);
        }
        Err(error)
    }

    fn check<T>(&self, operation: Operation, path: &Path, result: io::Result<T>) -> Result<T> {
        result.or_else(|source| self.fail(Error::io(operation, path, source)))
    }
}
