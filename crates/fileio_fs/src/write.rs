use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::{Error, Operation, Payload, Result};

impl crate::FileAccessor {
    /// Writes text or a JSON value to a file, creating or truncating it.
    ///
    /// Returns `Ok(false)` without touching the file system when the payload
    /// renders to empty text, `Ok(true)` once the content is written.
    pub fn write<T: AsRef<Path>, U: Into<Payload>>(&self, path: T, payload: U) -> Result<bool> {
        let path = path.as_ref();
        let content = payload.into().into_text();

        if content.is_empty() {
            debug!(path = %path.display(), "Skipped write of empty content");
            return Ok(false);
        }

        self.check(Operation::Write, path, self.write_text(path, &content))?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(true)
    }

    /// Serializes `value` straight to compact JSON text and writes it like
    /// [`Self::write`]. No intermediate `serde_json::Value` is built, so field
    /// order follows the value's `Serialize` implementation.
    pub fn write_json<T: AsRef<Path>, V: Serialize + ?Sized>(
        &self,
        path: T,
        value: &V,
    ) -> Result<bool> {
        let path = path.as_ref();
        match serde_json::to_string(value) {
            Ok(content) => self.write(path, content),
            Err(source) => self.fail(Error::Serialize { path: path.to_path_buf(), source }),
        }
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.config.create_mode);
        }

        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }
}
