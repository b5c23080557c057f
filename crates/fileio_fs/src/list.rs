use std::io;
use std::path::Path;

use tracing::debug;

use crate::{Operation, Result};

impl crate::FileAccessor {
    /// Lists the names of the entries in a directory, in the order the host
    /// returns them.
    pub fn list_dir<T: AsRef<Path>>(&self, path: T) -> Result<Vec<String>> {
        let path = path.as_ref();
        let names = self.check(Operation::ListDir, path, entry_names(path))?;

        debug!(path = %path.display(), entries = names.len(), "Listed directory");
        Ok(names)
    }
}

fn entry_names(path: &Path) -> io::Result<Vec<String>> {
    std::fs::read_dir(path)?
        .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
        .collect()
}
