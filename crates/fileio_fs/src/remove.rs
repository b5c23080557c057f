use std::path::Path;

use tracing::debug;

use crate::{Operation, Result};

impl crate::FileAccessor {
    pub fn remove<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        self.check(Operation::Remove, path, std::fs::remove_file(path))?;

        debug!(path = %path.display(), "Removed file");
        Ok(())
    }
}
