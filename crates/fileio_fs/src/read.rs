use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::{Operation, Result};

impl crate::FileAccessor {
    /// Reads a whole file as UTF-8 text.
    ///
    /// The file is sized before it is opened and at most that many bytes are
    /// read. If the file shrinks in between, the shorter content is returned;
    /// if it grows, the extra bytes are ignored. Invalid UTF-8 sequences are
    /// replaced with U+FFFD.
    pub fn read_utf8<T: AsRef<Path>>(&self, path: T) -> Result<String> {
        let path = path.as_ref();
        let bytes = self.check(Operation::Read, path, read_sized(path))?;

        debug!(path = %path.display(), bytes = bytes.len(), "Read file");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn read_sized(path: &Path) -> io::Result<Vec<u8>> {
    let size = std::fs::metadata(path)?.len();
    let file = File::open(path)?;

    let mut buffer = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    file.take(size).read_to_end(&mut buffer)?;
    Ok(buffer)
}
