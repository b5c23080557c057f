use std::fs::{self, Permissions};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::TempDir;

pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    fs::set_permissions(path, Permissions::from_mode(mode))
}

/// False when the current process bypasses permission bits, e.g. as root.
pub fn permissions_enforced() -> io::Result<bool> {
    let dir = TempDir::new()?;
    let probe = dir.path().join("probe");
    fs::write(&probe, "probe")?;
    set_mode(&probe, 0o000)?;
    Ok(fs::read(&probe).is_err())
}
