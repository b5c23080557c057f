use derive_setters::Setters;
use serde::{Deserialize, Serialize};

// Owner read/write only
const DEFAULT_CREATE_MODE: u32 = 0o600;

#[derive(Debug, Clone, Serialize, Deserialize, Setters, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Permission bits requested when `write` creates a file (unix only)
    pub create_mode: u32,

    /// Whether failures are handed to the accessor's reporter before being
    /// returned
    pub report_failures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { create_mode: DEFAULT_CREATE_MODE, report_failures: true }
    }
}
