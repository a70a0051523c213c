use std::path::PathBuf;
use serde::Deserialize;

/// The configuration for a full sweep run
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    pub simulator: PathBuf,
    pub trace: PathBuf,
    pub start_size: u64,
    pub end_size: u64,
    pub policies: Vec<String>,
    pub output: PathBuf,
    #[serde(default = "OutputMode::default")]
    pub mode: OutputMode,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// What to do with a pre-existing output file - truncate, or append. Defaults to truncate.
///
/// Appending to a table left by an earlier run writes a second header line and restarts the size
/// column from start_size, which plotting tools will not accept as one table.
#[derive(Debug, Copy, Clone, Deserialize)]
pub enum OutputMode {
    #[serde(alias = "truncate")]
    Truncate,
    #[serde(alias = "append")]
    Append,
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Truncate
    }
}

impl SweepConfig {
    /// Checks the size bounds and the policy list, before anything touches the filesystem
    pub fn validate(&self) -> Result<(), String> {
        if self.start_size == 0 {
            return Err("start_size must be at least 1".to_string());
        }
        if self.end_size <= self.start_size {
            return Err(format!("end_size ({}) must be greater than start_size ({})", self.end_size, self.start_size));
        }
        if self.policies.is_empty() {
            return Err("policies must name at least one policy".to_string());
        }
        Ok(())
    }
}
