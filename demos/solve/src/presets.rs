//! Per-file solver presets.
//!
//! A JSON object keyed by input file name; each value is a (partial)
//! `SolverConfig`, missing fields taking the config defaults:
//!
//! ```json
//! {
//!   "e.txt": { "min_scheduled_time": 1, "max_scheduled_time": 4, "rounding": "nearest" }
//! }
//! ```
//!
//! Files without an entry use the config built from the command-line flags.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use tl_core::SolverConfig;

#[derive(Debug, Default)]
pub struct Presets {
    by_file: HashMap<String, SolverConfig>,
}

impl Presets {
    /// Load and validate a presets file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading presets {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Like [`Presets::load`] but from an in-memory JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let by_file: HashMap<String, SolverConfig> =
            serde_json::from_str(json).context("parsing presets")?;
        Self::validated(by_file)
    }

    fn validated(by_file: HashMap<String, SolverConfig>) -> Result<Self> {
        for (name, config) in &by_file {
            config.validate().with_context(|| format!("preset {name:?}"))?;
        }
        Ok(Self { by_file })
    }

    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    /// The preset for `input`'s file name, or `fallback`.
    pub fn config_for<'a>(&'a self, input: &Path, fallback: &'a SolverConfig) -> &'a SolverConfig {
        input
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.by_file.get(name))
            .unwrap_or(fallback)
    }
}
