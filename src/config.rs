//! Engine configuration, loaded from RON.
//!
//! ```ron
//! (
//!     duplicate_types: Collapse,
//! )
//! ```

use crate::errors::TypeEngineResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do when a defender lists the same type twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateTypePolicy {
    /// Keep both entries; every chart factor is applied twice.
    #[default]
    Square,
    /// Treat the pair as a single-typed defender.
    Collapse,
    /// Fail validation with `TypeEngineError::DuplicateType`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub duplicate_types: DuplicateTypePolicy,
}

impl EngineConfig {
    pub fn from_ron_str(content: &str) -> TypeEngineResult<EngineConfig> {
        Ok(ron::from_str(content)?)
    }

    /// Load a config file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> TypeEngineResult<EngineConfig> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded engine config");
        Ok(config)
    }
}
