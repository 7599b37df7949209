//! Stored Pokemon records as they reach the engine.
//!
//! Records carry their types as free-form strings; [`PokemonRecord::defender_types`]
//! is where those strings are checked against the closed type set.

use crate::config::DuplicateTypePolicy;
use crate::defender::{parse_type_name, DefenderTypeSet};
use crate::errors::TypeEngineResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub primary_type: String,
    #[serde(default)]
    pub secondary_type: Option<String>,
}

impl PokemonRecord {
    pub fn new(name: &str, primary_type: &str, secondary_type: Option<&str>) -> Self {
        PokemonRecord {
            name: name.to_string(),
            primary_type: primary_type.to_string(),
            secondary_type: secondary_type.map(str::to_string),
        }
    }

    pub fn defender_types(&self) -> TypeEngineResult<DefenderTypeSet> {
        self.defender_types_with_policy(DuplicateTypePolicy::default())
    }

    pub fn defender_types_with_policy(
        &self,
        policy: DuplicateTypePolicy,
    ) -> TypeEngineResult<DefenderTypeSet> {
        let mut types = vec![parse_type_name(&self.primary_type)?];
        if let Some(secondary) = &self.secondary_type {
            types.push(parse_type_name(secondary)?);
        }
        DefenderTypeSet::with_policy(&types, policy)
    }
}

/// Parse a RON list of records, e.g.
/// `[(name: "Bulbasaur", primary_type: "Grass", secondary_type: Some("Poison"))]`.
pub fn parse_roster(content: &str) -> TypeEngineResult<Vec<PokemonRecord>> {
    Ok(ron::from_str(content)?)
}

/// Load a RON roster file.
pub fn load_roster(path: &Path) -> TypeEngineResult<Vec<PokemonRecord>> {
    let content = fs::read_to_string(path)?;
    let records = parse_roster(&content)?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded roster");
    Ok(records)
}
