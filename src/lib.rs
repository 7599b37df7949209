//! Pokemon Type Effectiveness Engine
//!
//! Given the one or two types of a defending Pokemon, computes how every
//! attacking type performs against it and groups the results into display
//! categories. Pure and deterministic: no I/O on the calculation path and no
//! shared mutable state.

// --- MODULE DECLARATIONS ---
pub mod cache;
pub mod combinator;
pub mod config;
pub mod defender;
pub mod errors;
pub mod roster;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Effectiveness, PokemonType, TYPE_COUNT};

// --- From this crate's modules (`src/`) ---
pub use cache::EffectivenessCache;
pub use combinator::{
    calculate_type_effectiveness, combine, combined_multiplier, EffectivenessEntry,
    TypeEffectivenessResult, TypeEngine,
};
pub use config::{DuplicateTypePolicy, EngineConfig};
pub use defender::{parse_type_name, DefenderKey, DefenderTypeSet};
pub use roster::{load_roster, parse_roster, PokemonRecord};

pub use errors::{TypeEngineError, TypeEngineResult};
