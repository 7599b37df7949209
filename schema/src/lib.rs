// Pokemon Type Engine Schema - Shared type definitions
// This crate holds the closed enumerations and the static type chart that the
// engine crate builds on.

// Re-export the main types
pub use effectiveness::*;
pub use pokemon_types::*;

pub mod effectiveness;
pub mod pokemon_types;
