use crate::PokemonType;
use thiserror::Error;

/// Main error type for the type effectiveness engine
#[derive(Debug, Error)]
pub enum TypeEngineError {
    /// A defender needs at least one type
    #[error("Defender type list is empty")]
    EmptyDefender,

    /// A defender has at most two types
    #[error("Defender has {0} types, expected 1 or 2")]
    TooManyTypes(usize),

    /// Type name outside the eighteen known types
    #[error("Unknown type: {0:?}")]
    UnknownType(String),

    /// Same type given twice while duplicates are rejected
    #[error("Duplicate defending type: {0}")]
    DuplicateType(PokemonType),

    /// A combined multiplier matched none of the six categories.
    /// Only reachable if the chart holds a value outside {0, 0.5, 1, 2}.
    #[error("Inconsistent chart: {attacking} produced multiplier {multiplier}")]
    InconsistentChart {
        attacking: PokemonType,
        multiplier: f32,
    },

    /// Failed to read a config or roster file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse RON data
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Type alias for Results using TypeEngineError
pub type TypeEngineResult<T> = Result<T, TypeEngineError>;
