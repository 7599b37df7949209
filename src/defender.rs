use crate::config::DuplicateTypePolicy;
use crate::errors::{TypeEngineError, TypeEngineResult};
use crate::PokemonType;
use std::str::FromStr;

/// Canonical cache key for a defender: types sorted into canonical order.
pub type DefenderKey = (PokemonType, Option<PokemonType>);

/// The one or two types of a single defending Pokemon.
///
/// Only constructible through validation, so a value always holds at least
/// one type and never more than two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefenderTypeSet {
    primary: PokemonType,
    secondary: Option<PokemonType>,
}

impl DefenderTypeSet {
    /// Validate a type list using the default duplicate policy.
    pub fn new(types: &[PokemonType]) -> TypeEngineResult<Self> {
        Self::with_policy(types, DuplicateTypePolicy::default())
    }

    pub fn with_policy(
        types: &[PokemonType],
        policy: DuplicateTypePolicy,
    ) -> TypeEngineResult<Self> {
        match *types {
            [] => {
                tracing::debug!("Rejected empty defender type list");
                Err(TypeEngineError::EmptyDefender)
            }
            [primary] => Ok(Self::single(primary)),
            [primary, secondary] if primary == secondary => match policy {
                DuplicateTypePolicy::Square => Ok(DefenderTypeSet {
                    primary,
                    secondary: Some(secondary),
                }),
                DuplicateTypePolicy::Collapse => Ok(Self::single(primary)),
                DuplicateTypePolicy::Reject => {
                    tracing::debug!(%primary, "Rejected duplicate defending type");
                    Err(TypeEngineError::DuplicateType(primary))
                }
            },
            [primary, secondary] => Ok(DefenderTypeSet {
                primary,
                secondary: Some(secondary),
            }),
            _ => {
                tracing::debug!(count = types.len(), "Rejected oversized defender type list");
                Err(TypeEngineError::TooManyTypes(types.len()))
            }
        }
    }

    /// Validate type names (case-insensitive) using the default duplicate policy.
    pub fn parse(names: &[&str]) -> TypeEngineResult<Self> {
        Self::parse_with_policy(names, DuplicateTypePolicy::default())
    }

    pub fn parse_with_policy(
        names: &[&str],
        policy: DuplicateTypePolicy,
    ) -> TypeEngineResult<Self> {
        let types = names
            .iter()
            .map(|name| parse_type_name(name))
            .collect::<TypeEngineResult<Vec<_>>>()?;
        Self::with_policy(&types, policy)
    }

    pub fn single(primary: PokemonType) -> Self {
        DefenderTypeSet {
            primary,
            secondary: None,
        }
    }

    pub fn primary(&self) -> PokemonType {
        self.primary
    }

    pub fn secondary(&self) -> Option<PokemonType> {
        self.secondary
    }

    /// The types in the order they were supplied.
    pub fn types(&self) -> Vec<PokemonType> {
        std::iter::once(self.primary).chain(self.secondary).collect()
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    /// Order-independent key; `[A, B]` and `[B, A]` map to the same value.
    pub fn cache_key(&self) -> DefenderKey {
        match self.secondary {
            Some(secondary) if secondary < self.primary => (secondary, Some(self.primary)),
            _ => (self.primary, self.secondary),
        }
    }
}

/// Parse one type name, ignoring surrounding whitespace and case.
pub fn parse_type_name(name: &str) -> TypeEngineResult<PokemonType> {
    let name = name.trim();
    PokemonType::from_str(name).map_err(|_| {
        tracing::debug!(name, "Rejected unknown type name");
        TypeEngineError::UnknownType(name.to_string())
    })
}
