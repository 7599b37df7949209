use crate::combinator::{combine, TypeEffectivenessResult};
use crate::defender::{DefenderKey, DefenderTypeSet};
use crate::errors::TypeEngineResult;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Caller-owned memo of combined results, keyed by canonical defender typing.
///
/// Purely an optimisation: a cached result is identical to a fresh
/// [`combine`] call. Nothing in the engine holds one of these globally.
#[derive(Debug, Default)]
pub struct EffectivenessCache {
    entries: HashMap<DefenderKey, TypeEffectivenessResult>,
    hits: u64,
    misses: u64,
}

impl EffectivenessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        defender: &DefenderTypeSet,
    ) -> TypeEngineResult<&TypeEffectivenessResult> {
        let key = defender.cache_key();
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                tracing::trace!(?key, "Effectiveness cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::debug!(?key, "Effectiveness cache miss");
                Ok(entry.insert(combine(defender)?))
            }
        }
    }

    pub fn get(&self, defender: &DefenderTypeSet) -> Option<&TypeEffectivenessResult> {
        self.entries.get(&defender.cache_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
