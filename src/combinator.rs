//! Combined type effectiveness against a one- or two-typed defender.
//!
//! For every attacking type the chart factors for each defending type are
//! multiplied together, and the product is sorted into one of six
//! [`Effectiveness`] buckets for display.

use crate::config::EngineConfig;
use crate::defender::DefenderTypeSet;
use crate::errors::{TypeEngineError, TypeEngineResult};
use crate::{Effectiveness, PokemonType};
use serde::Serialize;

/// How one attacking type fares against a defender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivenessEntry {
    pub attacking_type: PokemonType,
    pub multiplier: f32,
    pub category: Effectiveness,
}

/// All eighteen attacking types, grouped by category.
///
/// Within each group entries keep canonical attacking-type order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeEffectivenessResult {
    pub immune: Vec<EffectivenessEntry>,
    pub double_resist: Vec<EffectivenessEntry>,
    pub resist: Vec<EffectivenessEntry>,
    pub neutral: Vec<EffectivenessEntry>,
    pub weak: Vec<EffectivenessEntry>,
    pub double_weak: Vec<EffectivenessEntry>,
}

impl TypeEffectivenessResult {
    pub fn group(&self, category: Effectiveness) -> &[EffectivenessEntry] {
        match category {
            Effectiveness::Immune => &self.immune,
            Effectiveness::DoubleResist => &self.double_resist,
            Effectiveness::Resist => &self.resist,
            Effectiveness::Neutral => &self.neutral,
            Effectiveness::Weak => &self.weak,
            Effectiveness::DoubleWeak => &self.double_weak,
        }
    }

    fn group_mut(&mut self, category: Effectiveness) -> &mut Vec<EffectivenessEntry> {
        match category {
            Effectiveness::Immune => &mut self.immune,
            Effectiveness::DoubleResist => &mut self.double_resist,
            Effectiveness::Resist => &mut self.resist,
            Effectiveness::Neutral => &mut self.neutral,
            Effectiveness::Weak => &mut self.weak,
            Effectiveness::DoubleWeak => &mut self.double_weak,
        }
    }

    /// Every entry, group by group from immune to double weak.
    pub fn entries(&self) -> impl Iterator<Item = &EffectivenessEntry> {
        Effectiveness::all().flat_map(move |category| self.group(category).iter())
    }

    pub fn len(&self) -> usize {
        Effectiveness::all()
            .map(|category| self.group(category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry_for(&self, attacking: PokemonType) -> Option<&EffectivenessEntry> {
        self.entries().find(|entry| entry.attacking_type == attacking)
    }

    pub fn multiplier_against(&self, attacking: PokemonType) -> Option<f32> {
        self.entry_for(attacking).map(|entry| entry.multiplier)
    }

    pub fn category_of(&self, attacking: PokemonType) -> Option<Effectiveness> {
        self.entry_for(attacking).map(|entry| entry.category)
    }

    /// Attacking types dealing 2× or more, strongest first.
    pub fn weaknesses(&self) -> Vec<PokemonType> {
        self.double_weak
            .iter()
            .chain(&self.weak)
            .map(|entry| entry.attacking_type)
            .collect()
    }

    /// Attacking types dealing ½× or ¼×, weakest hit first. Immunities are excluded.
    pub fn resistances(&self) -> Vec<PokemonType> {
        self.double_resist
            .iter()
            .chain(&self.resist)
            .map(|entry| entry.attacking_type)
            .collect()
    }

    pub fn immunities(&self) -> Vec<PokemonType> {
        self.immune.iter().map(|entry| entry.attacking_type).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Combined multiplier of one attacking type against a validated defender.
pub fn combined_multiplier(attacking: PokemonType, defender: &DefenderTypeSet) -> f32 {
    let primary = PokemonType::type_effectiveness(attacking, defender.primary());
    match defender.secondary() {
        Some(secondary) => primary * PokemonType::type_effectiveness(attacking, secondary),
        None => primary,
    }
}

/// Score every attacking type against `defender` and group the results.
pub fn combine(defender: &DefenderTypeSet) -> TypeEngineResult<TypeEffectivenessResult> {
    let mut result = TypeEffectivenessResult::default();

    for attacking in PokemonType::all() {
        let multiplier = combined_multiplier(attacking, defender);
        let category = Effectiveness::from_multiplier(multiplier).ok_or_else(|| {
            TypeEngineError::InconsistentChart {
                attacking,
                multiplier,
            }
        })?;
        result.group_mut(category).push(EffectivenessEntry {
            attacking_type: attacking,
            multiplier,
            category,
        });
    }

    tracing::trace!(
        defender = ?defender.types(),
        weaknesses = result.weak.len() + result.double_weak.len(),
        immunities = result.immune.len(),
        "Combined type effectiveness"
    );
    Ok(result)
}

/// Validate `types` with the default configuration and combine.
pub fn calculate_type_effectiveness(
    types: &[PokemonType],
) -> TypeEngineResult<TypeEffectivenessResult> {
    TypeEngine::default().calculate(types)
}

/// Entry point that applies an [`EngineConfig`] to validation.
#[derive(Debug, Clone, Default)]
pub struct TypeEngine {
    config: EngineConfig,
}

impl TypeEngine {
    pub fn new(config: EngineConfig) -> Self {
        TypeEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn defender(&self, types: &[PokemonType]) -> TypeEngineResult<DefenderTypeSet> {
        DefenderTypeSet::with_policy(types, self.config.duplicate_types)
    }

    pub fn calculate(&self, types: &[PokemonType]) -> TypeEngineResult<TypeEffectivenessResult> {
        combine(&self.defender(types)?)
    }

    /// Same as [`TypeEngine::calculate`] but takes type names, e.g. `["grass", "Poison"]`.
    pub fn calculate_names(&self, names: &[&str]) -> TypeEngineResult<TypeEffectivenessResult> {
        let defender = DefenderTypeSet::parse_with_policy(names, self.config.duplicate_types)?;
        combine(&defender)
    }
}
