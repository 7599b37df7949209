use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Display bucket for a combined damage multiplier.
///
/// Variants are declared from weakest to strongest hit, so the derived `Ord`
/// sorts by multiplier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum Effectiveness {
    Immune,
    DoubleResist,
    Resist,
    Neutral,
    Weak,
    DoubleWeak,
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Effectiveness::Immune => "Immune",
            Effectiveness::DoubleResist => "Double Resist",
            Effectiveness::Resist => "Resist",
            Effectiveness::Neutral => "Neutral",
            Effectiveness::Weak => "Weak",
            Effectiveness::DoubleWeak => "Double Weak",
        };

        write!(f, "{}", display_name)
    }
}

impl Effectiveness {
    /// All categories, immune first.
    pub fn all() -> impl Iterator<Item = Effectiveness> {
        Effectiveness::iter()
    }

    /// Classify a combined multiplier.
    ///
    /// Only the six values a one- or two-factor product of chart entries can
    /// take are recognised; anything else returns `None`.
    pub fn from_multiplier(multiplier: f32) -> Option<Effectiveness> {
        if multiplier == 0.0 {
            Some(Effectiveness::Immune)
        } else if multiplier == 0.25 {
            Some(Effectiveness::DoubleResist)
        } else if multiplier == 0.5 {
            Some(Effectiveness::Resist)
        } else if multiplier == 1.0 {
            Some(Effectiveness::Neutral)
        } else if multiplier == 2.0 {
            Some(Effectiveness::Weak)
        } else if multiplier == 4.0 {
            Some(Effectiveness::DoubleWeak)
        } else {
            None
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::DoubleResist => 0.25,
            Effectiveness::Resist => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::Weak => 2.0,
            Effectiveness::DoubleWeak => 4.0,
        }
    }

    /// Short damage label for section headers, e.g. "4×".
    pub fn label(self) -> &'static str {
        match self {
            Effectiveness::Immune => "0×",
            Effectiveness::DoubleResist => "¼×",
            Effectiveness::Resist => "½×",
            Effectiveness::Neutral => "1×",
            Effectiveness::Weak => "2×",
            Effectiveness::DoubleWeak => "4×",
        }
    }

    /// True for `Weak` and `DoubleWeak`.
    pub fn is_weakness(self) -> bool {
        matches!(self, Effectiveness::Weak | Effectiveness::DoubleWeak)
    }

    /// True for `Resist` and `DoubleResist`. Immunity is reported separately.
    pub fn is_resistance(self) -> bool {
        matches!(self, Effectiveness::Resist | Effectiveness::DoubleResist)
    }
}
