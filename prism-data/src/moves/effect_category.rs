use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Boost,
    FieldEffectKind,
    Stat,
    StatusKind,
};

/// Who an effect lands on.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Affects {
    /// The move's target.
    #[string = "target"]
    #[default]
    Target,
    /// The move's user.
    #[string = "user"]
    User,
}

fn default_chance() -> u8 {
    100
}

/// One effect of a move.
///
/// A move carries an ordered list of these. Effects resolve in category order (see
/// [`EffectCategory::resolution_order`]), and list order breaks ties within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EffectCategory {
    /// Deals damage to the target.
    Damage {
        power: u32,
        offensive_stat: Stat,
        defensive_stat: Stat,
        /// Percentage of damage dealt that the user takes back.
        #[serde(default)]
        recoil_percent: u32,
    },
    /// Rolls to inflict one of the listed statuses.
    ///
    /// Candidates are tried in order; the first successful roll is the only one applied.
    InflictStatus {
        #[serde(default = "default_chance")]
        chance: u8,
        statuses: Vec<StatusKind>,
        #[serde(default)]
        affects: Affects,
    },
    /// Rolls to change a stat stage.
    ApplyBoost {
        #[serde(default = "default_chance")]
        chance: u8,
        boost: Boost,
        amount: i8,
        #[serde(default)]
        affects: Affects,
    },
    /// Restores a percentage of the user's max HP.
    Heal { percent: u16 },
    /// Places an effect on the field, as chosen by the move's target.
    FieldEffect {
        effect: FieldEffectKind,
        /// Narrated when the effect starts.
        message: String,
        /// Number of end-of-turn ticks the effect lasts. Unset lasts for the rest of the battle.
        #[serde(default)]
        duration: Option<u8>,
    },
}

impl EffectCategory {
    /// Position of the effect in a move's resolution sequence.
    ///
    /// Damage, then target status, self status, target boost, self boost, healing, and finally
    /// field effects.
    pub fn resolution_order(&self) -> u8 {
        match self {
            Self::Damage { .. } => 0,
            Self::InflictStatus {
                affects: Affects::Target,
                ..
            } => 1,
            Self::InflictStatus {
                affects: Affects::User,
                ..
            } => 2,
            Self::ApplyBoost {
                affects: Affects::Target,
                ..
            } => 3,
            Self::ApplyBoost {
                affects: Affects::User,
                ..
            } => 4,
            Self::Heal { .. } => 5,
            Self::FieldEffect { .. } => 6,
        }
    }
}
