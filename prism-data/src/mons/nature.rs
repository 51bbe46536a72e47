use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// A combatant's nature, which favors one stat and disfavors another.
///
/// Neutral natures favor and disfavor nothing.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Nature {
    #[string = "Hardy"]
    Hardy,
    #[string = "Lonely"]
    Lonely,
    #[string = "Adamant"]
    Adamant,
    #[string = "Naughty"]
    Naughty,
    #[string = "Brave"]
    Brave,
    #[string = "Bold"]
    Bold,
    #[string = "Docile"]
    Docile,
    #[string = "Impish"]
    Impish,
    #[string = "Lax"]
    Lax,
    #[string = "Relaxed"]
    Relaxed,
    #[string = "Modest"]
    Modest,
    #[string = "Mild"]
    Mild,
    #[string = "Bashful"]
    Bashful,
    #[string = "Rash"]
    Rash,
    #[string = "Quiet"]
    Quiet,
    #[string = "Calm"]
    Calm,
    #[string = "Gentle"]
    Gentle,
    #[string = "Careful"]
    Careful,
    #[string = "Quirky"]
    Quirky,
    #[string = "Sassy"]
    Sassy,
    #[string = "Timid"]
    Timid,
    #[string = "Hasty"]
    Hasty,
    #[string = "Jolly"]
    Jolly,
    #[string = "Naive"]
    Naive,
    #[string = "Serious"]
    #[default]
    Serious,
}

impl Nature {
    fn pair(&self) -> Option<(Stat, Stat)> {
        match self {
            Self::Hardy | Self::Docile | Self::Bashful | Self::Quirky | Self::Serious => None,
            Self::Lonely => Some((Stat::Atk, Stat::Def)),
            Self::Brave => Some((Stat::Atk, Stat::Spe)),
            Self::Adamant => Some((Stat::Atk, Stat::SpAtk)),
            Self::Naughty => Some((Stat::Atk, Stat::SpDef)),
            Self::Bold => Some((Stat::Def, Stat::Atk)),
            Self::Relaxed => Some((Stat::Def, Stat::Spe)),
            Self::Impish => Some((Stat::Def, Stat::SpAtk)),
            Self::Lax => Some((Stat::Def, Stat::SpDef)),
            Self::Timid => Some((Stat::Spe, Stat::Atk)),
            Self::Hasty => Some((Stat::Spe, Stat::Def)),
            Self::Jolly => Some((Stat::Spe, Stat::SpAtk)),
            Self::Naive => Some((Stat::Spe, Stat::SpDef)),
            Self::Modest => Some((Stat::SpAtk, Stat::Atk)),
            Self::Mild => Some((Stat::SpAtk, Stat::Def)),
            Self::Quiet => Some((Stat::SpAtk, Stat::Spe)),
            Self::Rash => Some((Stat::SpAtk, Stat::SpDef)),
            Self::Calm => Some((Stat::SpDef, Stat::Atk)),
            Self::Gentle => Some((Stat::SpDef, Stat::Def)),
            Self::Sassy => Some((Stat::SpDef, Stat::Spe)),
            Self::Careful => Some((Stat::SpDef, Stat::SpAtk)),
        }
    }

    /// The stat raised by the nature.
    pub fn favored(&self) -> Option<Stat> {
        self.pair().map(|(favored, _)| favored)
    }

    /// The stat lowered by the nature.
    pub fn disfavored(&self) -> Option<Stat> {
        self.pair().map(|(_, disfavored)| disfavored)
    }
}
