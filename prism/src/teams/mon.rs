use anyhow::Result;
use prism_data::{
    Nature,
    Passive,
    Stat,
    StatTable,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::general_error;

/// Maximum number of moves a combatant can learn.
pub const MAX_MOVES: usize = 4;
/// Maximum individual value for a single stat.
pub const MAX_IV: u16 = 31;
/// Maximum effort value for a single stat.
pub const MAX_EV: u16 = 252;
/// Maximum effort values across all stats.
pub const MAX_TOTAL_EVS: u32 = 510;

fn default_level() -> u8 {
    50
}

/// Data about a specific combatant on a team.
///
/// Data here is fixed for the whole battle. Everything that changes mid-battle (HP, boosts,
/// conditions, PP) lives on the [`Combatant`][`crate::battle::Combatant`] built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonData {
    /// Nickname.
    ///
    /// If empty, the species name is used.
    #[serde(default)]
    pub name: String,
    /// Species name.
    pub species: String,
    /// Level, between 1 and 100.
    #[serde(default = "default_level")]
    pub level: u8,
    /// Nature.
    #[serde(default)]
    pub nature: Nature,
    /// Individual values, which boost stats.
    #[serde(default)]
    pub ivs: StatTable,
    /// Effort values, which boost stats.
    #[serde(default)]
    pub evs: StatTable,
    /// Moves, by name.
    pub moves: Vec<String>,
    /// Passive trait.
    ///
    /// If not given, the species' first passive is used.
    #[serde(default)]
    pub passive: Option<Passive>,
}

impl Default for MonData {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            level: default_level(),
            nature: Nature::default(),
            ivs: StatTable::default(),
            evs: StatTable::default(),
            moves: Vec::new(),
            passive: None,
        }
    }
}

impl MonData {
    /// The name shown in narration.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.species
        } else {
            &self.name
        }
    }

    /// Validates the data, independent of any catalog.
    pub fn validate(&self) -> Result<()> {
        let name = self.display_name();
        if self.species.is_empty() {
            return Err(general_error("species cannot be empty"));
        }
        if !(1..=100).contains(&self.level) {
            return Err(general_error(format!(
                "{name} has level {}, which is not in [1, 100]",
                self.level
            )));
        }
        if self.moves.is_empty() {
            return Err(general_error(format!("{name} has no moves")));
        }
        if self.moves.len() > MAX_MOVES {
            return Err(general_error(format!(
                "{name} has more than {MAX_MOVES} moves"
            )));
        }
        let mut total_evs = 0u32;
        for stat in [
            Stat::HP,
            Stat::Atk,
            Stat::Def,
            Stat::SpAtk,
            Stat::SpDef,
            Stat::Spe,
        ] {
            if self.ivs.get(stat) > MAX_IV {
                return Err(general_error(format!(
                    "{name} has {stat} IV above {MAX_IV}"
                )));
            }
            if self.evs.get(stat) > MAX_EV {
                return Err(general_error(format!(
                    "{name} has {stat} EV above {MAX_EV}"
                )));
            }
            total_evs += self.evs.get(stat) as u32;
        }
        if total_evs > MAX_TOTAL_EVS {
            return Err(general_error(format!(
                "{name} has more than {MAX_TOTAL_EVS} total EVs"
            )));
        }
        Ok(())
    }
}
