use anyhow::Result;
use prism_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    error::WrapResultError,
    teams::TeamData,
};

/// Battle engine option for how base damage should be randomized in the damage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Randomize the base damage.
    ///
    /// This is the default behavior.
    Randomize,
    /// Only use the maximum base damage value.
    Max,
    /// Only use the minimum base damage value.
    Min,
}

/// How the battle engine should resolve ties when sorting by speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedSortTieResolution {
    /// Resolves ties randomly by advancing RNG.
    Random,
    /// Do not resolve ties and keep the original order of tied elements.
    Keep,
    /// Reverse the original order of tied elements.
    Reverse,
}

/// Data about a single side of a battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideData {
    /// Side name, used in narration.
    pub name: String,
    pub team: TeamData,
}

/// Options for a single battle.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Seed for the battle's random number generator.
    ///
    /// The same seed and the same decisions replay the same battle.
    #[serde(default)]
    pub seed: Option<u64>,
    pub side_1: SideData,
    pub side_2: SideData,
}

impl BattleOptions {
    /// Validates the battle options.
    pub fn validate(&self) -> Result<()> {
        for side in [&self.side_1, &self.side_2] {
            side.team
                .validate()
                .wrap_error_with_format(format_args!("{} has an invalid team", side.name))?;
        }
        Ok(())
    }
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(RealPseudoRandomNumberGenerator::new(seed))
}

fn default_true() -> bool {
    true
}

fn default_randomize() -> RandomizeBaseDamage {
    RandomizeBaseDamage::Randomize
}

fn default_random() -> SpeedSortTieResolution {
    SpeedSortTieResolution::Random
}

/// Options that change how the battle engine itself behaves, which is not necessarily specific to
/// any individual battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,

    /// Describes how base damage should be randomized in the damage calculation.
    ///
    /// Pinning the roll is useful for tests against the damage calculator to discover the minimum
    /// and maximum damage values.
    #[serde(default = "default_randomize")]
    pub randomize_base_damage: RandomizeBaseDamage,

    /// Describes how ties should be resolved when sorting actions by speed.
    ///
    /// By default, speed ties are resolved randomly.
    #[serde(default = "default_random")]
    pub speed_sort_tie_resolution: SpeedSortTieResolution,

    /// Should critical hits and type effectiveness be narrated after each hit?
    #[serde(default = "default_true")]
    pub narrate_hit_details: bool,
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            rng_factory: default_rng_factory(),
            randomize_base_damage: default_randomize(),
            speed_sort_tie_resolution: default_random(),
            narrate_hit_details: default_true(),
        }
    }
}
