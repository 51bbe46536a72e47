use anyhow::Result;
use prism::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    RandomizeBaseDamage,
    SideData,
    SpeedSortTieResolution,
    TeamData,
    data::DataStore,
};

use crate::ControlledRandomNumberGenerator;

/// Parses a team from its JSON form.
pub fn team_from_json(json: &str) -> Result<TeamData> {
    Ok(serde_json::from_str(json)?)
}

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    controlled_rng: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`].
    pub fn new() -> Self {
        Self {
            options: BattleOptions {
                seed: None,
                side_1: SideData {
                    name: "Side 1".to_owned(),
                    team: TeamData::default(),
                },
                side_2: SideData {
                    name: "Side 2".to_owned(),
                    team: TeamData::default(),
                },
            },
            engine_options: BattleEngineOptions::default(),
            controlled_rng: false,
        }
    }

    /// Builds a new [`Battle`] from the battle builder.
    pub fn build(mut self, data: &dyn DataStore) -> Result<Battle> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        Battle::new(self.options, data, self.engine_options)
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_base_damage_randomization(mut self, randomize: RandomizeBaseDamage) -> Self {
        self.engine_options.randomize_base_damage = randomize;
        self
    }

    pub fn with_speed_sort_tie_resolution(
        mut self,
        tie_resolution: SpeedSortTieResolution,
    ) -> Self {
        self.engine_options.speed_sort_tie_resolution = tie_resolution;
        self
    }

    pub fn with_hit_details(mut self, narrate_hit_details: bool) -> Self {
        self.engine_options.narrate_hit_details = narrate_hit_details;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_side_names(mut self, side_1: &str, side_2: &str) -> Self {
        self.options.side_1.name = side_1.to_owned();
        self.options.side_2.name = side_2.to_owned();
        self
    }

    pub fn with_team_1(mut self, team: TeamData) -> Self {
        self.options.side_1.team = team;
        self
    }

    pub fn with_team_2(mut self, team: TeamData) -> Self {
        self.options.side_2.team = team;
        self
    }
}
