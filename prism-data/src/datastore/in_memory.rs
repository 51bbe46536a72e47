use anyhow::{
    Context,
    Result,
};
use hashbrown::HashMap;

use crate::{
    DataStore,
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

const SAMPLE_SPECIES: &str = include_str!("../../data/species.json");
const SAMPLE_MOVES: &str = include_str!("../../data/moves.json");

/// A [`DataStore`] held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDataStore {
    type_chart: TypeChart,
    species: HashMap<Id, SpeciesData>,
    moves: HashMap<Id, MoveData>,
}

impl InMemoryDataStore {
    /// Creates an empty data store over the given type chart.
    pub fn new(type_chart: TypeChart) -> Self {
        Self {
            type_chart,
            species: HashMap::new(),
            moves: HashMap::new(),
        }
    }

    /// Creates a data store with the standard type chart and the sample species and moves.
    pub fn sample() -> Result<Self> {
        let mut data = Self::new(TypeChart::standard());
        let species: Vec<SpeciesData> =
            serde_json::from_str(SAMPLE_SPECIES).context("failed to parse sample species")?;
        for species in species {
            data.add_species(species);
        }
        let moves: Vec<MoveData> =
            serde_json::from_str(SAMPLE_MOVES).context("failed to parse sample moves")?;
        for move_data in moves {
            data.add_move(move_data)?;
        }
        Ok(data)
    }

    /// Adds a species, keyed by the ID of its name.
    pub fn add_species(&mut self, species: SpeciesData) {
        self.species.insert(Id::from(species.name.as_str()), species);
    }

    /// Adds a move, keyed by the ID of its name.
    pub fn add_move(&mut self, move_data: MoveData) -> Result<()> {
        move_data
            .validate()
            .with_context(|| format!("invalid move {}", move_data.name))?;
        self.moves.insert(Id::from(move_data.name.as_str()), move_data);
        Ok(())
    }
}

impl DataStore for InMemoryDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }

    fn get_move(&self, id: &Id) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }
}
