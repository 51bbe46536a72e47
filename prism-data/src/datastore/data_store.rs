use anyhow::Result;

use crate::{
    Id,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all catalog data.
///
/// This trait can be implemented for different data sources. A battle receives one at
/// construction and reads species, moves and the type chart through it; it never reaches for
/// global tables.
pub trait DataStore: Send + Sync {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets a species by ID.
    fn get_species(&self, id: &Id) -> Result<Option<SpeciesData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &Id) -> Result<Option<MoveData>>;
}
