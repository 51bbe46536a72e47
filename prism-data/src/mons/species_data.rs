use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Passive,
    StatTable,
    Type,
};

/// Data about a particular species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Name of the species.
    pub name: String,
    /// Primary type.
    pub primary_type: Type,
    /// Secondary type, if any.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Passive traits the species may have. The first is used when a team member names none.
    #[serde(default)]
    pub passives: Vec<Passive>,
}

impl SpeciesData {
    /// The species' types, primary first.
    pub fn types(&self) -> Vec<Type> {
        let mut types = Vec::from([self.primary_type]);
        types.extend(self.secondary_type);
        types
    }
}
