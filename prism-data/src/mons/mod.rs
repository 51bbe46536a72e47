mod nature;
mod passive;
mod species_data;
mod stat;
mod r#type;

pub use nature::Nature;
pub use passive::Passive;
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
