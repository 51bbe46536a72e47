mod mon;
mod team;

pub use mon::{
    MAX_EV,
    MAX_IV,
    MAX_MOVES,
    MAX_TOTAL_EVS,
    MonData,
};
pub use team::{
    MAX_TEAM_SIZE,
    TeamData,
};
