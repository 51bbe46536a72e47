use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The target of a move.
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
pub enum MoveTarget {
    /// The opposing combatant.
    #[string = "Opponent"]
    #[default]
    Opponent,
    /// The user of the move.
    #[string = "User"]
    User,
    /// The whole battlefield.
    #[string = "Battlefield"]
    Battlefield,
    /// The user's side of the field.
    #[string = "OwnSide"]
    OwnSide,
    /// The opposing side of the field.
    #[string = "EnemySide"]
    EnemySide,
}

impl MoveTarget {
    /// Checks if the move is aimed at the opposing combatant, and so is subject to immunity and
    /// accuracy checks.
    pub fn targets_opponent(&self) -> bool {
        matches!(self, Self::Opponent)
    }
}
