use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A passive trait held by a combatant, checked while moves execute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum Passive {
    /// Opposing moves cost an extra PP.
    #[string = "Pressure"]
    Pressure,
    /// Cannot be infatuated.
    #[string = "Oblivious"]
    Oblivious,
    /// Cannot be confused.
    #[string = "Own Tempo"]
    #[alias = "OwnTempo"]
    OwnTempo,
    /// Ground moves have no effect.
    #[string = "Levitate"]
    Levitate,
    /// Restores a third of max HP when switching out.
    #[string = "Regenerator"]
    Regenerator,
    /// Contact moves hurt the attacker.
    #[string = "Rough Skin"]
    #[alias = "RoughSkin"]
    RoughSkin,
    /// Powers up Water moves at low HP.
    #[string = "Torrent"]
    Torrent,
}
