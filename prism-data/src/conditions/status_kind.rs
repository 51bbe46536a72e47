use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A status condition a move can inflict.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum StatusKind {
    #[string = "par"]
    #[alias = "Paralysis"]
    Paralysis,
    #[string = "brn"]
    #[alias = "Burn"]
    Burn,
    #[string = "frz"]
    #[alias = "Freeze"]
    Freeze,
    #[string = "slp"]
    #[alias = "Sleep"]
    Sleep,
    #[string = "psn"]
    #[alias = "Poison"]
    Poison,
    #[string = "tox"]
    #[alias = "Toxic"]
    Toxic,
    #[string = "confusion"]
    Confusion,
    #[string = "attract"]
    #[alias = "Infatuation"]
    Infatuation,
    #[string = "focusenergy"]
    #[alias = "Focus Energy"]
    FocusEnergy,
    #[string = "flinch"]
    Flinch,
}

impl StatusKind {
    /// Checks if the status occupies the single "greater" status slot.
    pub fn is_greater(&self) -> bool {
        match self {
            Self::Paralysis
            | Self::Burn
            | Self::Freeze
            | Self::Sleep
            | Self::Poison
            | Self::Toxic => true,
            Self::Confusion | Self::Infatuation | Self::FocusEnergy | Self::Flinch => false,
        }
    }
}
