use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// An effect placed on the battlefield or on one side of it.
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
pub enum FieldEffectKind {
    #[string = "Sunny Day"]
    #[alias = "SunnyDay"]
    SunnyDay,
    #[string = "Rain Dance"]
    #[alias = "RainDance"]
    RainDance,
    #[string = "Stealth Rock"]
    #[alias = "StealthRock"]
    StealthRock,
    #[string = "Reflect"]
    Reflect,
    #[string = "Light Screen"]
    #[alias = "LightScreen"]
    LightScreen,
}
