use std::fmt;

use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
}

impl Type {
    /// Every type, in chart order.
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < f32::EPSILON {
            Self::None
        } else if value < 0.5 + f32::EPSILON {
            Self::Weak
        } else if value < 1f32 + f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Weak => serializer.serialize_f32(f32::from(*self)),
            _ => serializer.serialize_u32(f32::from(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type. Missing entries are [`TypeEffectiveness::Normal`].
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The key here is the attacking type.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

/// Defensive profile of one type: the attacking types it is weak to, resists, and is immune to.
struct DefensiveProfile {
    weak_to: &'static [Type],
    resists: &'static [Type],
    immune_to: &'static [Type],
}

fn defensive_profile(defense: Type) -> DefensiveProfile {
    use Type::*;
    let (weak_to, resists, immune_to): (&[Type], &[Type], &[Type]) = match defense {
        Normal => (&[Fighting], &[], &[Ghost]),
        Fighting => (&[Psychic, Fairy, Flying], &[Rock, Bug, Dark], &[]),
        Flying => (&[Rock, Electric, Ice], &[Fighting, Bug, Grass], &[Ground]),
        Poison => (&[Ground, Psychic], &[Grass, Fighting, Poison, Fairy], &[]),
        Ground => (&[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
        Rock => (
            &[Fighting, Ground, Steel, Water, Grass],
            &[Normal, Flying, Poison, Fire],
            &[],
        ),
        Bug => (&[Flying, Rock, Fire], &[Fighting, Ground, Grass], &[]),
        Ghost => (&[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
        Steel => (
            &[Fighting, Ground, Fire],
            &[
                Normal, Flying, Rock, Bug, Steel, Grass, Psychic, Ice, Dragon, Fairy,
            ],
            &[Poison],
        ),
        Fire => (&[Ground, Rock, Water], &[Fire, Bug, Steel, Ice, Fairy], &[]),
        Water => (&[Grass, Electric], &[Water, Steel, Fire, Ice], &[]),
        Grass => (
            &[Flying, Poison, Bug, Fire, Ice],
            &[Ground, Water, Grass, Electric],
            &[],
        ),
        Electric => (&[Ground], &[Flying, Steel, Electric], &[]),
        Psychic => (&[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
        Ice => (&[Steel, Rock, Fire, Fighting], &[Ice], &[]),
        Dragon => (&[Dragon, Ice, Fairy], &[Fire, Water, Grass, Electric], &[]),
        Dark => (&[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
        Fairy => (&[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
    };
    DefensiveProfile {
        weak_to,
        resists,
        immune_to,
    }
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// The standard 18-type chart.
    pub fn standard() -> Self {
        let mut types = TypeTable::new();
        for defense in Type::ALL {
            let profile = defensive_profile(defense);
            for (attacks, effectiveness) in [
                (profile.weak_to, TypeEffectiveness::Strong),
                (profile.resists, TypeEffectiveness::Weak),
                (profile.immune_to, TypeEffectiveness::None),
            ] {
                for attack in attacks {
                    types
                        .entry(*attack)
                        .or_insert_with(HashMap::new)
                        .insert(defense, effectiveness);
                }
            }
        }
        Self::from_filled(types)
    }

    /// Effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attack: Type, defense: Type) -> TypeEffectiveness {
        self.types
            .get(&attack)
            .and_then(|row| row.get(&defense))
            .copied()
            .unwrap_or_default()
    }

    /// Checks if any of the defending types is immune to the attacking type.
    pub fn is_immune(&self, attack: Type, defense: &[Type]) -> bool {
        defense
            .iter()
            .any(|defense| self.effectiveness(attack, *defense) == TypeEffectiveness::None)
    }
}
