use anyhow::{
    Error,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    EffectCategory,
    MoveTarget,
    Type,
};

/// Data about a particular move.
///
/// Move data is an immutable template shared by every combatant that learns the move. The
/// remaining PP of a learned move lives on the combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    pub primary_type: Type,
    /// Base accuracy.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Max PP.
    pub pp: u8,
    /// Priority tier. Higher priority moves go first.
    #[serde(default)]
    pub priority: i8,
    /// Who or what the move targets.
    #[serde(default)]
    pub target: MoveTarget,
    /// Extra critical hit stages.
    #[serde(default)]
    pub crit_ratio: u8,
    /// Does the move make contact?
    #[serde(default)]
    pub contact: bool,
    /// Effects, applied in category order.
    #[serde(default)]
    pub effects: Vec<EffectCategory>,
}

impl MoveData {
    /// Base power of the move's damage effect, if it deals damage.
    pub fn power(&self) -> Option<u32> {
        self.effects.iter().find_map(|effect| match effect {
            EffectCategory::Damage { power, .. } => Some(*power),
            _ => None,
        })
    }

    /// Effects sorted into resolution order.
    pub fn effects_in_resolution_order(&self) -> Vec<&EffectCategory> {
        let mut effects = self.effects.iter().collect::<Vec<_>>();
        effects.sort_by_key(|effect| effect.resolution_order());
        effects
    }

    /// Validates the move data.
    pub fn validate(&self) -> Result<()> {
        if self.pp == 0 {
            return Err(Error::msg(format!("{} has no PP", self.name)));
        }
        if let Accuracy::Chance(chance) = self.accuracy {
            if chance > 100 {
                return Err(Error::msg(format!(
                    "{} has accuracy above 100",
                    self.name
                )));
            }
        }
        for effect in &self.effects {
            match effect {
                EffectCategory::InflictStatus { chance, .. }
                | EffectCategory::ApplyBoost { chance, .. }
                    if *chance > 100 =>
                {
                    return Err(Error::msg(format!(
                        "{} has an effect chance above 100",
                        self.name
                    )));
                }
                EffectCategory::ApplyBoost { amount, .. } if !(-6..=6).contains(amount) => {
                    return Err(Error::msg(format!(
                        "{} has a boost outside of [-6, 6]",
                        self.name
                    )));
                }
                _ => (),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod move_data_test {
    use crate::{
        Accuracy,
        EffectCategory,
        MoveData,
        MoveTarget,
        Type,
    };

    fn flamethrower() -> MoveData {
        serde_json::from_str(
            r#"{
                "name": "Flamethrower",
                "primary_type": "Fire",
                "accuracy": 100,
                "pp": 15,
                "effects": [
                    {
                        "category": "inflict_status",
                        "chance": 10,
                        "statuses": ["brn"]
                    },
                    {
                        "category": "damage",
                        "power": 90,
                        "offensive_stat": "spa",
                        "defensive_stat": "spd"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_with_defaults() {
        let move_data = flamethrower();
        assert_eq!(move_data.primary_type, Type::Fire);
        assert_eq!(move_data.accuracy, Accuracy::Chance(100));
        assert_eq!(move_data.priority, 0);
        assert_eq!(move_data.target, MoveTarget::Opponent);
        assert_eq!(move_data.crit_ratio, 0);
        assert!(!move_data.contact);
        assert_eq!(move_data.power(), Some(90));
    }

    #[test]
    fn sorts_effects_into_resolution_order() {
        let move_data = flamethrower();
        let effects = move_data.effects_in_resolution_order();
        assert!(matches!(effects[0], EffectCategory::Damage { .. }));
        assert!(matches!(effects[1], EffectCategory::InflictStatus { .. }));
    }

    #[test]
    fn validates_move() {
        let mut move_data = flamethrower();
        assert!(move_data.validate().is_ok());
        move_data.pp = 0;
        assert_eq!(
            move_data.validate().unwrap_err().to_string(),
            "Flamethrower has no PP"
        );
    }

    #[test]
    fn rejects_out_of_range_boosts() {
        let move_data: MoveData = serde_json::from_str(
            r#"{
                "name": "Bad Dance",
                "primary_type": "Normal",
                "pp": 5,
                "target": "User",
                "effects": [
                    {
                        "category": "apply_boost",
                        "boost": "atk",
                        "amount": 8,
                        "affects": "user"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            move_data.validate().unwrap_err().to_string(),
            "Bad Dance has a boost outside of [-6, 6]"
        );
    }
}
