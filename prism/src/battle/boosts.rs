use prism_data::Boost;
use serde::{
    Deserialize,
    Serialize,
};

/// Lowest and highest stage a boost can reach.
pub const MIN_BOOST: i8 = -6;
pub const MAX_BOOST: i8 = 6;

/// A full boost table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Returns the value for the given boost.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        }
    }

    /// Sets the value for the given boost.
    pub fn set(&mut self, boost: Boost, value: i8) {
        *self.get_mut(boost) = value;
    }

    /// Adds `amount` stages to the boost, clamped into `[MIN_BOOST, MAX_BOOST]`.
    ///
    /// Returns the number of stages actually applied.
    pub fn apply(&mut self, boost: Boost, amount: i8) -> i8 {
        let current = self.get_mut(boost);
        let next = current.saturating_add(amount).clamp(MIN_BOOST, MAX_BOOST);
        let delta = next - *current;
        *current = next;
        delta
    }

    /// Iterates over every boost and its value.
    pub fn entries(&self) -> impl Iterator<Item = (Boost, i8)> + '_ {
        [
            Boost::Atk,
            Boost::Def,
            Boost::SpAtk,
            Boost::SpDef,
            Boost::Spe,
            Boost::Accuracy,
            Boost::Evasion,
        ]
        .into_iter()
        .map(|boost| (boost, self.get(boost)))
    }
}

#[cfg(test)]
mod boost_table_test {
    use prism_data::Boost;

    use crate::battle::BoostTable;

    #[test]
    fn applies_and_clamps() {
        let mut boosts = BoostTable::default();
        assert_eq!(boosts.apply(Boost::Atk, 2), 2);
        assert_eq!(boosts.apply(Boost::Atk, 6), 4);
        assert_eq!(boosts.get(Boost::Atk), 6);
        assert_eq!(boosts.apply(Boost::Atk, 1), 0);
        assert_eq!(boosts.apply(Boost::Evasion, -12), -6);
        assert_eq!(boosts.apply(Boost::Evasion, -1), 0);
        assert_eq!(boosts.apply(Boost::Evasion, 3), 3);
        assert_eq!(boosts.get(Boost::Evasion), -3);
    }

    #[test]
    fn never_leaves_range() {
        let mut boosts = BoostTable::default();
        for amount in [6, 6, -12, -12, 127, -128, 3, -1] {
            boosts.apply(Boost::Spe, amount);
            assert!((-6..=6).contains(&boosts.get(Boost::Spe)));
        }
    }

    #[test]
    fn deserializes_partial_table() {
        let boosts: BoostTable = serde_json::from_str(r#"{"atk":1,"eva":-2}"#).unwrap();
        assert_eq!(boosts.get(Boost::Atk), 1);
        assert_eq!(boosts.get(Boost::Evasion), -2);
        assert!(boosts.entries().filter(|(_, value)| *value != 0).count() == 2);
    }
}
