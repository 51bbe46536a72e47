use std::sync::Arc;

use anyhow::Result;
use log::trace;
use prism_data::{
    Boost,
    MoveData,
    Passive,
    SpeciesData,
    Stat,
    StatTable,
    StatusKind,
    Type,
};

use crate::{
    battle::{
        BoostTable,
        ConditionSet,
        MAX_BOOST,
        MIN_BOOST,
        MajorStatus,
        apply_stage,
        calculate_mon_stats,
    },
    error::general_error,
    teams::{
        MAX_MOVES,
        MonData,
    },
};

/// A move learned by a combatant, with its own PP counter.
#[derive(Debug, Clone)]
pub struct LearnedMove {
    pub data: Arc<MoveData>,
    pub pp: u8,
}

impl LearnedMove {
    pub fn new(data: Arc<MoveData>) -> Self {
        let pp = data.pp;
        Self { data, pp }
    }

    pub fn max_pp(&self) -> u8 {
        self.data.pp
    }
}

/// Which side of a hit a stat is read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRole {
    /// Read for the attacker. Negative boosts are ignored on a critical hit.
    Offensive,
    /// Read for the defender. Positive boosts are ignored on a critical hit.
    Defensive,
}

/// A single combatant in a battle.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub species: String,
    pub level: u8,
    pub types: Vec<Type>,
    pub passive: Option<Passive>,
    /// Unboosted stats, with nature applied.
    pub stats: StatTable,
    pub conditions: ConditionSet,
    pub moves: Vec<LearnedMove>,

    boosts: BoostTable,
    hp: u16,
    max_hp: u16,
    fainted: bool,
}

impl Combatant {
    /// Creates a new combatant at full HP.
    pub fn new(species: &SpeciesData, mon: &MonData, moves: Vec<Arc<MoveData>>) -> Result<Self> {
        let stats = calculate_mon_stats(&species.base_stats, mon)?;
        let max_hp = stats.hp;
        let mut combatant = Self {
            name: mon.display_name().to_owned(),
            species: species.name.clone(),
            level: mon.level,
            types: species.types(),
            passive: mon.passive.or_else(|| species.passives.first().copied()),
            stats,
            conditions: ConditionSet::default(),
            moves: Vec::new(),
            boosts: BoostTable::default(),
            hp: max_hp,
            max_hp,
            fainted: max_hp == 0,
        };
        for data in moves {
            combatant.learn_move(data)?;
        }
        Ok(combatant)
    }

    /// Learns a new move, with full PP.
    pub fn learn_move(&mut self, data: Arc<MoveData>) -> Result<()> {
        if self.moves.len() >= MAX_MOVES {
            return Err(general_error(format!(
                "{} cannot learn more than {MAX_MOVES} moves",
                self.name
            )));
        }
        self.moves.push(LearnedMove::new(data));
        Ok(())
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }

    pub fn boosts(&self) -> &BoostTable {
        &self.boosts
    }

    pub fn has_type(&self, typ: Type) -> bool {
        self.types.contains(&typ)
    }

    pub fn has_passive(&self, passive: Passive) -> bool {
        self.passive == Some(passive)
    }

    /// The effective value of a stat, with stages and paralysis applied.
    pub fn derived_stat(&self, stat: Stat) -> u32 {
        let boost = match Boost::try_from(stat) {
            Ok(boost) => boost,
            Err(_) => return self.max_hp as u32,
        };
        let value = apply_stage(self.stats.get(stat) as u32, self.boosts.get(boost));
        if stat == Stat::Spe && self.conditions.has_major(StatusKind::Paralysis) {
            value / 2
        } else {
            value
        }
    }

    /// The value of a stat as read by a critical hit.
    pub fn critical_stat(&self, stat: Stat, role: StatRole) -> u32 {
        let boost = match Boost::try_from(stat) {
            Ok(boost) => boost,
            Err(_) => return self.max_hp as u32,
        };
        let stage = self.boosts.get(boost);
        let stage = match role {
            StatRole::Offensive => stage.max(0),
            StatRole::Defensive => stage.min(0),
        };
        apply_stage(self.stats.get(stat) as u32, stage)
    }

    /// Effective speed, as used for turn order.
    pub fn speed(&self) -> u32 {
        self.derived_stat(Stat::Spe)
    }

    /// Applies a stage change, returning the number of stages actually applied.
    pub fn apply_boost(&mut self, boost: Boost, amount: i8) -> i8 {
        let delta = self.boosts.apply(boost, amount);
        self.check_invariants();
        delta
    }

    /// Deals damage to the combatant, returning the HP actually lost.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp as u32);
        self.hp -= lost as u16;
        if self.hp == 0 {
            self.fainted = true;
        }
        trace!("{} lost {lost} HP ({}/{})", self.name, self.hp, self.max_hp);
        self.check_invariants();
        lost
    }

    /// Restores HP, capped at max HP, returning the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.fainted {
            return 0;
        }
        let restored = amount.min((self.max_hp - self.hp) as u32);
        self.hp += restored as u16;
        self.check_invariants();
        restored
    }

    /// Spends PP on the move in the given slot, returning the PP actually spent.
    pub fn use_pp(&mut self, slot: usize, amount: u8) -> Result<u8> {
        let learned = self
            .moves
            .get_mut(slot)
            .ok_or_else(|| general_error(format!("{} has no move in slot {slot}", self.name)))?;
        let spent = amount.min(learned.pp);
        learned.pp -= spent;
        Ok(spent)
    }

    /// Checks if the move in the given slot exists and has PP left.
    pub fn can_use_move(&self, slot: usize) -> bool {
        self.moves.get(slot).is_some_and(|learned| learned.pp > 0)
    }

    /// Checks if any learned move has PP left.
    pub fn has_usable_move(&self) -> bool {
        self.moves.iter().any(|learned| learned.pp > 0)
    }

    /// Resets everything that does not survive leaving the field.
    pub fn reset_on_switch_out(&mut self) {
        self.boosts = BoostTable::default();
        self.conditions.clear_volatile();
        if let Some(MajorStatus::Toxic { counter }) = &mut self.conditions.major {
            *counter = 1;
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.hp <= self.max_hp, "{} has more HP than max", self.name);
        debug_assert_eq!(self.fainted, self.hp == 0, "{} fainted flag is wrong", self.name);
        debug_assert!(
            self.boosts
                .entries()
                .all(|(_, value)| (MIN_BOOST..=MAX_BOOST).contains(&value)),
            "{} has a boost out of range",
            self.name
        );
    }
}
