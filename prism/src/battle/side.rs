use std::sync::Arc;

use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use prism_data::{
    DataStore,
    Id,
    MoveData,
};

use crate::{
    battle::{
        Combatant,
        FieldEffects,
        SideData,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
};

/// Move templates loaded for a battle, shared by every combatant that learns them.
#[derive(Debug, Default)]
pub struct MoveCache {
    moves: HashMap<Id, Arc<MoveData>>,
}

impl MoveCache {
    pub fn new() -> Self {
        Self {
            moves: HashMap::new(),
        }
    }

    /// Looks up a move by name, loading it from the data store on first use.
    pub fn get(&mut self, name: &str, data: &dyn DataStore) -> Result<Arc<MoveData>> {
        let id = Id::from(name);
        if let Some(move_data) = self.moves.get(&id) {
            return Ok(move_data.clone());
        }
        let move_data = data
            .get_move(&id)?
            .wrap_not_found_error(format_args!("move {name}"))?;
        let move_data = Arc::new(move_data);
        self.moves.insert(id, move_data.clone());
        Ok(move_data)
    }
}

/// A single side of a battle.
///
/// A side owns its whole team. Exactly one team member is active at a time.
#[derive(Debug)]
pub struct Side {
    pub name: String,
    pub index: usize,
    pub(crate) team: Vec<Combatant>,
    /// Team index of the active combatant. Always in range of `team`.
    pub(crate) active: usize,
    /// Effects placed on this side of the field.
    pub effects: FieldEffects,
}

impl Side {
    /// Creates a new [`Side`] from [`SideData`], loading species and moves from the data store.
    pub fn new(
        data: SideData,
        index: usize,
        store: &dyn DataStore,
        moves: &mut MoveCache,
    ) -> Result<Self> {
        let team = data
            .team
            .members
            .iter()
            .map(|mon| {
                let species = store
                    .get_species(&Id::from(mon.species.as_str()))?
                    .wrap_not_found_error(format_args!("species {}", mon.species))?;
                let learned = mon
                    .moves
                    .iter()
                    .map(|name| moves.get(name, store))
                    .collect::<Result<Vec<_>>>()?;
                Combatant::new(&species, mon, learned)
                    .wrap_error_with_format(format_args!("failed to create {}", mon.display_name()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: data.name,
            index,
            team,
            active: 0,
            effects: FieldEffects::new(),
        })
    }

    pub fn team(&self) -> &[Combatant] {
        &self.team
    }

    /// Mutable access to team members. The team itself cannot grow or shrink.
    pub fn team_mut(&mut self) -> &mut [Combatant] {
        &mut self.team
    }

    /// Team index of the active combatant.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes the team member at the given index active.
    pub fn set_active(&mut self, index: usize) -> Result<()> {
        if index >= self.team.len() {
            return Err(general_error(format!(
                "{} has no team member {index}",
                self.name
            )));
        }
        self.active = index;
        Ok(())
    }

    pub fn active(&self) -> &Combatant {
        &self.team[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Combatant {
        &mut self.team[self.active]
    }

    /// Checks if the team member at the given index can be switched in.
    pub fn can_switch_to(&self, index: usize) -> bool {
        index != self.active && self.team.get(index).is_some_and(|mon| !mon.is_fainted())
    }

    /// The first team member that can replace a fainted active combatant.
    pub fn next_replacement(&self) -> Option<usize> {
        (0..self.team.len()).find(|i| self.can_switch_to(*i))
    }

    /// Checks if every team member has fainted.
    pub fn is_defeated(&self) -> bool {
        self.team.iter().all(|mon| mon.is_fainted())
    }
}
