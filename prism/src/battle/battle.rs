use std::sync::Arc;

use anyhow::Result;
use log::debug;
use prism_choice::Choice;
use prism_data::{
    Affects,
    DataStore,
    EffectCategory,
    MoveData,
    MoveTarget,
    Passive,
    TypeChart,
};
use prism_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        Action,
        ActionFailure,
        BattleEngineOptions,
        BattleOptions,
        Combatant,
        DamageParams,
        Decision,
        FieldEffects,
        MoveAction,
        MoveCache,
        Side,
        StatusOutcome,
        SwitchAction,
        TurnIntent,
        apply_status,
        end_of_turn_tick,
        field_effect_end_message,
        is_immune,
        pre_check,
        recoil_damage,
        resolve_damage,
        rolls_hit,
        speed_sort,
        status_applied_message,
    },
    error::{
        WrapResultError,
        protocol_error,
    },
    log::NarrationLog,
};

/// The phase of a turn.
///
/// Each call to [`Battle::advance`] that has no narration left to display performs the work of the
/// current phase and moves to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingDecisions,
    DeterminingOrder,
    FirstPreCheck,
    FirstExecute,
    InterimFaintCheck,
    SecondPreCheck,
    SecondExecute,
    EndOfTurnTick,
    TurnComplete,
    BattleOver,
}

fn hp_message(mon: &Combatant) -> String {
    format!("{} has {}/{} HP!", mon.name, mon.hp(), mon.max_hp())
}

/// Splits the two sides into the given side and its opponent.
fn split_sides(sides: &mut [Side; 2], side: usize) -> (&mut Side, &mut Side) {
    let [first, second] = sides;
    if side == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

/// A battle between two sides, each with one active combatant.
///
/// The battle is step-driven: the host submits one [`Decision`] per side, then repeatedly calls
/// [`Battle::advance`] to display narration and move the turn forward.
pub struct Battle {
    sides: [Side; 2],
    field: FieldEffects,
    type_chart: TypeChart,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    engine_options: BattleEngineOptions,
    log: NarrationLog,
    phase: TurnPhase,
    turn: u32,
    intents: [Option<TurnIntent>; 2],
    actions: Vec<Action>,
    actor_can_act: bool,
    faint_announced: [bool; 2],
    winning_side: Option<usize>,
}

// Construction and initialization logic.
impl Battle {
    /// Creates a new battle, loading every team member from the data store.
    pub fn new(
        options: BattleOptions,
        data: &dyn DataStore,
        engine_options: BattleEngineOptions,
    ) -> Result<Self> {
        options.validate()?;
        let type_chart = data.get_type_chart()?;
        let prng = (engine_options.rng_factory)(options.seed);
        let mut moves = MoveCache::new();
        let side_1 = Side::new(options.side_1, 0, data, &mut moves)
            .wrap_error_with_message("failed to create side 1")?;
        let side_2 = Side::new(options.side_2, 1, data, &mut moves)
            .wrap_error_with_message("failed to create side 2")?;
        let mut battle = Self {
            sides: [side_1, side_2],
            field: FieldEffects::new(),
            type_chart,
            prng,
            engine_options,
            log: NarrationLog::new(),
            phase: TurnPhase::AwaitingDecisions,
            turn: 1,
            intents: [None, None],
            actions: Vec::new(),
            actor_can_act: false,
            faint_announced: [false, false],
            winning_side: None,
        };
        debug!("battle created with seed {}", battle.prng.initial_seed());
        for side in &battle.sides {
            battle
                .log
                .push(format!("{} sent out {}!", side.name, side.active().name));
        }
        Ok(battle)
    }
}

// Basic getters.
impl Battle {
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The current turn number, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_battle_over(&self) -> bool {
        self.phase == TurnPhase::BattleOver
    }

    /// The side that won, if the battle is over and did not end in a draw.
    pub fn winning_side(&self) -> Option<usize> {
        self.winning_side
    }

    /// Checks if no turn is in progress and every message has been displayed.
    pub fn is_turn_complete(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::AwaitingDecisions | TurnPhase::BattleOver
        ) && !self.log.has_pending()
    }

    pub fn side(&self, side: usize) -> Result<&Side> {
        self.sides
            .get(side)
            .ok_or_else(|| protocol_error(format!("side {side} does not exist")))
    }

    /// Mutable access to a side, for hosts that restore or adjust state between turns.
    pub fn side_mut(&mut self, side: usize) -> Result<&mut Side> {
        self.sides
            .get_mut(side)
            .ok_or_else(|| protocol_error(format!("side {side} does not exist")))
    }

    /// The active combatant of a side.
    pub fn combatant(&self, side: usize) -> Result<&Combatant> {
        Ok(self.side(side)?.active())
    }

    /// Effects placed on the whole battlefield.
    pub fn field(&self) -> &FieldEffects {
        &self.field
    }

    /// The most recently displayed message.
    pub fn current_message(&self) -> Option<&str> {
        self.log.current()
    }

    /// Every message produced so far, displayed or not.
    pub fn all_narration(&self) -> impl Iterator<Item = &str> {
        self.log.events()
    }

    /// The whole battle so far as a newline-separated transcript.
    pub fn transcript(&self) -> String {
        self.log.transcript()
    }

    /// Messages produced since the last call, displayed or not.
    pub fn new_narration(&mut self) -> Vec<String> {
        self.log.read_out().map(|event| event.to_owned()).collect()
    }

    /// The battle's random number generator.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }
}

// Host protocol.
impl Battle {
    /// Submits a side's decision for the turn.
    ///
    /// Once both sides have decided, the turn can be advanced.
    pub fn submit_decision(&mut self, side: usize, decision: Decision) -> Result<()> {
        if self.phase == TurnPhase::BattleOver {
            return Err(protocol_error("the battle is over"));
        }
        if self.phase != TurnPhase::AwaitingDecisions {
            return Err(protocol_error(
                "decisions can only be submitted between turns",
            ));
        }
        let active = self.combatant(side)?;
        if self.intents[side].is_some() {
            return Err(protocol_error(format!(
                "side {side} already submitted a decision"
            )));
        }
        match decision {
            Decision::Move(slot) if slot >= active.moves.len() => {
                return Err(protocol_error(format!("invalid move slot {slot}")));
            }
            Decision::Switch(target) if !self.sides[side].can_switch_to(target) => {
                return Err(protocol_error(format!("invalid switch target {target}")));
            }
            _ => (),
        }
        debug!("side {side} decided {decision:?} for turn {}", self.turn);
        self.intents[side] = Some(TurnIntent {
            side,
            kind: decision,
        });
        if self.intents.iter().all(|intent| intent.is_some()) {
            self.transition(TurnPhase::DeterminingOrder);
        }
        Ok(())
    }

    /// Submits a side's decision in its text form, such as `move 0` or `switch 1`.
    pub fn submit_choice(&mut self, side: usize, input: &str) -> Result<()> {
        let choice = input
            .parse::<Choice>()
            .map_err(|error| protocol_error(format!("{error:#}")))?;
        self.submit_decision(side, Decision::from(choice))
    }

    /// Moves the battle forward by one step.
    ///
    /// Returns `true` if a pending message was displayed, and `false` if phase work was
    /// performed instead.
    pub fn advance(&mut self) -> Result<bool> {
        if self.log.display_next().is_some() {
            return Ok(true);
        }
        match self.phase {
            TurnPhase::AwaitingDecisions => {
                return Err(protocol_error(
                    "both sides must decide before the turn can advance",
                ));
            }
            TurnPhase::BattleOver => return Err(protocol_error("the battle is over")),
            TurnPhase::DeterminingOrder => {
                self.determine_order();
                self.transition(TurnPhase::FirstPreCheck);
            }
            TurnPhase::FirstPreCheck => {
                self.run_pre_check(0);
                self.transition(TurnPhase::FirstExecute);
            }
            TurnPhase::FirstExecute => {
                self.execute_action(0)?;
                self.transition(TurnPhase::InterimFaintCheck);
            }
            TurnPhase::InterimFaintCheck => {
                self.announce_faints();
                let second_actor_fainted = self
                    .actions
                    .get(1)
                    .is_some_and(|action| self.sides[action.side()].active().is_fainted());
                if second_actor_fainted {
                    debug!("skipping second action because its combatant fainted");
                    self.transition(TurnPhase::EndOfTurnTick);
                } else {
                    self.transition(TurnPhase::SecondPreCheck);
                }
            }
            TurnPhase::SecondPreCheck => {
                self.run_pre_check(1);
                self.transition(TurnPhase::SecondExecute);
            }
            TurnPhase::SecondExecute => {
                self.execute_action(1)?;
                self.transition(TurnPhase::EndOfTurnTick);
            }
            TurnPhase::EndOfTurnTick => {
                self.end_of_turn();
                self.transition(TurnPhase::TurnComplete);
            }
            TurnPhase::TurnComplete => {
                self.complete_turn();
            }
        }
        Ok(false)
    }

    /// Advances until the turn is complete and every message has been displayed.
    pub fn run_turn(&mut self) -> Result<()> {
        match self.phase {
            TurnPhase::BattleOver => return Err(protocol_error("the battle is over")),
            TurnPhase::AwaitingDecisions => {
                return Err(protocol_error(
                    "both sides must decide before the turn can advance",
                ));
            }
            _ => (),
        }
        while !self.is_turn_complete() {
            self.advance()?;
        }
        Ok(())
    }
}

// Turn resolution.
impl Battle {
    fn transition(&mut self, phase: TurnPhase) {
        debug!("turn {}: {:?} -> {:?}", self.turn, self.phase, phase);
        self.phase = phase;
    }

    fn determine_order(&mut self) {
        self.actions = self
            .intents
            .iter()
            .flatten()
            .map(|intent| {
                let active = self.sides[intent.side].active();
                let intent = match intent.kind {
                    Decision::Move(slot) if !active.can_use_move(slot) => TurnIntent {
                        side: intent.side,
                        kind: Decision::NoAction,
                    },
                    _ => *intent,
                };
                Action::new(intent, active)
            })
            .collect();
        speed_sort(
            &mut self.actions,
            self.prng.as_mut(),
            self.engine_options.speed_sort_tie_resolution,
        );
        debug!("action order for turn {}: {:?}", self.turn, self.actions);
    }

    fn run_pre_check(&mut self, index: usize) {
        self.actor_can_act = false;
        let Some(action) = self.actions.get(index) else {
            return;
        };
        let side = action.side();
        match action {
            Action::Switch(_) => self.actor_can_act = true,
            Action::NoAction { .. } => {
                let name = &self.sides[side].active().name;
                self.log.push(format!("{name} has no usable action!"));
            }
            Action::Move(_) => {
                let active = self.sides[side].active_mut();
                let check = pre_check(
                    active,
                    self.prng.as_mut(),
                    self.engine_options.randomize_base_damage,
                );
                self.log.push_extend(
                    check
                        .notices
                        .iter()
                        .map(|notice| notice.message(&active.name)),
                );
                if let Some(failure) = check.failure {
                    self.log.push(failure.message(&active.name));
                    if let ActionFailure::HurtInConfusion { .. } = failure {
                        self.log.push(hp_message(active));
                    }
                }
                self.actor_can_act = check.can_act();
            }
        }
    }

    fn execute_action(&mut self, index: usize) -> Result<()> {
        if !self.actor_can_act {
            return Ok(());
        }
        let Some(action) = self.actions.get(index).cloned() else {
            return Ok(());
        };
        match action {
            Action::Switch(action) => self.execute_switch(action),
            Action::Move(action) => self.execute_move(action)?,
            Action::NoAction { .. } => (),
        }
        Ok(())
    }

    fn execute_switch(&mut self, action: SwitchAction) {
        let side = &mut self.sides[action.side];
        let outgoing = side.active_mut();
        self.log.push(format!("{}, come back!", outgoing.name));
        outgoing.reset_on_switch_out();
        if outgoing.has_passive(Passive::Regenerator) {
            let restored = outgoing.heal(outgoing.max_hp() as u32 / 3);
            debug!("{} regenerated {restored} HP", outgoing.name);
        }
        side.active = action.target;
        self.faint_announced[action.side] = false;
        self.log.push(format!("Go! {}!", side.active().name));
    }

    fn execute_move(&mut self, action: MoveAction) -> Result<()> {
        let (user_side, target_side) = split_sides(&mut self.sides, action.side);
        let move_data: Arc<MoveData> = user_side.active().moves[action.slot].data.clone();
        let user = &mut user_side.team[user_side.active];
        let target = &mut target_side.team[target_side.active];

        self.log.push(format!("{} used {}!", user.name, move_data.name));
        let pp_cost = if !target.is_fainted() && target.has_passive(Passive::Pressure) {
            2
        } else {
            1
        };
        user.use_pp(action.slot, pp_cost)?;

        if move_data.target.targets_opponent() {
            if target.is_fainted() {
                self.log.push("But there was no target...");
                return Ok(());
            }
            if is_immune(target, move_data.primary_type, &self.type_chart) {
                self.log
                    .push(format!("It doesn't affect {}...", target.name));
                return Ok(());
            }
            if !rolls_hit(user, target, &move_data, self.prng.as_mut()) {
                self.log.push(format!("{}'s attack missed!", user.name));
                return Ok(());
            }
        }

        for effect in move_data.effects_in_resolution_order() {
            match effect {
                EffectCategory::Damage {
                    power,
                    offensive_stat,
                    defensive_stat,
                    recoil_percent,
                } => {
                    if target.is_fainted() || user.is_fainted() {
                        continue;
                    }
                    let params = DamageParams {
                        power: *power,
                        offensive_stat: *offensive_stat,
                        defensive_stat: *defensive_stat,
                    };
                    let outcome = resolve_damage(
                        user,
                        target,
                        &move_data,
                        params,
                        &self.type_chart,
                        self.prng.as_mut(),
                        self.engine_options.randomize_base_damage,
                    );
                    if outcome.immune {
                        self.log
                            .push(format!("It doesn't affect {}...", target.name));
                        continue;
                    }
                    let dealt = target.receive_damage(outcome.damage);
                    self.log.push(format!(
                        "Against {}, {}'s {} deals {dealt} damage!",
                        target.name, user.name, move_data.name
                    ));
                    if self.engine_options.narrate_hit_details {
                        if outcome.critical {
                            self.log.push("A critical hit!");
                        }
                        if outcome.type_modifier > 0 {
                            self.log.push("It's super effective!");
                        } else if outcome.type_modifier < 0 {
                            self.log.push("It's not very effective...");
                        }
                    }
                    self.log.push(hp_message(target));

                    if move_data.contact && target.has_passive(Passive::RoughSkin) {
                        user.receive_damage(user.max_hp() as u32 / 8);
                        self.log.push(format!(
                            "{} was hurt by {}'s Rough Skin!",
                            user.name, target.name
                        ));
                        self.log.push(hp_message(user));
                    }

                    let recoil = recoil_damage(dealt, *recoil_percent);
                    if recoil > 0 && !user.is_fainted() {
                        user.receive_damage(recoil);
                        self.log.push(format!("{} was damaged by recoil!", user.name));
                        self.log.push(hp_message(user));
                    }
                }
                EffectCategory::InflictStatus {
                    chance,
                    statuses,
                    affects,
                } => {
                    let recipient = if Self::affects_user(&move_data, *affects) {
                        &mut *user
                    } else {
                        &mut *target
                    };
                    if recipient.is_fainted() {
                        continue;
                    }
                    match apply_status(recipient, statuses, *chance, self.prng.as_mut()) {
                        StatusOutcome::Applied(kind) => {
                            if let Some(message) = status_applied_message(&recipient.name, kind) {
                                self.log.push(message);
                            }
                        }
                        StatusOutcome::AlreadyAfflicted => {
                            self.log
                                .push(format!("{} is already afflicted!", recipient.name));
                        }
                        StatusOutcome::AlreadyPresent(_) => self.log.push("But it failed!"),
                        StatusOutcome::Immune => {
                            if *chance >= 100 {
                                self.log
                                    .push(format!("It doesn't affect {}...", recipient.name));
                            }
                        }
                        StatusOutcome::Missed => (),
                    }
                }
                EffectCategory::ApplyBoost {
                    chance,
                    boost,
                    amount,
                    affects,
                } => {
                    let recipient = if Self::affects_user(&move_data, *affects) {
                        &mut *user
                    } else {
                        &mut *target
                    };
                    if recipient.is_fainted() {
                        continue;
                    }
                    if *chance < 100 && !rand_util::percent_roll(self.prng.as_mut(), *chance as u64)
                    {
                        continue;
                    }
                    let delta = recipient.apply_boost(*boost, *amount);
                    let stat = boost.display_name();
                    let message = match delta {
                        0 if *amount >= 0 => {
                            format!("{}'s {stat} won't go any higher!", recipient.name)
                        }
                        0 => format!("{}'s {stat} won't go any lower!", recipient.name),
                        delta if delta > 0 => {
                            format!("{}'s {stat} has been raised by {delta}!", recipient.name)
                        }
                        delta => format!(
                            "{}'s {stat} has been lowered by {}!",
                            recipient.name,
                            -delta
                        ),
                    };
                    self.log.push(message);
                }
                EffectCategory::Heal { percent } => {
                    if user.is_fainted() {
                        continue;
                    }
                    let amount = user.max_hp() as u32 * *percent as u32 / 100;
                    if user.heal(amount) == 0 {
                        self.log.push(format!("{}'s HP is already full!", user.name));
                        continue;
                    }
                    self.log.push(format!("{} had its HP restored!", user.name));
                    self.log.push(hp_message(user));
                }
                EffectCategory::FieldEffect {
                    effect,
                    message,
                    duration,
                } => {
                    let effects = match move_data.target {
                        MoveTarget::Battlefield => &mut self.field,
                        MoveTarget::User | MoveTarget::OwnSide => &mut user_side.effects,
                        MoveTarget::Opponent | MoveTarget::EnemySide => &mut target_side.effects,
                    };
                    if effects.add(*effect, *duration) {
                        self.log.push(message.clone());
                    } else {
                        self.log.push("It failed!");
                    }
                }
            }
        }
        Ok(())
    }

    /// Checks if an effect lands on the move's user rather than its opponent.
    fn affects_user(move_data: &MoveData, affects: Affects) -> bool {
        affects == Affects::User || !move_data.target.targets_opponent()
    }

    fn announce_faints(&mut self) {
        for (i, side) in self.sides.iter().enumerate() {
            let active = side.active();
            if active.is_fainted() && !self.faint_announced[i] {
                self.faint_announced[i] = true;
                self.log.push(format!("{} fainted!", active.name));
            }
        }
    }

    fn end_of_turn(&mut self) {
        self.announce_faints();

        let order = self
            .actions
            .iter()
            .map(|action| action.side())
            .collect::<Vec<_>>();
        for side in order {
            let active = self.sides[side].active_mut();
            if let Some(tick) = end_of_turn_tick(active) {
                self.log.push(tick.message(&active.name));
                self.log.push(hp_message(active));
            }
        }

        for kind in self.field.tick() {
            self.log.push(field_effect_end_message(kind));
        }
        for side in &mut self.sides {
            for kind in side.effects.tick() {
                self.log.push(field_effect_end_message(kind));
            }
        }

        self.announce_faints();
    }

    fn complete_turn(&mut self) {
        match (self.sides[0].is_defeated(), self.sides[1].is_defeated()) {
            (false, false) => (),
            (true, true) => {
                self.log.push("The battle ended in a draw!");
                self.transition(TurnPhase::BattleOver);
                return;
            }
            (side_1_defeated, _) => {
                let winner = if side_1_defeated { 1 } else { 0 };
                self.winning_side = Some(winner);
                self.log
                    .push(format!("{} won the battle!", self.sides[winner].name));
                self.transition(TurnPhase::BattleOver);
                return;
            }
        }

        for (i, side) in self.sides.iter_mut().enumerate() {
            if !side.active().is_fainted() {
                continue;
            }
            if let Some(replacement) = side.next_replacement() {
                side.active = replacement;
                self.faint_announced[i] = false;
                self.log
                    .push(format!("{} sent out {}!", side.name, side.active().name));
            }
        }

        self.intents = [None, None];
        self.actions.clear();
        self.turn += 1;
        self.transition(TurnPhase::AwaitingDecisions);
    }
}
