use log::debug;
use prism_data::{
    Passive,
    StatusKind,
    Type,
};
use prism_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::{
    Combatant,
    MAX_TOXIC_COUNTER,
    MajorStatus,
    RandomizeBaseDamage,
    confusion_self_damage,
};

/// Percent chance a frozen combatant stays frozen.
const FREEZE_FAIL_PERCENT: u64 = 20;
/// Percent chance a paralyzed combatant cannot move.
const PARALYSIS_FAIL_PERCENT: u64 = 25;
/// Percent chance an infatuated combatant cannot move.
const INFATUATION_FAIL_PERCENT: u64 = 50;
/// Percent chance a confused combatant hits itself.
const CONFUSION_FAIL_PERCENT: u64 = 33;

/// Something narrated during a pre-action check that does not stop the action by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusNotice {
    WokeUp,
    Thawed,
    InLove,
    Confused,
    SnappedOutOfConfusion,
}

impl StatusNotice {
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::WokeUp => format!("{name} woke up!"),
            Self::Thawed => format!("{name} thawed out!"),
            Self::InLove => format!("{name} is in love!"),
            Self::Confused => format!("{name} is confused!"),
            Self::SnappedOutOfConfusion => format!("{name} snapped out of its confusion!"),
        }
    }
}

/// Why a combatant could not act this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFailure {
    Asleep,
    Frozen,
    Paralyzed,
    Flinched,
    ImmobilizedByLove,
    /// The combatant hit itself for the given damage.
    HurtInConfusion { damage: u32 },
}

impl ActionFailure {
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::Asleep => format!("{name} is fast asleep."),
            Self::Frozen => format!("{name} is frozen solid!"),
            Self::Paralyzed => format!("{name} is paralyzed! It can't move!"),
            Self::Flinched => format!("{name} flinched and couldn't move!"),
            Self::ImmobilizedByLove => format!("{name} is immobilized by love!"),
            Self::HurtInConfusion { .. } => format!("{name} hurt itself in its confusion!"),
        }
    }
}

/// The result of checking whether a combatant can act.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreCheck {
    /// Narrated in order, before the failure.
    pub notices: Vec<StatusNotice>,
    pub failure: Option<ActionFailure>,
}

impl PreCheck {
    fn fail(mut self, failure: ActionFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn can_act(&self) -> bool {
        self.failure.is_none()
    }
}

/// Checks whether the combatant can act this turn.
///
/// Checks run in order and the first failure ends the check: the greater status, flinch,
/// infatuation, then confusion. Confusion self-damage is dealt here.
pub fn pre_check(
    combatant: &mut Combatant,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> PreCheck {
    let mut check = PreCheck::default();

    match &mut combatant.conditions.major {
        Some(MajorStatus::Sleep { turns }) => {
            *turns = turns.saturating_sub(1);
            if *turns > 0 {
                return check.fail(ActionFailure::Asleep);
            }
            combatant.conditions.major = None;
            check.notices.push(StatusNotice::WokeUp);
        }
        Some(MajorStatus::Freeze) => {
            if rand_util::percent_roll(prng, FREEZE_FAIL_PERCENT) {
                return check.fail(ActionFailure::Frozen);
            }
            combatant.conditions.major = None;
            check.notices.push(StatusNotice::Thawed);
        }
        Some(MajorStatus::Paralysis) => {
            if rand_util::percent_roll(prng, PARALYSIS_FAIL_PERCENT) {
                return check.fail(ActionFailure::Paralyzed);
            }
        }
        _ => (),
    }

    if combatant.conditions.flinch {
        return check.fail(ActionFailure::Flinched);
    }

    if combatant.conditions.infatuation {
        check.notices.push(StatusNotice::InLove);
        if rand_util::percent_roll(prng, INFATUATION_FAIL_PERCENT) {
            return check.fail(ActionFailure::ImmobilizedByLove);
        }
    }

    if let Some(turns) = combatant.conditions.confusion {
        let turns = turns.saturating_sub(1);
        if turns == 0 {
            combatant.conditions.confusion = None;
            check.notices.push(StatusNotice::SnappedOutOfConfusion);
        } else {
            combatant.conditions.confusion = Some(turns);
            check.notices.push(StatusNotice::Confused);
            if rand_util::percent_roll(prng, CONFUSION_FAIL_PERCENT) {
                let damage = confusion_self_damage(combatant, prng, randomize);
                let damage = combatant.receive_damage(damage);
                return check.fail(ActionFailure::HurtInConfusion { damage });
            }
        }
    }

    check
}

/// Damage dealt by a greater status at the end of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTick {
    pub kind: StatusKind,
    pub damage: u32,
}

impl StatusTick {
    pub fn message(&self, name: &str) -> String {
        match self.kind {
            StatusKind::Burn => format!("{name} was hurt by its burn!"),
            _ => format!("{name} was hurt by poison!"),
        }
    }
}

/// Ticks the combatant's conditions at the end of a turn.
///
/// Flinch always clears. Burn, poison, and toxic deal damage.
pub fn end_of_turn_tick(combatant: &mut Combatant) -> Option<StatusTick> {
    combatant.conditions.flinch = false;
    if combatant.is_fainted() {
        return None;
    }
    let max_hp = combatant.max_hp() as u32;
    let (kind, damage) = match &mut combatant.conditions.major {
        Some(MajorStatus::Burn) => (StatusKind::Burn, max_hp / 16),
        Some(MajorStatus::Poison) => (StatusKind::Poison, max_hp / 8),
        Some(MajorStatus::Toxic { counter }) => {
            let damage = max_hp * *counter as u32 / 16;
            *counter = (*counter + 1).min(MAX_TOXIC_COUNTER);
            (StatusKind::Toxic, damage)
        }
        _ => return None,
    };
    let damage = combatant.receive_damage(damage);
    Some(StatusTick { kind, damage })
}

/// The result of trying to inflict a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    Applied(StatusKind),
    /// A greater status landed on a target that already has one.
    AlreadyAfflicted,
    /// A volatile condition landed on a target that already has it.
    AlreadyPresent(StatusKind),
    /// Every candidate was blocked by the target's type or passive.
    Immune,
    /// No roll succeeded.
    Missed,
}

/// Checks if the combatant cannot receive the given status at all.
pub fn is_status_immune(combatant: &Combatant, kind: StatusKind) -> bool {
    match kind {
        StatusKind::Burn => combatant.has_type(Type::Fire),
        StatusKind::Freeze => combatant.has_type(Type::Ice),
        StatusKind::Paralysis => combatant.has_type(Type::Electric),
        StatusKind::Poison | StatusKind::Toxic => {
            combatant.has_type(Type::Poison) || combatant.has_type(Type::Steel)
        }
        StatusKind::Infatuation => combatant.has_passive(Passive::Oblivious),
        StatusKind::Confusion => combatant.has_passive(Passive::OwnTempo),
        StatusKind::Sleep | StatusKind::FocusEnergy | StatusKind::Flinch => false,
    }
}

/// Tries to inflict one of the candidate statuses on the target.
///
/// Candidates roll in order. The first successful roll decides the outcome.
pub fn apply_status(
    target: &mut Combatant,
    statuses: &[StatusKind],
    chance: u8,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> StatusOutcome {
    let mut any_eligible = false;
    for kind in statuses.iter().copied() {
        if is_status_immune(target, kind) {
            continue;
        }
        any_eligible = true;
        if !rand_util::percent_roll(prng, chance as u64) {
            continue;
        }
        if kind.is_greater() && target.conditions.major.is_some() {
            return StatusOutcome::AlreadyAfflicted;
        }
        if !kind.is_greater() && target.conditions.has(kind) {
            return StatusOutcome::AlreadyPresent(kind);
        }
        assign_status(target, kind, prng);
        debug!("{} received status {kind}", target.name);
        return StatusOutcome::Applied(kind);
    }
    if any_eligible {
        StatusOutcome::Missed
    } else {
        StatusOutcome::Immune
    }
}

fn assign_status(
    target: &mut Combatant,
    kind: StatusKind,
    prng: &mut dyn PseudoRandomNumberGenerator,
) {
    let conditions = &mut target.conditions;
    match kind {
        StatusKind::Paralysis => conditions.major = Some(MajorStatus::Paralysis),
        StatusKind::Burn => conditions.major = Some(MajorStatus::Burn),
        StatusKind::Freeze => conditions.major = Some(MajorStatus::Freeze),
        StatusKind::Sleep => {
            let turns = rand_util::range_inclusive(prng, 1, 3) as u8;
            conditions.major = Some(MajorStatus::Sleep { turns });
        }
        StatusKind::Poison => conditions.major = Some(MajorStatus::Poison),
        StatusKind::Toxic => conditions.major = Some(MajorStatus::Toxic { counter: 1 }),
        StatusKind::Confusion => {
            conditions.confusion = Some(rand_util::range_inclusive(prng, 2, 5) as u8);
        }
        StatusKind::Infatuation => conditions.infatuation = true,
        StatusKind::FocusEnergy => conditions.focus_energy = true,
        StatusKind::Flinch => conditions.flinch = true,
    }
}

/// The message narrated when a status lands.
///
/// Flinch is silent.
pub fn status_applied_message(name: &str, kind: StatusKind) -> Option<String> {
    let message = match kind {
        StatusKind::Paralysis => format!("{name} was paralyzed!"),
        StatusKind::Burn => format!("{name} was burned!"),
        StatusKind::Freeze => format!("{name} was frozen solid!"),
        StatusKind::Sleep => format!("{name} fell asleep!"),
        StatusKind::Poison => format!("{name} was poisoned!"),
        StatusKind::Toxic => format!("{name} was badly poisoned!"),
        StatusKind::Confusion => format!("{name} was confused!"),
        StatusKind::Infatuation => format!("{name} fell in love!"),
        StatusKind::FocusEnergy => format!("{name} is getting pumped!"),
        StatusKind::Flinch => return None,
    };
    Some(message)
}
