use log::trace;
use prism_data::{
    MoveData,
    Passive,
    Stat,
    StatusKind,
    Type,
    TypeChart,
    TypeEffectiveness,
};
use prism_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::{
    Combatant,
    RandomizeBaseDamage,
    StatRole,
    stage_ratio,
};

/// Power of the hit a confused combatant deals to itself.
pub const CONFUSION_POWER: u32 = 40;

/// Critical hit chance denominators, indexed by critical hit stage.
const CRIT_MULT: [u64; 4] = [24, 8, 2, 1];

/// The stats and power a damaging effect reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageParams {
    pub power: u32,
    pub offensive_stat: Stat,
    pub defensive_stat: Stat,
}

/// The result of a single damage calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    pub damage: u32,
    pub critical: bool,
    /// Net number of doublings (positive) or halvings (negative) from type matchups.
    pub type_modifier: i8,
    pub immune: bool,
}

impl DamageOutcome {
    fn immune() -> Self {
        Self {
            immune: true,
            ..Default::default()
        }
    }
}

/// Checks if the defender is immune to moves of the given type.
pub fn is_immune(defender: &Combatant, move_type: Type, chart: &TypeChart) -> bool {
    chart.is_immune(move_type, &defender.types)
        || (move_type == Type::Ground && defender.has_passive(Passive::Levitate))
}

/// Rolls whether a move hits.
///
/// Exempt moves always hit without drawing.
pub fn rolls_hit(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> bool {
    let Some(accuracy) = move_data.accuracy.percentage() else {
        return true;
    };
    let accuracy = accuracy as u32;
    // Raised evasion lowers the chance to hit.
    let (accuracy_numerator, accuracy_denominator) = stage_ratio(attacker.boosts().acc);
    let (evasion_numerator, evasion_denominator) =
        stage_ratio(defender.boosts().eva.saturating_neg());
    let accuracy = accuracy * accuracy_numerator * evasion_numerator
        / (accuracy_denominator * evasion_denominator);
    let roll = rand_util::range_inclusive(prng, 1, 100) as u32;
    trace!("accuracy roll for {}: {roll} <= {accuracy}", move_data.name);
    roll <= accuracy
}

/// The critical hit stage of a move used by the attacker.
pub fn critical_hit_stage(attacker: &Combatant, move_data: &MoveData) -> u8 {
    let mut stage = move_data.crit_ratio;
    if attacker.conditions.focus_energy {
        stage = stage.saturating_add(1);
    }
    stage
}

/// Rolls a critical hit at the given stage.
///
/// Stages at or above the last tier always land without drawing.
pub fn rolls_critical_hit(stage: u8, prng: &mut dyn PseudoRandomNumberGenerator) -> bool {
    let denominator = CRIT_MULT[(stage as usize).min(CRIT_MULT.len() - 1)];
    denominator == 1 || rand_util::chance(prng, 1, denominator)
}

fn randomize_base_damage(
    base_damage: u32,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> u32 {
    let random_factor = match randomize {
        RandomizeBaseDamage::Randomize => rand_util::range(prng, 0, 16) as u32,
        RandomizeBaseDamage::Max => 0,
        RandomizeBaseDamage::Min => 15,
    };
    base_damage * (100 - random_factor) / 100
}

fn base_damage(power: u32, attack: u32, defense: u32) -> u32 {
    2 * power * attack / defense.max(1) / 50 + 2
}

/// Calculates the damage of a single hit from the attacker to the defender.
///
/// Immune defenders take no damage and nothing is drawn.
pub fn resolve_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    params: DamageParams,
    chart: &TypeChart,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> DamageOutcome {
    let move_type = move_data.primary_type;
    if is_immune(defender, move_type, chart) {
        return DamageOutcome::immune();
    }

    let critical = rolls_critical_hit(critical_hit_stage(attacker, move_data), prng);

    let mut power = params.power;
    if attacker.has_passive(Passive::Torrent)
        && move_type == Type::Water
        && attacker.hp() as u32 * 3 <= attacker.max_hp() as u32
    {
        power = power * 3 / 2;
    }

    let (attack, defense) = if critical {
        (
            attacker.critical_stat(params.offensive_stat, StatRole::Offensive),
            defender.critical_stat(params.defensive_stat, StatRole::Defensive),
        )
    } else {
        (
            attacker.derived_stat(params.offensive_stat),
            defender.derived_stat(params.defensive_stat),
        )
    };

    let mut damage = base_damage(power, attack, defense);
    if critical {
        damage = damage * 3 / 2;
    }
    damage = randomize_base_damage(damage, prng, randomize);

    let mut type_modifier = 0i8;
    for defense_type in &defender.types {
        match chart.effectiveness(move_type, *defense_type) {
            TypeEffectiveness::Strong => {
                type_modifier += 1;
                damage *= 2;
            }
            TypeEffectiveness::Weak => {
                type_modifier -= 1;
                damage /= 2;
            }
            _ => (),
        }
    }

    if params.offensive_stat == Stat::Atk && attacker.conditions.has_major(StatusKind::Burn) {
        damage /= 2;
    }

    trace!(
        "{} deals {damage} damage to {} with {} (critical: {critical})",
        attacker.name, defender.name, move_data.name
    );
    DamageOutcome {
        damage,
        critical,
        type_modifier,
        immune: false,
    }
}

/// Damage the user takes back after dealing damage.
pub fn recoil_damage(damage: u32, recoil_percent: u32) -> u32 {
    damage * recoil_percent / 100
}

/// Damage a confused combatant deals to itself.
///
/// Uses its own Attack against its own Defense. Never critical and never affected by type.
pub fn confusion_self_damage(
    combatant: &Combatant,
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> u32 {
    let damage = base_damage(
        CONFUSION_POWER,
        combatant.derived_stat(Stat::Atk),
        combatant.derived_stat(Stat::Def),
    );
    randomize_base_damage(damage, prng, randomize)
}
