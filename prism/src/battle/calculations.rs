use anyhow::Result;
use prism_data::{
    Nature,
    Stat,
    StatTable,
};

use crate::{
    error::general_error,
    teams::MonData,
};

fn stat_value(stat: Stat, value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|_| general_error(format!("{stat} stat {value} is out of range")))
}

/// Calculates a combatant's unboosted stats from a base stat table and [`MonData`].
///
/// `floor(0.01 * (2 * base + iv + ev / 4) * level)` is computed exactly in integers. HP then adds
/// `10 + level`; every other stat adds 5 and is scaled by the nature.
///
/// Fails if any resulting stat does not fit in a `u16`.
pub fn calculate_mon_stats(base_stats: &StatTable, mon: &MonData) -> Result<StatTable> {
    let level = mon.level as u32;
    let stats = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ]
    .into_iter()
    .map(|stat| {
        let base = base_stats.get(stat) as u32;
        let iv = mon.ivs.get(stat) as u32;
        let ev = mon.evs.get(stat) as u32;
        let value = (4 * (2 * base + iv) + ev) * level / 400;
        let value = if stat == Stat::HP {
            value + 10 + level
        } else {
            value + 5
        };
        Ok((stat, stat_value(stat, value)?))
    })
    .collect::<Result<StatTable>>()?;
    apply_nature_to_stats(stats, mon.nature)
}

/// Applies the given nature to the stat table, returning the new stat table.
pub fn apply_nature_to_stats(mut stats: StatTable, nature: Nature) -> Result<StatTable> {
    if let Some(favored) = nature.favored() {
        let value = stats.get(favored) as u32 * 11 / 10;
        stats.set(favored, stat_value(favored, value)?);
    }
    if let Some(disfavored) = nature.disfavored() {
        let value = stats.get(disfavored) as u32 * 9 / 10;
        stats.set(disfavored, stat_value(disfavored, value)?);
    }
    Ok(stats)
}

/// The multiplier for a stage boost, as a `(numerator, denominator)` pair.
///
/// `(2 + max(stage, 0)) / (2 + max(-stage, 0))`, so +1 is 3/2 and -2 is 2/4.
pub fn stage_ratio(stage: i8) -> (u32, u32) {
    let stage = stage as i32;
    ((2 + stage.max(0)) as u32, (2 + (-stage).max(0)) as u32)
}

/// Scales a value by a stage boost, truncating.
pub fn apply_stage(value: u32, stage: i8) -> u32 {
    let (numerator, denominator) = stage_ratio(stage);
    value * numerator / denominator
}
