mod action;
mod battle;
mod battle_options;
mod boosts;
mod calculations;
mod combatant;
mod conditions;
mod damage;
mod field;
mod side;
mod speed_order;
mod status;

pub use action::{
    Action,
    Decision,
    MoveAction,
    SwitchAction,
    TurnIntent,
};
pub use battle::{
    Battle,
    TurnPhase,
};
pub use battle_options::{
    BattleEngineOptions,
    BattleOptions,
    RandomizeBaseDamage,
    SideData,
    SpeedSortTieResolution,
};
pub use boosts::{
    BoostTable,
    MAX_BOOST,
    MIN_BOOST,
};
pub use calculations::{
    apply_nature_to_stats,
    apply_stage,
    calculate_mon_stats,
    stage_ratio,
};
pub use combatant::{
    Combatant,
    LearnedMove,
    StatRole,
};
pub use conditions::{
    ConditionSet,
    MAX_TOXIC_COUNTER,
    MajorStatus,
};
pub use damage::{
    CONFUSION_POWER,
    DamageOutcome,
    DamageParams,
    confusion_self_damage,
    critical_hit_stage,
    is_immune,
    recoil_damage,
    resolve_damage,
    rolls_critical_hit,
    rolls_hit,
};
pub use field::{
    FieldEffect,
    FieldEffects,
    field_effect_end_message,
};
pub use side::{
    MoveCache,
    Side,
};
pub use speed_order::{
    SpeedOrderable,
    compare_priority,
    sort_with_random_ties,
    speed_sort,
};
pub use status::{
    ActionFailure,
    PreCheck,
    StatusNotice,
    StatusOutcome,
    StatusTick,
    apply_status,
    end_of_turn_tick,
    is_status_immune,
    pre_check,
    status_applied_message,
};
