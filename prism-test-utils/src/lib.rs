mod error_assert;
mod log_assert;
mod rng;
mod setup;
mod test_battle_builder;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_assert::assert_new_narration_eq;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::{
    TestBattleBuilder,
    team_from_json,
};
