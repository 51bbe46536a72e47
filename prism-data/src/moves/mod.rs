mod accuracy;
mod boost;
mod effect_category;
mod move_data;
mod move_target;

pub use accuracy::Accuracy;
pub use boost::Boost;
pub use effect_category::{
    Affects,
    EffectCategory,
};
pub use move_data::MoveData;
pub use move_target::MoveTarget;
