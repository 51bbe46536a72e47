mod field_effect_kind;
mod status_kind;

pub use field_effect_kind::FieldEffectKind;
pub use status_kind::StatusKind;
