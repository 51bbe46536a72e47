use prism_data::FieldEffectKind;

/// An effect active on the battlefield or on one side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEffect {
    pub kind: FieldEffectKind,
    /// End-of-turn ticks remaining. Unset lasts for the rest of the battle.
    pub turns_left: Option<u8>,
}

/// A set of active field effects.
///
/// Effects are recorded and expire on schedule. They do not yet change any calculation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldEffects {
    effects: Vec<FieldEffect>,
}

impl FieldEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, kind: FieldEffectKind) -> bool {
        self.effects.iter().any(|effect| effect.kind == kind)
    }

    pub fn get(&self, kind: FieldEffectKind) -> Option<&FieldEffect> {
        self.effects.iter().find(|effect| effect.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEffect> {
        self.effects.iter()
    }

    /// Adds an effect. Returns `false` if the effect is already active.
    pub fn add(&mut self, kind: FieldEffectKind, duration: Option<u8>) -> bool {
        if self.has(kind) {
            return false;
        }
        self.effects.push(FieldEffect {
            kind,
            turns_left: duration,
        });
        true
    }

    /// Counts down every timed effect, returning the effects that expired, in the order they were
    /// added.
    pub fn tick(&mut self) -> Vec<FieldEffectKind> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| match &mut effect.turns_left {
            Some(turns) => {
                *turns = turns.saturating_sub(1);
                if *turns == 0 {
                    expired.push(effect.kind);
                    false
                } else {
                    true
                }
            }
            None => true,
        });
        expired
    }
}

/// The message narrated when an effect wears off.
pub fn field_effect_end_message(kind: FieldEffectKind) -> String {
    match kind {
        FieldEffectKind::SunnyDay => "The sunlight faded.".to_owned(),
        FieldEffectKind::RainDance => "The rain stopped.".to_owned(),
        FieldEffectKind::StealthRock => "The pointed stones disappeared.".to_owned(),
        FieldEffectKind::Reflect | FieldEffectKind::LightScreen => format!("{kind} wore off!"),
    }
}
