use prism_data::StatusKind;

/// Maximum toxic counter.
pub const MAX_TOXIC_COUNTER: u8 = 15;

/// A status occupying a combatant's single greater-status slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorStatus {
    Paralysis,
    Burn,
    Freeze,
    /// Asleep for the given number of remaining turns.
    Sleep { turns: u8 },
    Poison,
    /// Badly poisoned. The counter scales the next tick's damage.
    Toxic { counter: u8 },
}

impl MajorStatus {
    /// The kind of status, as named by move data.
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::Paralysis => StatusKind::Paralysis,
            Self::Burn => StatusKind::Burn,
            Self::Freeze => StatusKind::Freeze,
            Self::Sleep { .. } => StatusKind::Sleep,
            Self::Poison => StatusKind::Poison,
            Self::Toxic { .. } => StatusKind::Toxic,
        }
    }
}

/// The full set of conditions on a combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConditionSet {
    /// The greater status, if any.
    pub major: Option<MajorStatus>,
    /// Remaining turns of confusion.
    pub confusion: Option<u8>,
    pub infatuation: bool,
    pub focus_energy: bool,
    /// Cleared at the end of every turn.
    pub flinch: bool,
}

impl ConditionSet {
    /// Checks if the condition of the given kind is present.
    pub fn has(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Confusion => self.confusion.is_some(),
            StatusKind::Infatuation => self.infatuation,
            StatusKind::FocusEnergy => self.focus_energy,
            StatusKind::Flinch => self.flinch,
            _ => self.major.is_some_and(|major| major.kind() == kind),
        }
    }

    /// Checks if the combatant has the given greater status.
    pub fn has_major(&self, kind: StatusKind) -> bool {
        kind.is_greater() && self.has(kind)
    }

    /// Clears every condition that does not survive switching out.
    ///
    /// The greater status stays.
    pub fn clear_volatile(&mut self) {
        self.confusion = None;
        self.infatuation = false;
        self.focus_energy = false;
        self.flinch = false;
    }
}
