use prism_choice::Choice;

use crate::battle::{
    Combatant,
    SpeedOrderable,
};

/// A side's decision for a turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Use the move in the given slot.
    Move(usize),
    /// Switch to the team member at the given index.
    Switch(usize),
    /// Do nothing.
    #[default]
    NoAction,
}

impl Decision {
    /// Interprets a single numeric index.
    ///
    /// Indices `0..move_count` pick a move. The next `team_size` indices pick a switch target. Any
    /// other index means no action.
    pub fn from_index(index: usize, move_count: usize, team_size: usize) -> Self {
        if index < move_count {
            Self::Move(index)
        } else if index - move_count < team_size {
            Self::Switch(index - move_count)
        } else {
            Self::NoAction
        }
    }
}

impl From<Choice> for Decision {
    fn from(value: Choice) -> Self {
        match value {
            Choice::Pass => Self::NoAction,
            Choice::Move(choice) => Self::Move(choice.slot),
            Choice::Switch(choice) => Self::Switch(choice.mon),
        }
    }
}

/// A decision submitted by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnIntent {
    pub side: usize,
    pub kind: Decision,
}

/// A move action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAction {
    pub side: usize,
    pub slot: usize,
    pub priority: i32,
    pub speed: u32,
}

/// A switch action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchAction {
    pub side: usize,
    /// Team index of the incoming combatant.
    pub target: usize,
    pub speed: u32,
}

/// A single action resolved in a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move(MoveAction),
    Switch(SwitchAction),
    NoAction { side: usize },
}

impl Action {
    /// Resolves a side's intent into an action for its active combatant.
    pub fn new(intent: TurnIntent, active: &Combatant) -> Self {
        let speed = active.speed();
        match intent.kind {
            Decision::Move(slot) => Self::Move(MoveAction {
                side: intent.side,
                slot,
                priority: active
                    .moves
                    .get(slot)
                    .map(|learned| learned.data.priority as i32)
                    .unwrap_or_default(),
                speed,
            }),
            Decision::Switch(target) => Self::Switch(SwitchAction {
                side: intent.side,
                target,
                speed,
            }),
            Decision::NoAction => Self::NoAction { side: intent.side },
        }
    }

    pub fn side(&self) -> usize {
        match self {
            Self::Move(action) => action.side,
            Self::Switch(action) => action.side,
            Self::NoAction { side } => *side,
        }
    }
}

impl SpeedOrderable for Action {
    fn priority(&self) -> i32 {
        match self {
            Self::Move(action) => action.priority,
            Self::Switch(_) => 0,
            Self::NoAction { .. } => i32::MIN,
        }
    }

    fn sub_priority(&self) -> i32 {
        match self {
            // Switches beat moves of the same priority.
            Self::Switch(_) => 1,
            _ => 0,
        }
    }

    fn speed(&self) -> u32 {
        match self {
            Self::Move(action) => action.speed,
            Self::Switch(action) => action.speed,
            Self::NoAction { .. } => 0,
        }
    }
}

#[cfg(test)]
mod action_test {
    use prism_choice::Choice;

    use crate::battle::Decision;

    #[test]
    fn interprets_numeric_index() {
        assert_eq!(Decision::from_index(0, 4, 3), Decision::Move(0));
        assert_eq!(Decision::from_index(3, 4, 3), Decision::Move(3));
        assert_eq!(Decision::from_index(4, 4, 3), Decision::Switch(0));
        assert_eq!(Decision::from_index(6, 4, 3), Decision::Switch(2));
        assert_eq!(Decision::from_index(7, 4, 3), Decision::NoAction);
        assert_eq!(Decision::from_index(1, 1, 1), Decision::Switch(0));
        assert_eq!(Decision::from_index(2, 1, 1), Decision::NoAction);
    }

    #[test]
    fn converts_from_choice() {
        assert_eq!(
            Decision::from("move 2".parse::<Choice>().unwrap()),
            Decision::Move(2)
        );
        assert_eq!(
            Decision::from("switch 1".parse::<Choice>().unwrap()),
            Decision::Switch(1)
        );
        assert_eq!(
            Decision::from("pass".parse::<Choice>().unwrap()),
            Decision::NoAction
        );
    }
}
