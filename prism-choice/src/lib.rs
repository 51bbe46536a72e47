use std::{
    fmt::Display,
    str::FromStr,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid choice: {0}")]
pub struct InvalidChoiceError(String);

/// A choice to use a move.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveChoice {
    /// The move slot to use.
    pub slot: usize,
}

impl Display for MoveChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slot)
    }
}

impl FromStr for MoveChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot = s
            .trim()
            .parse()
            .with_context(|| format!("invalid move slot \"{s}\""))?;
        Ok(Self { slot })
    }
}

/// A choice to switch in a team member.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwitchChoice {
    /// The team index of the combatant to switch in.
    pub mon: usize,
}

impl Display for SwitchChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mon)
    }
}

impl FromStr for SwitchChoice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mon = s
            .trim()
            .parse()
            .with_context(|| format!("invalid switch target \"{s}\""))?;
        Ok(Self { mon })
    }
}

/// A choice, which controls what a side does for one turn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Do nothing.
    #[default]
    Pass,
    /// Switch a team member in.
    Switch(SwitchChoice),
    /// Use a move.
    Move(MoveChoice),
}

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Switch(choice) => write!(f, "switch {choice}"),
            Self::Move(choice) => write!(f, "move {choice}"),
        }
    }
}

impl FromStr for Choice {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (choice, data) = match s.split_once(' ') {
            Some((choice, data)) => (choice, data.trim()),
            None => (s, ""),
        };
        match choice {
            "pass" => Ok(Self::Pass),
            "switch" => Ok(Self::Switch(SwitchChoice::from_str(data)?)),
            "move" => Ok(Self::Move(MoveChoice::from_str(data)?)),
            _ => Err(Error::new(InvalidChoiceError(choice.to_owned()))),
        }
    }
}
