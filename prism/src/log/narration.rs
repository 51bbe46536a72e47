use std::mem;

use itertools::Itertools;
use log::trace;

/// An ordered log of narration events produced by a battle.
///
/// Events are pushed as the battle does work and displayed one at a time as the host advances.
/// The log tracks two cursors: how far the host has displayed, and how far a reader has read out.
#[derive(Debug, Default)]
pub struct NarrationLog {
    events: Vec<String>,
    displayed: usize,
    last_read: usize,
}

impl NarrationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new event to the log.
    pub fn push<S>(&mut self, event: S)
    where
        S: Into<String>,
    {
        let event = event.into();
        trace!("narration: {event}");
        self.events.push(event);
    }

    /// Pushes multiple events to the log.
    pub fn push_extend<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = String>,
    {
        for event in events {
            self.push(event);
        }
    }

    /// Is an event waiting to be displayed?
    pub fn has_pending(&self) -> bool {
        self.displayed < self.events.len()
    }

    /// Marks the next pending event as displayed, returning it.
    pub fn display_next(&mut self) -> Option<&str> {
        let event = self.events.get(self.displayed)?;
        self.displayed += 1;
        Some(event.as_str())
    }

    /// The most recently displayed event.
    pub fn current(&self) -> Option<&str> {
        self.displayed
            .checked_sub(1)
            .and_then(|i| self.events.get(i))
            .map(|event| event.as_str())
    }

    /// Returns an iterator over all events, displayed or not.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|event| event.as_str())
    }

    /// Reads out any events that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.events.len());
        self.events[i..].iter().map(|event| event.as_str())
    }

    /// The whole log as one newline-separated transcript.
    pub fn transcript(&self) -> String {
        self.events.iter().join("\n")
    }
}
