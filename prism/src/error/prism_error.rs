use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A catalog lookup that found nothing.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// The caller broke the battle's call protocol, such as submitting a decision mid-turn.
///
/// These are bugs in the host, not game outcomes.
#[derive(Error, Debug)]
#[error("protocol violation: {message}")]
pub struct ProtocolError {
    message: String,
}

impl ProtocolError {
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    Error::new(GeneralError::new(message))
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    Error::new(NotFoundError::new(target))
}

/// Helper for an [`struct@Error`] wrapping a [`ProtocolError`].
pub fn protocol_error<M>(message: M) -> Error
where
    M: Display,
{
    Error::new(ProtocolError::new(message))
}
