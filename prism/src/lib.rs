pub mod battle;
pub mod error;
pub mod log;
pub mod teams;

#[cfg(test)]
mod common;

pub use battle::*;
pub use error::*;
pub use teams::*;

pub use prism_choice as choice;
pub use prism_data as data;
pub use prism_prng as prng;
