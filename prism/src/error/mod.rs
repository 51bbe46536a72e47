mod context;
mod error;
mod prism_error;

pub use error::{
    WrapOptionError,
    WrapResultError,
};
pub use prism_error::{
    GeneralError,
    NotFoundError,
    ProtocolError,
    general_error,
    not_found_error,
    protocol_error,
};
