//! Validator combinators
//!
//! - [`And`] / [`and`] - binary conjunction over one input type
//! - [`Many`] / [`many`] - ordered conjunction over erased validators
//! - [`WithMessage`] / [`with_message`] - message override

pub mod and;
pub mod message;

pub use and::{And, Many, and, many};
pub use message::{WithMessage, with_message};
