//! Built-in validators
//!
//! # Categories
//!
//! - **Constant**: [`Always`], [`Never`]
//! - **Presence**: [`Required`], [`NotNull`]
//! - **Comparison**: [`AtLeast`], [`AtMost`], [`Between`]
//!
//! # Examples
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! // Presence
//! let title = required();
//! assert!(!title.is_valid(&String::new()));
//!
//! // Comparison over any ordered type
//! let bedrooms = between(1_u32, 10_u32);
//! assert!(bedrooms.is_valid(&3_u32));
//!
//! // Composition
//! let price = many([required().into_any(), at_least(0.0_f64).into_any()]);
//! assert!(!price.is_valid(&NO_NUMBER));
//! ```

pub mod constant;
pub mod nullable;
pub mod range;

pub use constant::{Always, Never, always, never};
pub use nullable::{NOT_NULL_MESSAGE, NotNull, REQUIRED_MESSAGE, Required, not_null, required};
pub use range::{AtLeast, AtMost, Between, at_least, at_most, between};
