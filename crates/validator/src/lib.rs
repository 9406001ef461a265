//! # formwork-validator
//!
//! Composable validators for form fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! // Compose validators with many() / .and()
//! let price = many([required().into_any(), at_least(1.0_f64).into_any()]);
//! assert!(price.is_valid(&12.5_f64));
//! assert_eq!(price.message(Some(&NO_NUMBER)).as_deref(), Some("Required field"));
//! ```
//!
//! ## Creating Validators
//!
//! Implement [`Validate`](foundation::Validate) for a concrete input type and
//! erase it with [`ValidateExt::erase`](foundation::ValidateExt::erase) to
//! bind it next to validators of other types.
//!
//! ## Built-in Validators
//!
//! - **Constant**: [`Always`](validators::Always), [`Never`](validators::Never)
//! - **Presence**: [`Required`](validators::Required), [`NotNull`](validators::NotNull)
//! - **Comparison**: [`AtLeast`](validators::AtLeast), [`AtMost`](validators::AtMost),
//!   [`Between`](validators::Between)
//! - **Combinators**: [`And`](combinators::And), [`Many`](combinators::Many),
//!   [`WithMessage`](combinators::WithMessage)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
