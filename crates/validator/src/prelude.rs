//! Prelude module for convenient imports.
//!
//! Provides a single `use formwork_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! let bedrooms = not_null::<u32>().erase();
//! let move_in = required();
//! let photos = at_least(1_usize);
//! # let _ = (bedrooms, move_in, photos);
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    AnyValidator, DISTANT_FUTURE, DISTANT_PAST, FormValue, IntoAnyValidator, IsEmpty, NO_NUMBER,
    Validate, ValidateExt, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Many, WithMessage, and, many, with_message};
