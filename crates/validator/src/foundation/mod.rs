//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: `Validate`, `ValidateExt`, `IntoAnyValidator`
//! - **Values**: `IsEmpty`, `FormValue` and the sentinel constants
//! - **Erasure**: `AnyValidator`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! # Architecture
//!
//! ## 1. Typed validators
//!
//! A validator is generic over its input:
//!
//! ```rust,ignore
//! impl Validate for NotNull<T> {
//!     type Input = Option<T>;
//!     // ...
//! }
//! ```
//!
//! ## 2. Erased validators
//!
//! Forms mix field types, so the slot a form scope binds holds an
//! [`AnyValidator`] over `dyn FormValue`. Validators that only need the
//! emptiness predicate or a downcast (`required`, `at_least`, ...) accept
//! `dyn FormValue` directly; typed validators are erased at the boundary
//! and fail closed on foreign values.
//!
//! ## 3. Advisory messages
//!
//! `message` is for display only. It may be present for a valid value and
//! must never drive control flow.

pub mod erased;
pub mod error;
pub mod traits;
pub mod value;

pub use erased::{AnyValidator, IntoAnyValidator};
pub use error::{ValidationError, ValidationErrors, codes};
pub use traits::{Validate, ValidateExt};
pub use value::{DISTANT_FUTURE, DISTANT_PAST, FormValue, IsEmpty, NO_NUMBER};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with several validators and collects every failure.
///
/// Unlike [`many`](crate::combinators::many), which stops at the first
/// failure, this reports all of them.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::foundation::validate_with_all;
/// use formwork_validator::prelude::*;
///
/// let checks = [required().into_any(), at_least(10_i64).into_any()];
/// let errors = validate_with_all(&checks, &3_i64).unwrap_err();
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_with_all<V>(validators: &[V], value: &V::Input) -> Result<(), ValidationErrors>
where
    V: Validate,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
