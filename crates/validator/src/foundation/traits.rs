//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement
//! and the extension trait carrying the combinator methods.

use std::any::Any;
use std::borrow::Cow;

use crate::foundation::{AnyValidator, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a predicate over its input plus an input-dependent
/// message. `validate` is the primitive; `is_valid` and `message` are
/// derived from it unless a validator has a better answer.
///
/// The message is advisory. A validator may return a message for a valid
/// input (most built-in validators return a constant one), and callers must
/// only display it when `is_valid` is `false`.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::foundation::{Validate, ValidationError};
///
/// struct MinChars {
///     min: usize,
/// }
///
/// impl Validate for MinChars {
///     type Input = String;
///
///     fn validate(&self, input: &String) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::new(
///                 "min_chars",
///                 format!("Must be at least {} characters", self.min),
///             ))
///         }
///     }
/// }
///
/// let validator = MinChars { min: 3 };
/// assert!(validator.is_valid(&"abc".to_string()));
/// assert_eq!(
///     validator.message(Some(&"ab".to_string())).as_deref(),
///     Some("Must be at least 3 characters")
/// );
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Erased validators use `dyn FormValue`; typed validators use the
    /// concrete field type.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Returns the message for `input`, or for no input at all.
    ///
    /// The default is the message of the error `validate` produces, so it is
    /// absent for valid input and for `None`.
    fn message(&self, input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        input
            .and_then(|input| self.validate(input).err())
            .map(|error| error.message)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement `Validate`.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::prelude::*;
///
/// let validator = required().and(at_least(5_i64));
/// assert!(validator.is_valid(&7_i64));
/// assert!(!validator.is_valid(&3_i64));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. The first failing validator's error and
    /// message win.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the message (and error message) of this validator.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases a typed validator so it accepts any `FormValue`.
    ///
    /// Values of a foreign type fail closed: they are invalid with a
    /// `type_mismatch` error and no message.
    fn erase(self) -> AnyValidator
    where
        Self: Send + Sync + 'static,
        Self::Input: Sized + Any,
    {
        AnyValidator::erase(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
