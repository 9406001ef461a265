//! Presence validators
//!
//! - [`Required`] - the value is not its type's empty sentinel
//! - [`NotNull`] - an `Option` is `Some`
//!
//! `Required` consults [`IsEmpty`](crate::foundation::IsEmpty) through the
//! erased value, so one instance serves text, dates, numbers and sets.
//! `NotNull` is a pure presence check over `Option<T>` and needs no
//! emptiness predicate.
//!
//! # Examples
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! assert!(!required().is_valid(&""));
//! assert!(required().is_valid(&"abc"));
//! assert!(!required().is_valid(&DISTANT_FUTURE));
//!
//! assert!(not_null::<u32>().is_valid(&Some(3)));
//! assert!(!not_null::<u32>().is_valid(&None));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{FormValue, Validate, ValidationError};

/// Default message of [`Required`].
pub const REQUIRED_MESSAGE: &str = "Required field";

/// Default message of [`NotNull`].
pub const NOT_NULL_MESSAGE: &str = "Choose an option";

/// Validates that a value is not the unset sentinel of its type.
///
/// `None` counts as unset too, as does `Some` around an unset value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    /// Creates a `Required` validator with a custom message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new(REQUIRED_MESSAGE)
    }
}

impl Validate for Required {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_unset() {
            Err(ValidationError::required(self.message.clone()))
        } else {
            Ok(())
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Creates a [`Required`] validator with the default message.
#[must_use]
pub fn required() -> Required {
    Required::default()
}

/// Validates that an `Option` is `Some`.
///
/// Typed over `Option<T>`: once erased, a value of any other type is
/// rejected.
pub struct NotNull<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> NotNull<T> {
    /// Creates a `NotNull` validator with a custom message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for NotNull<T> {
    fn default() -> Self {
        Self::new(NOT_NULL_MESSAGE)
    }
}

impl<T> Clone for NotNull<T> {
    fn clone(&self) -> Self {
        Self::new(self.message.clone())
    }
}

impl<T> fmt::Debug for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotNull")
            .field("type", &std::any::type_name::<T>())
            .field("message", &self.message)
            .finish()
    }
}

impl<T> Validate for NotNull<T> {
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_some() {
            Ok(())
        } else {
            Err(ValidationError::not_null(self.message.clone()))
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Creates a [`NotNull`] validator with the default message.
#[must_use]
pub fn not_null<T>() -> NotNull<T> {
    NotNull::default()
}
