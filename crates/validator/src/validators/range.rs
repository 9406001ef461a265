//! Comparison validators
//!
//! [`AtLeast`], [`AtMost`] and [`Between`] compare a value against limits of
//! type `T`. They accept erased values and **fail open**: a value that is not
//! a `T` passes, because a comparison cannot disqualify what it cannot
//! compare. Pair them with `required` (or an erased typed check) when the
//! shape of the value matters.
//!
//! The message is computed once, from the limits, at construction.

use std::any::Any;
use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::{FormValue, Validate, ValidationError};

/// Validates that a value is at least a lower limit.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::prelude::*;
///
/// let validator = at_least(5_i32);
/// assert!(!validator.is_valid(&4_i32));
/// assert!(validator.is_valid(&5_i32));
/// assert!(validator.is_valid(&"non-numeric"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AtLeast<T> {
    limit: T,
    message: Cow<'static, str>,
}

impl<T: PartialOrd + Display + Any> AtLeast<T> {
    /// Creates an `AtLeast` validator with the default message.
    pub fn new(limit: T) -> Self {
        let message = format!("Must be at least {limit}");
        Self {
            limit,
            message: message.into(),
        }
    }

    /// Replaces the message with one computed from the limit.
    ///
    /// ```rust
    /// use formwork_validator::prelude::*;
    ///
    /// let photos = at_least(2_usize)
    ///     .with_message_fn(|n| format!("Must select at least {n} image{}", if *n == 1 { "" } else { "s" }));
    /// assert_eq!(photos.message(None).as_deref(), Some("Must select at least 2 images"));
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message_fn(mut self, message: impl FnOnce(&T) -> String) -> Self {
        self.message = message(&self.limit).into();
        self
    }

    /// Returns the lower limit.
    pub fn limit(&self) -> &T {
        &self.limit
    }
}

impl<T: PartialOrd + Display + Any> Validate for AtLeast<T> {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.downcast_ref::<T>() {
            Some(value) if !(*value >= self.limit) => Err(ValidationError::at_least(
                self.message.clone(),
                &self.limit,
            )),
            _ => Ok(()),
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Validates that a value is at most an upper limit.
#[derive(Debug, Clone, PartialEq)]
pub struct AtMost<T> {
    limit: T,
    message: Cow<'static, str>,
}

impl<T: PartialOrd + Display + Any> AtMost<T> {
    /// Creates an `AtMost` validator with the default message.
    pub fn new(limit: T) -> Self {
        let message = format!("Must be at most {limit}");
        Self {
            limit,
            message: message.into(),
        }
    }

    /// Replaces the message with one computed from the limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message_fn(mut self, message: impl FnOnce(&T) -> String) -> Self {
        self.message = message(&self.limit).into();
        self
    }

    /// Returns the upper limit.
    pub fn limit(&self) -> &T {
        &self.limit
    }
}

impl<T: PartialOrd + Display + Any> Validate for AtMost<T> {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.downcast_ref::<T>() {
            Some(value) if !(*value <= self.limit) => Err(ValidationError::at_most(
                self.message.clone(),
                &self.limit,
            )),
            _ => Ok(()),
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Validates that a value lies within an inclusive range.
#[derive(Debug, Clone, PartialEq)]
pub struct Between<T> {
    low: T,
    high: T,
    message: Cow<'static, str>,
}

impl<T: PartialOrd + Display + Any> Between<T> {
    /// Creates a `Between` validator with the default message.
    pub fn new(low: T, high: T) -> Self {
        let message = format!("Must be between {low} and {high}");
        Self {
            low,
            high,
            message: message.into(),
        }
    }

    /// Replaces the message with one computed from both limits.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message_fn(mut self, message: impl FnOnce(&T, &T) -> String) -> Self {
        self.message = message(&self.low, &self.high).into();
        self
    }

    /// Returns the lower and upper limits.
    pub fn limits(&self) -> (&T, &T) {
        (&self.low, &self.high)
    }
}

impl<T: PartialOrd + Display + Any> Validate for Between<T> {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.downcast_ref::<T>() {
            Some(value) if !(*value >= self.low && *value <= self.high) => Err(
                ValidationError::out_of_range(self.message.clone(), &self.low, &self.high),
            ),
            _ => Ok(()),
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Creates an [`AtLeast`] validator.
#[must_use]
pub fn at_least<T: PartialOrd + Display + Any>(limit: T) -> AtLeast<T> {
    AtLeast::new(limit)
}

/// Creates an [`AtMost`] validator.
#[must_use]
pub fn at_most<T: PartialOrd + Display + Any>(limit: T) -> AtMost<T> {
    AtMost::new(limit)
}

/// Creates a [`Between`] validator.
#[must_use]
pub fn between<T: PartialOrd + Display + Any>(low: T, high: T) -> Between<T> {
    Between::new(low, high)
}

// ============================================================================
// TESTS
// ============================================================================
