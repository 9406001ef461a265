//! AND combinators - logical conjunction of validators
//!
//! [`And`] joins two validators of the same input type. [`Many`] joins an
//! ordered list of erased validators, which is what a field with several
//! rules binds.
//!
//! Both pick the message of the first validator, in order, that rejects the
//! input. Validity is commutative; message selection is not.
//!
//! # Examples
//!
//! ```rust
//! use formwork_validator::prelude::*;
//!
//! let price = many([required().into_any(), at_least(1.0_f64).into_any()]);
//! assert!(price.is_valid(&9.5_f64));
//! assert_eq!(price.message(Some(&NO_NUMBER)).as_deref(), Some("Required field"));
//! assert_eq!(price.message(Some(&0.5_f64)).as_deref(), Some("Must be at least 1"));
//! ```

use std::borrow::Cow;

use crate::foundation::{AnyValidator, FormValue, Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors and messages come from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }

    fn message(&self, input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        match input {
            None => self.left.message(None),
            Some(value) if !self.left.is_valid(value) => self.left.message(input),
            Some(value) if !self.right.is_valid(value) => self.right.message(input),
            Some(_) => None,
        }
    }
}

impl<L, R> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with AND logic.
    pub fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        And::new(self, other)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

// ============================================================================
// MANY
// ============================================================================

/// Combines an ordered list of erased validators with logical AND.
///
/// Validation stops at the first failure. The order is the caller's
/// priority order for messages: put the check whose message should win
/// (usually `required`) first.
#[derive(Debug, Clone, Default)]
pub struct Many {
    validators: Vec<AnyValidator>,
}

impl Many {
    /// Creates a `Many` from erased validators.
    pub fn new(validators: impl IntoIterator<Item = AnyValidator>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// Appends a validator at the lowest priority.
    #[must_use = "builder methods must be chained or built"]
    pub fn push(mut self, validator: AnyValidator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Returns the validators in priority order.
    pub fn validators(&self) -> &[AnyValidator] {
        &self.validators
    }

    /// Returns the number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if there are no validators (everything passes).
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Many {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validators.iter().all(|v| v.is_valid(input))
    }

    /// For a value: the message of the first validator that rejects it.
    /// For no value: the first validator's message.
    fn message(&self, input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        match input {
            None => self.validators.first().and_then(|v| v.message(None)),
            Some(value) => self
                .validators
                .iter()
                .find(|v| !v.is_valid(value))
                .and_then(|v| v.message(input)),
        }
    }
}

impl FromIterator<AnyValidator> for Many {
    fn from_iter<I: IntoIterator<Item = AnyValidator>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Creates a [`Many`] combinator from erased validators.
pub fn many(validators: impl IntoIterator<Item = AnyValidator>) -> Many {
    Many::new(validators)
}
