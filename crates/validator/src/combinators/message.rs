//! MESSAGE combinator - custom messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the message of a validator.
///
/// The error keeps the original code and nests the original error, so the
/// underlying rule stays inspectable while the user sees the new text.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::prelude::*;
///
/// let validator = at_least(1_usize).with_message("Add at least one photo");
///
/// let error = validator.validate(&0_usize).unwrap_err();
/// assert_eq!(error.message, "Add at least one photo");
/// assert_eq!(error.code, "at_least");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), self.message.clone())
                .with_nested_error(original)
        })
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.inner.is_valid(input)
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        Some(self.message.clone())
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{at_least, required};

    #[test]
    fn test_message_replaced_code_kept() {
        let validator = with_message(required(), "Tell us your name");
        let error = validator.validate(&String::new()).unwrap_err();
        assert_eq!(error.message, "Tell us your name");
        assert_eq!(error.code, "required");
        assert_eq!(error.nested.len(), 1);
        assert_eq!(error.nested[0].message, "Required field");
    }

    #[test]
    fn test_message_is_advisory_even_when_valid() {
        let validator = with_message(at_least(2_i32), "Two or more");
        assert!(validator.is_valid(&3_i32));
        assert_eq!(validator.message(Some(&3_i32)).as_deref(), Some("Two or more"));
        assert_eq!(validator.message(None).as_deref(), Some("Two or more"));
    }
}
