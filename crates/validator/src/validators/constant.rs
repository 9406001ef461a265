//! Constant validators

use std::borrow::Cow;

use crate::foundation::{FormValue, Validate, ValidationError, codes};

/// Accepts every value. The default binding of a form scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Always;

impl Validate for Always {
    type Input = dyn FormValue;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Rejects every value, without a message. Its error carries the `never`
/// code and empty text.
///
/// Bound over a subtree to disable it, e.g. when a group-level check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Never;

impl Validate for Never {
    type Input = dyn FormValue;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        Err(ValidationError::new(codes::NEVER, ""))
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        None
    }
}

/// Creates an [`Always`] validator.
#[must_use]
pub const fn always() -> Always {
    Always
}

/// Creates a [`Never`] validator.
#[must_use]
pub const fn never() -> Never {
    Never
}
