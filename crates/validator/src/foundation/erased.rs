//! Type-erased validators
//!
//! Fields of different value types share a single validator slot in a form
//! scope. [`AnyValidator`] is that slot's type: a validator over
//! `dyn FormValue`, cheap to clone, built either from a validator that
//! already accepts erased values or by erasing a typed one.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{FormValue, Validate, ValidationError, codes};

type DynValidator = dyn Validate<Input = dyn FormValue> + Send + Sync;

/// A validator over values of unknown type.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::prelude::*;
///
/// // Validators over `dyn FormValue` are wrapped as-is.
/// let required = AnyValidator::new(required());
/// assert!(!required.is_valid(&String::new()));
///
/// // Typed validators are erased and fail closed on foreign types.
/// let choose = not_null::<u8>().erase();
/// assert!(choose.is_valid(&Some(2_u8)));
/// assert!(!choose.is_valid(&"two"));
/// ```
#[derive(Clone)]
pub struct AnyValidator {
    inner: Arc<DynValidator>,
}

impl AnyValidator {
    /// Wraps a validator that already accepts any `FormValue`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate<Input = dyn FormValue> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(validator),
        }
    }

    /// Erases a validator over a concrete type.
    ///
    /// Values of that type are delegated to the wrapped validator. Any other
    /// value is invalid with a [`codes::TYPE_MISMATCH`] error and has no
    /// message.
    pub fn erase<V>(validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
        V::Input: Sized + Any,
    {
        Self::new(Typed { inner: validator })
    }

    /// Builds a validator from an input-independent predicate.
    ///
    /// Useful for checks that span several fields, such as "end date after
    /// start date", where the predicate captures what it needs.
    pub fn from_fn<F>(predicate: F, message: Option<Cow<'static, str>>) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self::new(Predicate { predicate, message })
    }

    /// Validates an erased value.
    pub fn validate(&self, input: &dyn FormValue) -> Result<(), ValidationError> {
        self.inner.validate(input)
    }

    /// Returns `true` if the value passes.
    pub fn is_valid(&self, input: &dyn FormValue) -> bool {
        self.inner.is_valid(input)
    }

    /// Returns the message for `input`, or for no input at all.
    pub fn message(&self, input: Option<&dyn FormValue>) -> Option<Cow<'static, str>> {
        self.inner.message(input)
    }
}

impl Validate for AnyValidator {
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input)
    }

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.inner.is_valid(input)
    }

    fn message(&self, input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        self.inner.message(input)
    }
}

impl fmt::Debug for AnyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValidator").finish_non_exhaustive()
    }
}

/// Conversion into the erased validator stored in form scopes.
///
/// Implemented for every validator over `dyn FormValue`. Typed validators
/// go through [`ValidateExt::erase`](crate::foundation::ValidateExt::erase)
/// first.
pub trait IntoAnyValidator {
    /// Performs the conversion.
    fn into_any(self) -> AnyValidator;
}

impl<V> IntoAnyValidator for V
where
    V: Validate<Input = dyn FormValue> + Send + Sync + 'static,
{
    fn into_any(self) -> AnyValidator {
        AnyValidator::new(self)
    }
}

// ============================================================================
// ADAPTERS
// ============================================================================

struct Typed<V> {
    inner: V,
}

impl<V> Validate for Typed<V>
where
    V: Validate,
    V::Input: Sized + Any,
{
    type Input = dyn FormValue;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.downcast_ref::<V::Input>() {
            Some(value) => self.inner.validate(value),
            None => Err(ValidationError::type_mismatch(
                type_name::<V::Input>(),
                input.value_type_name(),
            )),
        }
    }

    fn message(&self, input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        match input {
            None => self.inner.message(None),
            Some(input) => input
                .downcast_ref::<V::Input>()
                .and_then(|value| self.inner.message(Some(value))),
        }
    }
}

struct Predicate<F> {
    predicate: F,
    message: Option<Cow<'static, str>>,
}

impl<F> Validate for Predicate<F>
where
    F: Fn() -> bool,
{
    type Input = dyn FormValue;

    fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
        if (self.predicate)() {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or(Cow::Borrowed("Predicate failed"));
            Err(ValidationError::new(codes::PREDICATE, message))
        }
    }

    fn message(&self, _input: Option<&Self::Input>) -> Option<Cow<'static, str>> {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Even;

    impl Validate for Even {
        type Input = i32;

        fn validate(&self, input: &i32) -> Result<(), ValidationError> {
            if input % 2 == 0 {
                Ok(())
            } else {
                Err(ValidationError::new("even", "Must be even"))
            }
        }
    }

    #[test]
    fn test_erase_delegates_on_matching_type() {
        let validator = AnyValidator::erase(Even);
        assert!(validator.is_valid(&4_i32));
        assert!(!validator.is_valid(&3_i32));
        assert_eq!(validator.message(Some(&3_i32)).as_deref(), Some("Must be even"));
    }

    #[test]
    fn test_erase_fails_closed_on_foreign_type() {
        let validator = AnyValidator::erase(Even);
        assert!(!validator.is_valid(&4_i64));
        assert_eq!(validator.message(Some(&4_i64)), None);

        let error = validator.validate(&"four").unwrap_err();
        assert!(error.is_type_mismatch());
        assert_eq!(error.param("expected"), Some("i32"));
    }

    #[test]
    fn test_from_fn_reads_captured_state() {
        let flag = Arc::new(AtomicBool::new(false));
        let captured = Arc::clone(&flag);
        let validator = AnyValidator::from_fn(
            move || captured.load(Ordering::Relaxed),
            Some("Enter a valid input".into()),
        );

        assert!(!validator.is_valid(&0_u8));
        flag.store(true, Ordering::Relaxed);
        assert!(validator.is_valid(&0_u8));
        assert_eq!(validator.message(None).as_deref(), Some("Enter a valid input"));
    }

    #[test]
    fn test_clone_shares_inner() {
        let validator = AnyValidator::erase(Even);
        let cloned = validator.clone();
        assert_eq!(validator.is_valid(&2_i32), cloned.is_valid(&2_i32));
    }
}
