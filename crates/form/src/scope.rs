//! Scoped form context
//!
//! A [`FormScope`] is what every component sees while a pass walks the
//! component tree: the validator bound by the nearest enclosing binding,
//! and whether validation errors are currently shown. Bindings never
//! mutate a scope. They derive a new one that is passed down to their
//! subtree only, so siblings keep seeing their parent's scope.

use formwork_validator::foundation::{AnyValidator, IntoAnyValidator};
use formwork_validator::validators::always;
use tracing::trace;

/// Per-subtree form context.
#[derive(Debug, Clone)]
pub struct FormScope {
    validator: AnyValidator,
    show_validation_errors: bool,
}

impl FormScope {
    /// The scope at the root of a form: no validator bound, so every field
    /// sees `always`.
    #[must_use]
    pub fn root(show_validation_errors: bool) -> Self {
        Self {
            validator: always().into_any(),
            show_validation_errors,
        }
    }

    /// The validator bound to this scope.
    #[must_use]
    pub fn validator(&self) -> &AnyValidator {
        &self.validator
    }

    /// Whether invalid fields in this scope should display their message.
    #[must_use]
    pub fn shows_validation_errors(&self) -> bool {
        self.show_validation_errors
    }

    /// Derive the scope of a subtree bound to `validator`.
    #[must_use]
    pub fn with_validator(&self, validator: AnyValidator) -> Self {
        trace!(?validator, "scope bound to validator");
        Self {
            validator,
            show_validation_errors: self.show_validation_errors,
        }
    }

    /// Derive the scope of a subtree with the display flag overridden.
    #[must_use]
    pub fn with_validation_errors_visible(&self, visible: bool) -> Self {
        trace!(visible, "scope display flag overridden");
        Self {
            validator: self.validator.clone(),
            show_validation_errors: visible,
        }
    }
}

impl Default for FormScope {
    fn default() -> Self {
        Self::root(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_validator::validators::{never, required};

    #[test]
    fn root_binds_always() {
        let scope = FormScope::default();
        assert!(scope.validator().is_valid(&String::new()));
        assert!(!scope.shows_validation_errors());
    }

    #[test]
    fn nested_binding_wins_and_does_not_leak() {
        let outer = FormScope::root(false).with_validator(required().into_any());
        let inner = outer.with_validator(never().into_any());
        let sibling = outer.clone();

        let value = String::from("filled");
        assert!(!inner.validator().is_valid(&value));
        assert!(sibling.validator().is_valid(&value));
        assert!(outer.validator().is_valid(&value));
    }

    #[test]
    fn display_flag_is_scoped() {
        let outer = FormScope::root(true);
        let hidden = outer.with_validation_errors_visible(false);

        assert!(outer.shows_validation_errors());
        assert!(!hidden.shows_validation_errors());
        assert!(hidden.with_validator(required().into_any()).validator().message(None).is_some());
        assert!(!hidden.with_validator(required().into_any()).shows_validation_errors());
    }
}
