//! Form root
//!
//! [`Form`] owns the component list and the validity channel. Each call to
//! [`Form::render`] is one pass: the component tree is walked with the
//! current values, every present field evaluates the validator its scope
//! binds and reports into the pass, and the pass collapses into the
//! [`FormState`] that a submit control reads.

use std::borrow::Cow;
use std::collections::HashSet;

use formwork_validator::foundation::{FormValue, IntoAnyValidator, ValidationError, ValidationErrors, codes};
use formwork_validator::validators::never;
use serde::Serialize;
use tracing::{debug, trace};

use crate::channel::{FormState, Pass, ValidityChannel};
use crate::component::{Binding, Component, Group};
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::key::FieldKey;
use crate::scope::FormScope;
use crate::values::FormValues;

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Outcome of one field in a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOutcome {
    pub key: FieldKey,
    pub valid: bool,
    /// Message to display. Present only when the field is invalid and its
    /// scope shows validation errors.
    pub message: Option<Cow<'static, str>>,
    /// Why the field is invalid, whether or not it is displayed.
    pub error: Option<ValidationError>,
}

/// Outcome of a group-level check in a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupOutcome {
    pub title: Option<String>,
    pub valid: bool,
    /// Message to display. Present only when the check fails and its scope
    /// shows validation errors.
    pub message: Option<Cow<'static, str>>,
}

/// Everything one pass computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot {
    pub state: FormState,
    pub fields: Vec<FieldOutcome>,
    pub groups: Vec<GroupOutcome>,
}

impl FormSnapshot {
    /// Whether the whole form is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state.is_valid
    }

    /// Outcome of the field with the given key, if it was present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldOutcome> {
        self.fields.iter().find(|outcome| outcome.key.as_str() == key)
    }

    /// Messages currently displayed, by field.
    pub fn messages(&self) -> impl Iterator<Item = (&FieldKey, &str)> {
        self.fields
            .iter()
            .filter_map(|outcome| Some((&outcome.key, outcome.message.as_deref()?)))
    }

    /// Errors of every invalid field and failing group check.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        let fields = self.fields.iter().filter_map(|outcome| outcome.error.clone());
        let groups = self.groups.iter().filter(|group| !group.valid).map(|group| {
            let message = group.message.clone().unwrap_or(Cow::Borrowed("Group check failed"));
            let error = ValidationError::new(codes::PREDICATE, message);
            match &group.title {
                Some(title) => error.with_field(title.clone()),
                None => error,
            }
        });
        fields.chain(groups).collect()
    }
}

// ============================================================================
// FORM
// ============================================================================

/// A form: components, their validity channel, and the error display flag.
#[derive(Debug)]
pub struct Form {
    components: Vec<Component>,
    channel: ValidityChannel,
    config: FormConfig,
    show_validation_errors: bool,
}

impl Form {
    /// Start building a form.
    #[must_use]
    pub fn builder() -> FormBuilder {
        FormBuilder::default()
    }

    /// Run one pass over the form with the given values.
    ///
    /// Fields missing from `values` are evaluated against their unset
    /// value. Fields hidden by a condition do not take part.
    pub fn render(&mut self, values: &FormValues) -> FormSnapshot {
        let root = FormScope::root(self.show_validation_errors);
        let mut renderer = Renderer {
            values,
            config: &self.config,
            pass: self.channel.begin(),
            fields: Vec::new(),
            groups: Vec::new(),
        };
        for component in &self.components {
            renderer.visit(component, &root);
        }
        renderer.finish()
    }

    /// State of the last pass.
    #[must_use]
    pub fn state(&self) -> FormState {
        self.channel.state()
    }

    /// Show validation errors from now on and run a pass.
    ///
    /// Returns the new state if the form is valid, or the errors of every
    /// invalid field otherwise.
    pub fn submit(&mut self, values: &FormValues) -> std::result::Result<FormState, ValidationErrors> {
        self.show_validation_errors = true;
        let snapshot = self.render(values);
        debug!(pass = %snapshot.state.pass, valid = snapshot.is_valid(), "form submitted");

        if snapshot.is_valid() {
            Ok(snapshot.state)
        } else {
            Err(snapshot.errors())
        }
    }

    /// Whether the root scope currently shows validation errors.
    #[must_use]
    pub fn shows_validation_errors(&self) -> bool {
        self.show_validation_errors
    }

    /// Show or hide validation errors at the root scope.
    pub fn set_show_validation_errors(&mut self, visible: bool) {
        self.show_validation_errors = visible;
    }

    /// Run `subscriber` whenever the form's validity flips.
    pub fn subscribe(&mut self, subscriber: impl FnMut(FormState) + Send + 'static) {
        self.channel.subscribe(subscriber);
    }

    /// The component list, in order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The form configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

struct Renderer<'v, 'c> {
    values: &'v FormValues,
    config: &'v FormConfig,
    pass: Pass<'c>,
    fields: Vec<FieldOutcome>,
    groups: Vec<GroupOutcome>,
}

impl Renderer<'_, '_> {
    fn visit(&mut self, component: &Component, scope: &FormScope) {
        match component {
            Component::Field(field) => self.field(field, scope),
            Component::Group(group) => self.group(group, scope),
            Component::Row(left, right) => {
                self.visit(left, scope);
                self.visit(right, scope);
            }
            Component::Conditional { when, content } => {
                if when(self.values) {
                    self.visit(content, scope);
                } else {
                    trace!(pass = %self.pass.id(), "conditional content absent");
                }
            }
            Component::Scoped { binding, content } => {
                let inner = match binding {
                    Binding::Validator(validator) => scope.with_validator(validator.clone()),
                    Binding::Derived(factory) => scope.with_validator(factory(self.values)),
                    Binding::ValidationErrorsVisible(visible) => {
                        scope.with_validation_errors_visible(*visible)
                    }
                };
                self.visit(content, &inner);
            }
        }
    }

    fn field(&mut self, field: &Field, scope: &FormScope) {
        let unset;
        let value: &dyn FormValue = match self.values.get(field.key().as_str()) {
            Some(value) => value,
            None => {
                unset = field.unset_value();
                unset.as_ref()
            }
        };

        let evaluation = field.evaluate(scope.validator(), value);
        self.pass.report(field.key(), evaluation.valid);

        let shown = !evaluation.valid && scope.shows_validation_errors();
        self.fields.push(FieldOutcome {
            key: field.key().clone(),
            valid: evaluation.valid,
            message: if shown { evaluation.message } else { None },
            error: evaluation
                .error
                .map(|error| error.with_field(field.key().to_string())),
        });
    }

    fn group(&mut self, group: &Group, scope: &FormScope) {
        let valid = group.passes(self.values);
        self.pass.report_group(group.title_text(), valid);

        let message = (!valid && scope.shows_validation_errors()).then(|| {
            scope
                .validator()
                .message(None)
                .unwrap_or_else(|| Cow::Owned(self.config.group_fallback_message.clone()))
        });
        self.groups.push(GroupOutcome {
            title: group.title.clone(),
            valid,
            message,
        });

        let inner = if valid {
            scope.clone()
        } else {
            scope.with_validator(never().into_any())
        };
        for child in group.children() {
            self.visit(child, &inner);
        }
    }

    fn finish(self) -> FormSnapshot {
        FormSnapshot {
            state: self.pass.finish(),
            fields: self.fields,
            groups: self.groups,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Form`]: components are appended in display order.
#[derive(Debug, Default)]
pub struct FormBuilder {
    components: Vec<Component>,
    config: FormConfig,
}

impl FormBuilder {
    /// Append a component.
    #[must_use]
    pub fn push(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Append several components.
    #[must_use]
    pub fn extend(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    /// Use this configuration instead of the default.
    #[must_use]
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the form.
    ///
    /// Fails if a field key is empty or used by more than one field,
    /// including fields in mutually exclusive conditionals.
    pub fn build(self) -> Result<Form> {
        let mut seen = HashSet::new();
        let mut failure = None;
        for component in &self.components {
            component.for_each_field(&mut |field: &Field| {
                if failure.is_some() {
                    return;
                }
                let key = field.key();
                if key.as_str().trim().is_empty() {
                    failure = Some(FormError::InvalidKey {
                        key: key.to_string(),
                        reason: "key must not be blank".into(),
                    });
                } else if !seen.insert(key.clone()) {
                    failure = Some(FormError::DuplicateKey { key: key.clone() });
                }
            });
        }
        if let Some(err) = failure {
            return Err(err);
        }

        debug!(
            fields = seen.len(),
            components = self.components.len(),
            "form built"
        );
        Ok(Form {
            show_validation_errors: self.config.show_validation_errors,
            components: self.components,
            channel: ValidityChannel::new(),
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentExt;
    use formwork_validator::validators::required;
    use pretty_assertions::assert_eq;

    fn title_form() -> Form {
        Form::builder()
            .push(Field::text_line("title").validator(required()))
            .build()
            .unwrap()
    }

    #[test]
    fn missing_value_uses_unset_sentinel() {
        let mut form = title_form();
        let snapshot = form.render(&FormValues::new());
        assert!(!snapshot.is_valid());
        assert_eq!(
            snapshot.field("title").and_then(|o| o.error.as_ref()).map(|e| e.code.as_ref()),
            Some(codes::REQUIRED)
        );
    }

    #[test]
    fn message_hidden_until_submit() {
        let mut form = title_form();
        let values = FormValues::new().with("title", String::new());

        let snapshot = form.render(&values);
        assert_eq!(snapshot.field("title").and_then(|o| o.message.clone()), None);

        let errors = form.submit(&values).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("title").map(|e| e.message.as_ref()), Some("Required field"));
        assert!(form.shows_validation_errors());

        let snapshot = form.render(&values);
        assert_eq!(
            snapshot.messages().collect::<Vec<_>>(),
            [(&FieldKey::from("title"), "Required field")]
        );
    }

    #[test]
    fn submit_valid_form() {
        let mut form = title_form();
        let values = FormValues::new().with("title", String::from("Sunny loft"));
        let state = form.submit(&values).unwrap();
        assert!(state.is_valid);
        assert_eq!(form.state(), state);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = Form::builder()
            .push(Field::text_line("title"))
            .push(Field::text_area("title").when(|_| true))
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "FORM_DUPLICATE_KEY");
    }

    #[test]
    fn blank_key_rejected() {
        let err = Form::builder().push(Field::numeric(" ")).build().unwrap_err();
        assert_eq!(err.code(), "FORM_INVALID_KEY");
    }

    #[test]
    fn config_sets_initial_display_flag() {
        let config = FormConfig {
            show_validation_errors: true,
            ..FormConfig::default()
        };
        let mut form = Form::builder()
            .config(config)
            .push(Field::text_line("title").validator(required()))
            .build()
            .unwrap();
        let snapshot = form.render(&FormValues::new());
        assert_eq!(
            snapshot.field("title").and_then(|o| o.message.as_deref()),
            Some("Required field")
        );
    }
}
