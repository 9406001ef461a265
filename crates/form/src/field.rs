//! Field descriptors
//!
//! A [`Field`] names one input of a form and its family. The family decides
//! the value a field holds before the user touches it, and how that value
//! is handed to the validator bound over the field:
//!
//! | Family | Unset value | Validated as |
//! |---|---|---|
//! | text line, text area | `""` | `String` |
//! | date | [`DISTANT_FUTURE`] | `NaiveDate` |
//! | date range | [`DISTANT_PAST`] ..= [`DISTANT_FUTURE`] | each end as `NaiveDate` |
//! | numeric | [`NO_NUMBER`] | `f64` |
//! | option | `None::<T>` | `Option<T>` |
//! | tags | empty `IndexSet<String>` | `IndexSet<String>` |
//! | image picker | no images | total image count as `i32` |
//!
//! Numeric fields compare against `f64` limits: `at_least(100)` infers an
//! integer limit and never matches an `f64` value. Use [`Field::at_least`],
//! [`Field::at_most`] and [`Field::between`] on numeric fields, which take
//! any limit convertible to `f64`. Image counts are `i32`, so an unsuffixed
//! `at_least(1)` bound over an image picker applies as written.

use std::any::Any;
use std::borrow::Cow;

use chrono::NaiveDate;
use formwork_validator::foundation::{
    AnyValidator, DISTANT_FUTURE, DISTANT_PAST, FormValue, IsEmpty, NO_NUMBER, ValidationError,
};
use formwork_validator::validators::{at_least, at_most, between};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentExt};
use crate::key::FieldKey;

/// Family of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    TextLine,
    TextArea,
    Date,
    DateRange,
    Numeric,
    Option,
    Tags,
    ImagePicker,
}

// ============================================================================
// COMPOSITE VALUES
// ============================================================================

/// Value of a date range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub lower: NaiveDate,
    pub upper: NaiveDate,
}

impl DateRange {
    /// A range with both ends chosen.
    #[must_use]
    pub const fn new(lower: NaiveDate, upper: NaiveDate) -> Self {
        Self { lower, upper }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(DISTANT_PAST, DISTANT_FUTURE)
    }
}

/// Empty when neither end has been chosen.
impl IsEmpty for DateRange {
    fn is_empty_value(&self) -> bool {
        self.lower.is_empty_value() && self.upper.is_empty_value()
    }
}

/// Value of an image picker: newly selected images plus images the record
/// already had, each identified by a path or URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSelection {
    pub selected: Vec<String>,
    pub existing: Vec<String>,
}

impl ImageSelection {
    /// Number of images the record will have.
    #[must_use]
    pub fn total(&self) -> usize {
        self.selected.len() + self.existing.len()
    }
}

impl ImageSelection {
    /// The total as handed to validators.
    fn count(&self) -> i32 {
        i32::try_from(self.total()).unwrap_or(i32::MAX)
    }
}

impl IsEmpty for ImageSelection {
    fn is_empty_value(&self) -> bool {
        self.total() == 0
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// Result of evaluating a field's validator against its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub valid: bool,
    pub message: Option<Cow<'static, str>>,
    pub error: Option<ValidationError>,
}

impl Evaluation {
    fn of(validator: &AnyValidator, value: &dyn FormValue) -> Self {
        match validator.validate(value) {
            Ok(()) => Self {
                valid: true,
                message: None,
                error: None,
            },
            Err(error) => Self {
                valid: false,
                message: validator.message(Some(value)),
                error: Some(error),
            },
        }
    }
}

/// A field of a form.
///
/// # Examples
///
/// ```rust
/// use formwork::field::{Field, FieldKind};
///
/// let bedrooms = Field::option::<u32>("bedrooms").label("Bedrooms");
/// assert_eq!(bedrooms.kind(), FieldKind::Option);
/// assert!(bedrooms.unset_value().is_unset());
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    key: FieldKey,
    label: Option<String>,
    kind: FieldKind,
    unset: fn() -> Box<dyn FormValue>,
}

impl Field {
    fn new(key: impl Into<FieldKey>, kind: FieldKind, unset: fn() -> Box<dyn FormValue>) -> Self {
        Self {
            key: key.into(),
            label: None,
            kind,
            unset,
        }
    }

    /// Single-line text.
    pub fn text_line(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::TextLine, || Box::new(String::new()))
    }

    /// Multi-line text.
    pub fn text_area(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::TextArea, || Box::new(String::new()))
    }

    /// A single date.
    pub fn date(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::Date, || Box::new(DISTANT_FUTURE))
    }

    /// A lower and upper date.
    pub fn date_range(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::DateRange, || Box::new(DateRange::default()))
    }

    /// A decimal number.
    pub fn numeric(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::Numeric, || Box::new(NO_NUMBER))
    }

    /// A choice among options of type `T`.
    pub fn option<T: IsEmpty + Any>(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::Option, unset_option::<T>)
    }

    /// An ordered set of free-form tags.
    pub fn tags(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::Tags, || Box::new(IndexSet::<String>::new()))
    }

    /// Images, counted together with the ones the record already has.
    pub fn image_picker(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldKind::ImagePicker, || Box::new(ImageSelection::default()))
    }

    /// Set the label shown next to the field.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The field key.
    #[must_use]
    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// The label, if one was set.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The field family.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The value the field holds before the user enters anything.
    #[must_use]
    pub fn unset_value(&self) -> Box<dyn FormValue> {
        (self.unset)()
    }

    /// Bind a lower `f64` limit over a numeric field.
    pub fn at_least(self, limit: impl Into<f64>) -> Component {
        self.validator(at_least(limit.into()))
    }

    /// Bind an upper `f64` limit over a numeric field.
    pub fn at_most(self, limit: impl Into<f64>) -> Component {
        self.validator(at_most(limit.into()))
    }

    /// Bind an inclusive `f64` range over a numeric field.
    pub fn between(self, min: impl Into<f64>, max: impl Into<f64>) -> Component {
        self.validator(between(min.into(), max.into()))
    }

    /// Evaluate `validator` against the field's value.
    ///
    /// Date ranges are valid when both ends are; their message is the lower
    /// end's, else the upper end's. Image pickers are validated on their
    /// total count. Any other value is validated as it is.
    pub fn evaluate(&self, validator: &AnyValidator, value: &dyn FormValue) -> Evaluation {
        match self.kind {
            FieldKind::DateRange => match value.downcast_ref::<DateRange>() {
                Some(range) => evaluate_range(validator, range),
                None => Evaluation::of(validator, value),
            },
            FieldKind::ImagePicker => match value.downcast_ref::<ImageSelection>() {
                Some(images) => Evaluation::of(validator, &images.count()),
                None => Evaluation::of(validator, value),
            },
            _ => Evaluation::of(validator, value),
        }
    }
}

fn unset_option<T: IsEmpty + Any>() -> Box<dyn FormValue> {
    Box::new(None::<T>)
}

fn evaluate_range(validator: &AnyValidator, range: &DateRange) -> Evaluation {
    let lower = validator.validate(&range.lower);
    let upper = validator.validate(&range.upper);
    let valid = lower.is_ok() && upper.is_ok();

    Evaluation {
        valid,
        message: if valid {
            None
        } else {
            validator
                .message(Some(&range.lower))
                .or_else(|| validator.message(Some(&range.upper)))
        },
        error: lower.err().or_else(|| upper.err()),
    }
}
