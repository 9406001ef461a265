//! Error types for validation failures
//!
//! A failed validation is a value, not an exceptional condition. This module
//! provides the structured error returned by every validator and a collection
//! type used when a whole form is checked at once.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Well-known error codes produced by the built-in validators.
pub mod codes {
    /// A required value was empty or absent.
    pub const REQUIRED: &str = "required";
    /// An optional value was `None`.
    pub const NOT_NULL: &str = "not_null";
    /// A value was below the lower limit.
    pub const AT_LEAST: &str = "at_least";
    /// A value was above the upper limit.
    pub const AT_MOST: &str = "at_most";
    /// A value was outside an inclusive range.
    pub const OUT_OF_RANGE: &str = "out_of_range";
    /// The `never` validator rejected the value.
    pub const NEVER: &str = "never";
    /// An input-independent predicate returned `false`.
    pub const PREDICATE: &str = "predicate";
    /// An erased validator received a value of a foreign type.
    pub const TYPE_MISMATCH: &str = "type_mismatch";
}

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```rust
/// use formwork_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("at_least", "Must be at least 5")
///     .with_field("price")
///     .with_param("limit", "5");
///
/// assert_eq!(error.param("limit"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "required", "at_least", "type_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message, suitable for display next to the field.
    pub message: Cow<'static, str>,

    /// Key of the field this error belongs to, once known.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message template, in insertion order
    /// (typically 0-2 params).
    pub params: Params,

    /// Errors this one wraps (e.g. the original error of a message override).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field key for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns `true` if the error comes from a type mismatch at an erasure
    /// boundary rather than from a business rule.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.code == codes::TYPE_MISMATCH
    }

    /// Converts the error to a JSON structure.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::REQUIRED, message)
    }

    /// Creates a "not_null" error.
    pub fn not_null(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(codes::NOT_NULL, message)
    }

    /// Creates an "at_least" error.
    pub fn at_least<T: fmt::Display>(message: impl Into<Cow<'static, str>>, limit: &T) -> Self {
        Self::new(codes::AT_LEAST, message).with_param("limit", limit.to_string())
    }

    /// Creates an "at_most" error.
    pub fn at_most<T: fmt::Display>(message: impl Into<Cow<'static, str>>, limit: &T) -> Self {
        Self::new(codes::AT_MOST, message).with_param("limit", limit.to_string())
    }

    /// Creates an "out_of_range" error.
    pub fn out_of_range<T: fmt::Display>(
        message: impl Into<Cow<'static, str>>,
        low: &T,
        high: &T,
    ) -> Self {
        Self::new(codes::OUT_OF_RANGE, message)
            .with_param("low", low.to_string())
            .with_param("high", high.to_string())
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(codes::TYPE_MISMATCH, "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Produced when several fields are checked together, e.g. on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error recorded for `field`.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field.as_deref() == Some(field))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
