//! Form configuration

use formwork_validator::validators::{NOT_NULL_MESSAGE, NotNull, REQUIRED_MESSAGE, Required};
use serde::{Deserialize, Serialize};

/// Message a failing group shows when its scope validator has none.
pub const GROUP_FALLBACK_MESSAGE: &str = "Enter a valid input";

/// Form-wide defaults
///
/// ```toml
/// show_validation_errors = false
/// group_fallback_message = "Enter a valid input"
/// required_message = "Required field"
/// not_null_message = "Choose an option"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Show validation messages before the first submit
    pub show_validation_errors: bool,

    /// Message of a failing group-level check
    pub group_fallback_message: String,

    /// Message of validators built with [`FormConfig::required`]
    pub required_message: String,

    /// Message of validators built with [`FormConfig::not_null`]
    pub not_null_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            show_validation_errors: false,
            group_fallback_message: GROUP_FALLBACK_MESSAGE.to_owned(),
            required_message: REQUIRED_MESSAGE.to_owned(),
            not_null_message: NOT_NULL_MESSAGE.to_owned(),
        }
    }
}

impl FormConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// A `required` validator carrying the configured message.
    #[must_use]
    pub fn required(&self) -> Required {
        Required::new(self.required_message.clone())
    }

    /// A `not_null` validator carrying the configured message.
    #[must_use]
    pub fn not_null<T>(&self) -> NotNull<T> {
        NotNull::new(self.not_null_message.clone())
    }
}
