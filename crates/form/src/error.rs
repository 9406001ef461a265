use crate::key::FieldKey;

/// Error type for building and configuring forms.
///
/// Validation failures are not errors of this kind: they are values
/// (`ValidationError`) carried by the snapshot of a pass.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Field key does not meet naming rules.
    #[error("invalid field key `{key}`: {reason}")]
    InvalidKey { key: String, reason: String },

    /// Two fields in one form share a key.
    #[error("duplicate field key `{key}`")]
    DuplicateKey { key: FieldKey },

    /// Form configuration could not be parsed.
    #[cfg(feature = "toml")]
    #[error("invalid form configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl FormError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidKey { .. } => "FORM_INVALID_KEY",
            Self::DuplicateKey { .. } => "FORM_DUPLICATE_KEY",
            #[cfg(feature = "toml")]
            Self::Config(_) => "FORM_CONFIG",
        }
    }
}

/// Result alias for form operations.
pub type Result<T, E = FormError> = std::result::Result<T, E>;
