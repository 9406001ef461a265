//! Prelude module for convenient imports.
//!
//! Brings in the form types together with everything from the validator
//! prelude, so a form can be declared with a single import.

pub use formwork_validator::prelude::*;

pub use crate::channel::{FormState, PassId, ValidityChannel};
pub use crate::component::{Binding, Component, ComponentExt, Group};
pub use crate::config::FormConfig;
pub use crate::error::FormError;
pub use crate::field::{DateRange, Field, FieldKind, ImageSelection};
pub use crate::form::{FieldOutcome, Form, FormBuilder, FormSnapshot, GroupOutcome};
pub use crate::key::FieldKey;
pub use crate::scope::FormScope;
pub use crate::values::FormValues;
