//! # formwork
//!
//! Declarative forms whose fields are checked by scoped validators and
//! whose validity is rolled up into one form-level signal.
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork::prelude::*;
//!
//! let mut form = Form::builder()
//!     .push(Field::text_line("title").validator(required()))
//!     .push(
//!         Field::numeric("price")
//!             .validators([required().into_any(), at_least(0.0_f64).into_any()]),
//!     )
//!     .build()?;
//!
//! let mut values = FormValues::new().with("title", String::from("Sunny loft"));
//! assert!(!form.render(&values).is_valid());
//!
//! values.set("price", 1_250.0_f64);
//! assert!(form.submit(&values).is_ok());
//! # Ok::<(), formwork::FormError>(())
//! ```
//!
//! ## Concepts
//!
//! - [`FormScope`](scope::FormScope): the validator and error display flag
//!   a subtree sees. Bindings derive a new scope for their subtree only.
//! - [`ValidityChannel`](channel::ValidityChannel): one pass per render,
//!   AND over the reports of the fields present in that pass.
//! - [`Component`](component::Component): fields, groups, rows, conditional
//!   content and scope bindings, appended in order by
//!   [`FormBuilder`](form::FormBuilder).

pub mod channel;
pub mod component;
pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod key;
pub mod prelude;
pub mod scope;
pub mod values;

pub use error::{FormError, Result};
pub use formwork_validator as validator;
