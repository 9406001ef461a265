//! Component tree
//!
//! A form is an ordered list of [`Component`]s. Leaves are fields; the other
//! variants arrange fields (groups, rows), decide whether they are present
//! in a pass (conditionals), or bind scope for a subtree (validators and
//! the error display flag).
//!
//! # Examples
//!
//! ```rust
//! use formwork::prelude::*;
//!
//! let form = Form::builder()
//!     .push(Field::text_line("title").label("Title").validator(required()))
//!     .push(
//!         Group::new([
//!             Field::numeric("price").into(),
//!             Field::option::<u32>("bedrooms").into(),
//!         ])
//!         .title("Details")
//!         .validators([required().into_any(), at_least(0.0_f64).into_any()]),
//!     )
//!     .build()
//!     .unwrap();
//! assert_eq!(form.components().len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use formwork_validator::combinators::many;
use formwork_validator::foundation::{AnyValidator, IntoAnyValidator};

use crate::field::Field;
use crate::values::FormValues;

/// Predicate over the current values of a form.
pub type ValuesPredicate = Arc<dyn Fn(&FormValues) -> bool + Send + Sync>;

/// Builds a validator from the current values of a form.
pub type ValidatorFactory = Arc<dyn Fn(&FormValues) -> AnyValidator + Send + Sync>;

/// A scope binding applied to a subtree.
#[derive(Clone)]
pub enum Binding {
    /// Fields in the subtree are validated by this validator.
    Validator(AnyValidator),
    /// Fields in the subtree are validated by the validator the factory
    /// builds from the values of the current pass.
    Derived(ValidatorFactory),
    /// Invalid fields in the subtree show (or hide) their message.
    ValidationErrorsVisible(bool),
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validator(validator) => f.debug_tuple("Validator").field(validator).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
            Self::ValidationErrorsVisible(visible) => f
                .debug_tuple("ValidationErrorsVisible")
                .field(visible)
                .finish(),
        }
    }
}

/// A node of the component tree.
#[derive(Clone)]
pub enum Component {
    /// A field, reporting its validity in every pass it is present in.
    Field(Field),
    /// Titled children with an optional group-level check.
    Group(Group),
    /// Two components side by side. Layout only.
    Row(Box<Component>, Box<Component>),
    /// A component present only while the predicate holds.
    Conditional {
        when: ValuesPredicate,
        content: Box<Component>,
    },
    /// A component whose subtree sees a derived scope.
    Scoped {
        binding: Binding,
        content: Box<Component>,
    },
}

impl Component {
    /// Lay two components out side by side.
    pub fn row(left: impl Into<Self>, right: impl Into<Self>) -> Self {
        Self::Row(Box::new(left.into()), Box::new(right.into()))
    }

    /// Visit every field in the subtree, present or not, in order.
    pub fn for_each_field<'a>(&'a self, f: &mut impl FnMut(&'a Field)) {
        match self {
            Self::Field(field) => f(field),
            Self::Group(group) => group.children.iter().for_each(|child| child.for_each_field(f)),
            Self::Row(left, right) => {
                left.for_each_field(f);
                right.for_each_field(f);
            }
            Self::Conditional { content, .. } | Self::Scoped { content, .. } => {
                content.for_each_field(f);
            }
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Self::Group(group) => f.debug_tuple("Group").field(group).finish(),
            Self::Row(left, right) => f.debug_tuple("Row").field(left).field(right).finish(),
            Self::Conditional { content, .. } => f
                .debug_struct("Conditional")
                .field("content", content)
                .finish_non_exhaustive(),
            Self::Scoped { binding, content } => f
                .debug_struct("Scoped")
                .field("binding", binding)
                .field("content", content)
                .finish(),
        }
    }
}

impl From<Field> for Component {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Group> for Component {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

// ============================================================================
// GROUP
// ============================================================================

/// A titled set of components.
///
/// A group may carry a check over the whole form's values (for example
/// "the end date follows the start date"). While the check fails, the
/// group itself reports invalid and shows a message, and its subtree is
/// bound to `never`: fields without a nearer binding report invalid.
#[derive(Clone, Default)]
pub struct Group {
    pub(crate) title: Option<String>,
    pub(crate) check: Option<ValuesPredicate>,
    pub(crate) children: Vec<Component>,
}

impl Group {
    /// Create a group from its children.
    pub fn new(children: impl IntoIterator<Item = Component>) -> Self {
        Self {
            title: None,
            check: None,
            children: children.into_iter().collect(),
        }
    }

    /// Set the group title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the group-level check.
    #[must_use]
    pub fn check(mut self, check: impl Fn(&FormValues) -> bool + Send + Sync + 'static) -> Self {
        self.check = Some(Arc::new(check));
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The group title, if any.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The children, in order.
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Whether the group-level check holds for `values`. Groups without a
    /// check always pass.
    #[must_use]
    pub fn passes(&self, values: &FormValues) -> bool {
        self.check.as_ref().is_none_or(|check| check(values))
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("title", &self.title)
            .field("check", &self.check.is_some())
            .field("children", &self.children)
            .finish()
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Extension trait providing scope bindings and conditions for anything
/// that converts into a [`Component`].
///
/// Automatically implemented for `Component`, `Field` and `Group`.
pub trait ComponentExt: Into<Component> + Sized {
    /// Bind a validator over this subtree.
    fn validator(self, validator: impl IntoAnyValidator) -> Component {
        self.bind(Binding::Validator(validator.into_any()))
    }

    /// Bind several validators over this subtree, checked in order. The
    /// first failing one provides the message.
    fn validators(self, validators: impl IntoIterator<Item = AnyValidator>) -> Component {
        self.validator(many(validators))
    }

    /// Bind a validator built from the form's values on every pass, so its
    /// limits can follow other fields.
    ///
    /// ```rust
    /// use formwork::prelude::*;
    ///
    /// let move_in = Field::date("move_in").validator_with(|values| {
    ///     let latest = values
    ///         .get_as::<DateRange>("lease")
    ///         .map_or(DISTANT_FUTURE, |lease| lease.lower);
    ///     at_most(latest)
    /// });
    /// # let _ = move_in;
    /// ```
    fn validator_with<F, V>(self, factory: F) -> Component
    where
        F: Fn(&FormValues) -> V + Send + Sync + 'static,
        V: IntoAnyValidator,
    {
        self.bind(Binding::Derived(Arc::new(move |values: &FormValues| {
            factory(values).into_any()
        })))
    }

    /// Show or hide validation messages in this subtree.
    fn validation_errors_visible(self, visible: bool) -> Component {
        self.bind(Binding::ValidationErrorsVisible(visible))
    }

    /// Render this subtree only while `predicate` holds.
    fn when(self, predicate: impl Fn(&FormValues) -> bool + Send + Sync + 'static) -> Component {
        Component::Conditional {
            when: Arc::new(predicate),
            content: Box::new(self.into()),
        }
    }

    /// Apply a binding to this subtree.
    fn bind(self, binding: Binding) -> Component {
        Component::Scoped {
            binding,
            content: Box::new(self.into()),
        }
    }
}

impl<T: Into<Component>> ComponentExt for T {}
