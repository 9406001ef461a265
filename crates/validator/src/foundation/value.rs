//! Field values and their emptiness sentinels
//!
//! Several field types cannot use `Option::None` to mean "nothing entered"
//! because the UI control always holds a value. Those types use a sentinel
//! instead: an empty string, NaN for numbers, or an extreme date. [`IsEmpty`]
//! names the sentinel for each type, and [`FormValue`] is the erased view of
//! any such value that validators receive once types are mixed in one form.

use std::any::Any;
use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexSet;

/// Date standing in for "no lower date chosen".
pub const DISTANT_PAST: NaiveDate = NaiveDate::MIN;

/// Date standing in for "no date chosen".
pub const DISTANT_FUTURE: NaiveDate = NaiveDate::MAX;

/// Number standing in for "no number entered".
pub const NO_NUMBER: f64 = f64::NAN;

// ============================================================================
// EMPTINESS
// ============================================================================

/// Per-type predicate for the "empty / unset" sentinel.
///
/// Only the `required` family consults this. Sentinels are chosen so that a
/// user can never enter them: NaN cannot be typed into a numeric field and
/// the extreme dates lie outside any picker range.
pub trait IsEmpty {
    /// Returns `true` if the value is the unset sentinel for its type.
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl IsEmpty for f64 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl IsEmpty for f32 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl IsEmpty for NaiveDate {
    fn is_empty_value(&self) -> bool {
        *self == DISTANT_PAST || *self == DISTANT_FUTURE
    }
}

impl IsEmpty for NaiveDateTime {
    fn is_empty_value(&self) -> bool {
        *self == Self::MIN || *self == Self::MAX
    }
}

impl IsEmpty for DateTime<Utc> {
    fn is_empty_value(&self) -> bool {
        *self == Self::MIN_UTC || *self == Self::MAX_UTC
    }
}

/// `None` is empty, and so is `Some` around a value that is itself the
/// sentinel of its type (`Some(String::new())`, `Some(DISTANT_FUTURE)`).
impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(|value| value.is_empty_value())
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for IndexSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsEmpty for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// ============================================================================
// ERASED VALUE
// ============================================================================

/// A field value of unknown concrete type.
///
/// Blanket-implemented for every `IsEmpty + Any` type, so any value with a
/// defined sentinel can be handed to an erased validator as
/// `&dyn FormValue`.
pub trait FormValue: Any {
    /// Returns `true` if the value is its type's unset sentinel.
    fn is_unset(&self) -> bool;

    /// Upcasts to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn value_type_name(&self) -> &'static str;
}

impl<T: IsEmpty + Any> FormValue for T {
    fn is_unset(&self) -> bool {
        self.is_empty_value()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn FormValue {
    /// Returns the value as `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns `true` if the concrete type is `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl std::fmt::Debug for dyn FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValue")
            .field("type", &self.value_type_name())
            .field("unset", &self.is_unset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_string(Box::new(String::new()), true)]
    #[case::text(Box::new(String::from("abc")), false)]
    #[case::whitespace_is_not_trimmed(Box::new(String::from("  ")), false)]
    #[case::nan(Box::new(NO_NUMBER), true)]
    #[case::zero(Box::new(0.0_f64), false)]
    #[case::distant_past(Box::new(DISTANT_PAST), true)]
    #[case::distant_future(Box::new(DISTANT_FUTURE), true)]
    #[case::real_date(Box::new(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()), false)]
    #[case::none(Box::new(None::<i32>), true)]
    #[case::some_zero(Box::new(Some(0_i32)), false)]
    #[case::some_empty_string(Box::new(Some(String::new())), true)]
    #[case::some_distant_future(Box::new(Some(DISTANT_FUTURE)), true)]
    #[case::some_nested_none(Box::new(Some(None::<u8>)), true)]
    #[case::some_text(Box::new(Some(String::from("x"))), false)]
    #[case::empty_set(Box::new(IndexSet::<String>::new()), true)]
    #[case::count(Box::new(0_usize), false)]
    fn test_sentinels(#[case] value: Box<dyn FormValue>, #[case] unset: bool) {
        assert_eq!(value.is_unset(), unset);
    }

    #[test]
    fn test_downcast() {
        let value: Box<dyn FormValue> = Box::new(String::from("hello"));
        assert!(value.is::<String>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert!(value.downcast_ref::<i32>().is_none());
        assert!(value.value_type_name().contains("String"));
    }

    #[test]
    fn test_static_str_is_a_form_value() {
        let value: &dyn FormValue = &"";
        assert!(value.is_unset());
    }
}
