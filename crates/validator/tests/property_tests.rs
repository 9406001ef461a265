//! Property-based tests for formwork-validator.

use formwork_validator::prelude::*;
use proptest::prelude::*;

/// Accepts even numbers; a typed validator used to exercise erasure.
struct Even;

impl Validate for Even {
    type Input = i64;

    fn validate(&self, input: &i64) -> Result<(), ValidationError> {
        if input % 2 == 0 {
            Ok(())
        } else {
            Err(ValidationError::new("even", "Must be even"))
        }
    }
}

// ============================================================================
// ERASURE: erased(v).is_valid(x) == v.is_valid(x) for the wrapped type
// ============================================================================

proptest! {
    #[test]
    fn erase_agrees_with_wrapped(n in any::<i64>()) {
        let erased = Even.erase();
        prop_assert_eq!(erased.is_valid(&n), Even.is_valid(&n));
        prop_assert_eq!(erased.message(Some(&n)), Even.message(Some(&n)));
    }

    #[test]
    fn erase_rejects_foreign_types(n in any::<i32>(), s in ".{0,20}") {
        let erased = Even.erase();
        prop_assert!(!erased.is_valid(&n));
        prop_assert!(!erased.is_valid(&s));
        prop_assert!(!erased.is_valid(&Some(i64::from(n))));
        prop_assert!(erased.validate(&s).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn erased_not_null_agrees_with_typed(value in proptest::option::of(any::<u16>())) {
        let typed = not_null::<u16>();
        let erased = not_null::<u16>().erase();
        prop_assert_eq!(erased.is_valid(&value), typed.is_valid(&value));
    }
}

// ============================================================================
// MANY: conjunction law and message precedence
// ============================================================================

proptest! {
    #[test]
    fn many_is_conjunction(n in -50_i64..50, low in -50_i64..50, high in -50_i64..50) {
        let validators = [
            at_least(low).into_any(),
            at_most(high).into_any(),
            Even.erase(),
        ];
        let expected = validators.iter().all(|v| v.is_valid(&n));
        prop_assert_eq!(many(validators).is_valid(&n), expected);
    }

    #[test]
    fn many_message_prefers_first_invalid(n in -50_i64..50, limit in -50_i64..50) {
        let first = at_least(limit).into_any();
        let second = Even.erase();
        let combined = many([first.clone(), second.clone()]);

        let message = combined.message(Some(&n));
        if !first.is_valid(&n) {
            prop_assert_eq!(message, first.message(Some(&n)));
        } else if !second.is_valid(&n) {
            prop_assert_eq!(message, second.message(Some(&n)));
        } else {
            prop_assert_eq!(message, None);
        }
    }

    #[test]
    fn many_order_never_changes_validity(n in any::<i64>(), limit in any::<i64>()) {
        let forward = many([at_least(limit).into_any(), Even.erase()]);
        let backward = many([Even.erase(), at_least(limit).into_any()]);
        prop_assert_eq!(forward.is_valid(&n), backward.is_valid(&n));
    }
}

// ============================================================================
// COMPARISON: agreement with the ordering, fail-open on mismatch
// ============================================================================

proptest! {
    #[test]
    fn at_least_matches_ordering(n in any::<i32>(), limit in any::<i32>()) {
        prop_assert_eq!(at_least(limit).is_valid(&n), n >= limit);
    }

    #[test]
    fn between_matches_bounds(n in any::<u32>(), a in any::<u32>(), b in any::<u32>()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(between(low, high).is_valid(&n), low <= n && n <= high);
    }

    #[test]
    fn comparison_fails_open(s in ".{0,20}", limit in any::<i32>()) {
        prop_assert!(at_least(limit).is_valid(&s));
        prop_assert!(at_most(limit).is_valid(&s));
        prop_assert!(between(limit, limit).is_valid(&s));
    }
}

// ============================================================================
// REQUIRED: only the sentinel is rejected
// ============================================================================

proptest! {
    #[test]
    fn required_rejects_only_empty_text(s in ".{0,20}") {
        prop_assert_eq!(required().is_valid(&s), !s.is_empty());
    }

    #[test]
    fn required_accepts_every_real_number(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert!(required().is_valid(&x));
    }

    #[test]
    fn message_is_deterministic(n in any::<i64>()) {
        let v = many([required().into_any(), at_least(0_i64).into_any()]);
        prop_assert_eq!(v.message(Some(&n)), v.message(Some(&n)));
    }
}
