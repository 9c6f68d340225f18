//! Property-based tests for the pet lookup use case.
//!
//! These tests verify the input-invariance contract of `get_by_id` across
//! the whole `i64` identifier space using proptest.

use petfolio_core::{get_by_id, placeholder_birth_date, PetType, PLACEHOLDER_NAME};
use proptest::prelude::*;

// ============================================================================
// Property: the identifier is echoed back exactly
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn id_is_echoed(id in any::<i64>()) {
        prop_assert_eq!(get_by_id(id).id, id);
    }
}

// ============================================================================
// Property: every other field is a fixed placeholder
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn placeholder_fields_ignore_input(id in any::<i64>()) {
        let record = get_by_id(id);

        prop_assert_eq!(record.name, PLACEHOLDER_NAME);
        prop_assert_eq!(record.pet_type, PetType::Dog);
        prop_assert_eq!(record.birth_date, placeholder_birth_date());
    }

    #[test]
    fn records_differ_only_in_id(a in any::<i64>(), b in any::<i64>()) {
        let left = get_by_id(a);
        let right = get_by_id(b);

        prop_assert_eq!(left.name, right.name);
        prop_assert_eq!(left.pet_type, right.pet_type);
        prop_assert_eq!(left.birth_date, right.birth_date);
    }
}
