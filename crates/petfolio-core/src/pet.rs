//! Pet use cases.
//!
//! The registry has no persistence layer yet, so the lookup use case is a
//! stub: it builds a record from fixed placeholder values and echoes the
//! requested identifier back. When a real store is added, `get_by_id`
//! should return a `Result` so a missing pet can be distinguished from a
//! found one; today the operation cannot fail by construction.

use chrono::NaiveDate;

use crate::types::{PetRecord, PetType};

/// Placeholder display name used until a real store exists.
pub const PLACEHOLDER_NAME: &str = "Cachorro";

/// Placeholder birth date used until a real store exists (2023-01-01).
pub fn placeholder_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid calendar date")
}

/// Fetches a pet by identifier.
///
/// Pure and deterministic: the returned record's `id` equals the input,
/// every other field is a fixed placeholder. Any `i64` is accepted,
/// including zero, negative values, and the extremes; no existence check
/// is performed because there is nothing to check against.
///
/// # Example
///
/// ```rust
/// use petfolio_core::get_by_id;
///
/// let record = get_by_id(7);
/// assert_eq!(record.id, 7);
/// assert_eq!(record.name, "Cachorro");
/// ```
pub fn get_by_id(id: i64) -> PetRecord {
    PetRecord {
        id,
        name: PLACEHOLDER_NAME.to_string(),
        pet_type: PetType::Dog,
        birth_date: placeholder_birth_date(),
    }
}
