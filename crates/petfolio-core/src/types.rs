use chrono::NaiveDate;

// ============================================================================
// Species Tag
// ============================================================================

/// Species tag for a registered pet.
///
/// This enum is shared between the server and future clients so the wire
/// representation stays consistent. Serializes as the PascalCase variant
/// name (`"Dog"`, `"Cat"`, `"Bird"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum PetType {
    /// A dog.
    #[default]
    Dog,
    /// A cat.
    Cat,
    /// A bird.
    Bird,
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Dog => write!(f, "Dog"),
            PetType::Cat => write!(f, "Cat"),
            PetType::Bird => write!(f, "Bird"),
        }
    }
}

// ============================================================================
// Pet Record
// ============================================================================

/// The data shape returned for a pet lookup.
///
/// Serialized as camelCase JSON:
///
/// ```json
/// { "id": 1, "name": "Cachorro", "petType": "Dog", "birthDate": "2023-01-01" }
/// ```
///
/// The identifier is externally supplied and not validated against any
/// store; no storage exists yet, so records have no lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PetRecord {
    /// Pet identifier, echoed from the caller.
    pub id: i64,
    /// Display name of the pet.
    pub name: String,
    /// Species tag.
    pub pet_type: PetType,
    /// Birth date (ISO-8601 calendar date).
    pub birth_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_type_defaults_to_dog() {
        assert_eq!(PetType::default(), PetType::Dog);
    }

    #[test]
    fn pet_type_display_names() {
        assert_eq!(PetType::Dog.to_string(), "Dog");
        assert_eq!(PetType::Cat.to_string(), "Cat");
        assert_eq!(PetType::Bird.to_string(), "Bird");
    }
}
