// 🧑 Owner Entity - stable identity, derived Pet relationship
//
// "Owner name is a VALUE, Owner UUID is IDENTITY"
//
// - Two owners called "Maya" are two different owners
// - An owner never stores its pets; they are found by scanning a registry
// - Clones share the UUID, so a clone is the same owner

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::pet::{Pet, PetRegistry};
use crate::validation::{validate_name, ValidationResult};

// ============================================================================
// OWNER ENTITY
// ============================================================================

/// Owner Entity - possessor of zero or more pets
///
/// Identity: UUID (never changes)
/// Values: name (trimmed, immutable)
/// Relationship: pets are derived from `Pet.owner` back-references
///
/// Serialize-only: an owner can only come from [`Owner::new`], so a payload
/// can neither carry a blank name nor claim another owner's id.
///
/// ```compile_fail
/// let json = r#"{"id":"x","name":"","created_at":"2024-01-01T00:00:00Z"}"#;
/// let _owner: pet_registry::Owner = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Owner {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Display name, trimmed at construction
    name: String,

    created_at: DateTime<Utc>,
}

impl Owner {
    /// Create a new owner with a fresh UUID.
    ///
    /// Fails if `name` is blank after trimming.
    pub fn new(name: &str) -> ValidationResult<Self> {
        let name = validate_name("Owner", name)?;

        let owner = Owner {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
        };
        tracing::debug!(owner_id = %owner.id, name = %owner.name, "created owner");

        Ok(owner)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Pets in the process-wide registry that belong to this owner,
    /// in registration order.
    pub fn pets(&self) -> Vec<Pet> {
        self.pets_in(PetRegistry::global())
    }

    /// Same as [`Owner::pets`], against an explicit registry.
    pub fn pets_in(&self, registry: &PetRegistry) -> Vec<Pet> {
        registry.by_owner(self)
    }

    /// Make this owner the owner of `pet`.
    ///
    /// Goes through [`Pet::set_owner`], the single assignment path.
    pub fn add_pet(&self, pet: &Pet) {
        pet.set_owner(Some(self));
    }

    /// This owner's pets sorted A → Z by name (stable; ties keep
    /// registration order).
    pub fn get_sorted_pets(&self) -> Vec<Pet> {
        self.get_sorted_pets_in(PetRegistry::global())
    }

    pub fn get_sorted_pets_in(&self, registry: &PetRegistry) -> Vec<Pet> {
        let mut pets = self.pets_in(registry);
        pets.sort_by(|a, b| a.name().cmp(b.name()));
        pets
    }

    pub fn pet_count(&self) -> usize {
        self.pet_count_in(PetRegistry::global())
    }

    pub fn pet_count_in(&self, registry: &PetRegistry) -> usize {
        self.pets_in(registry).len()
    }
}

impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Owner {}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
