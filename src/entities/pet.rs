// 🐾 Pet Entity - stable identity with Owner relationship
//
// "Pet UUID is IDENTITY, owner is a mutable back-reference"
//
// Problem solved:
// - Pet type is validated against a closed set of categories
// - Owner reference is stored on the pet, never on the owner
// - Every pet is registered (append-only) so owners can find their pets
// - A `Pet` is a shared handle: clones see the same owner slot

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use super::owner::Owner;
use crate::validation::{validate_name, ValidationError, ValidationResult};

/// Allowed pet categories, in declaration order.
pub const PET_TYPES: [&str; 6] = ["dog", "cat", "rodent", "bird", "reptile", "exotic"];

// ============================================================================
// PET TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    /// Hamsters, rats, guinea pigs
    Rodent,
    Bird,
    Reptile,
    /// Anything that fits nowhere else
    Exotic,
}

impl PetType {
    pub const ALL: [PetType; 6] = [
        PetType::Dog,
        PetType::Cat,
        PetType::Rodent,
        PetType::Bird,
        PetType::Reptile,
        PetType::Exotic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Rodent => "rodent",
            PetType::Bird => "bird",
            PetType::Reptile => "reptile",
            PetType::Exotic => "exotic",
        }
    }
}

impl FromStr for PetType {
    type Err = ValidationError;

    /// Exact match only: "Dog" and " dog" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "Pet",
                    "pet_type",
                    format!("must be one of {}, got {:?}", PET_TYPES.join(", "), s),
                )
            })
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PET ENTITY
// ============================================================================

#[derive(Debug)]
struct PetRecord {
    /// Stable identity (UUID) - NEVER changes
    id: String,
    name: String,
    pet_type: PetType,
    /// The only mutable part of a pet
    owner: RwLock<Option<Owner>>,
    registered_at: DateTime<Utc>,
}

/// Pet Entity - belongs to at most one Owner
///
/// Identity: UUID (never changes)
/// Values: name, pet_type (immutable)
/// Relationship: owner → Owner entity (optional, reassignable)
#[derive(Debug, Clone)]
pub struct Pet {
    inner: Arc<PetRecord>,
}

impl Pet {
    /// Create a pet and append it to the process-wide registry.
    ///
    /// Nothing is registered if validation fails.
    pub fn new(name: &str, pet_type: &str, owner: Option<&Owner>) -> ValidationResult<Self> {
        Pet::new_in(PetRegistry::global(), name, pet_type, owner)
    }

    /// Create a pet and append it to `registry`.
    pub fn new_in(
        registry: &PetRegistry,
        name: &str,
        pet_type: &str,
        owner: Option<&Owner>,
    ) -> ValidationResult<Self> {
        let name = validate_name("Pet", name)?;
        let pet_type = pet_type.parse::<PetType>().map_err(|err| {
            tracing::debug!(error = %err, "rejected pet type");
            err
        })?;

        let pet = Pet {
            inner: Arc::new(PetRecord {
                id: uuid::Uuid::new_v4().to_string(),
                name,
                pet_type,
                owner: RwLock::new(None),
                registered_at: Utc::now(),
            }),
        };
        if owner.is_some() {
            pet.set_owner(owner);
        }

        registry.register(pet.clone());
        Ok(pet)
    }

    /// The closed set of accepted `pet_type` strings.
    pub fn allowed_categories() -> &'static [&'static str] {
        &PET_TYPES
    }

    /// Snapshot of every pet ever created in this process, in creation order.
    pub fn registry() -> Vec<Pet> {
        PetRegistry::global().all_pets()
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn pet_type(&self) -> PetType {
        self.inner.pet_type
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.inner.registered_at
    }

    pub fn get_owner(&self) -> Option<Owner> {
        self.inner
            .owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Assign (or clear) the owner.
    ///
    /// Every owner change goes through here, including `Owner::add_pet`.
    /// Registries are untouched; `Owner::pets` is recomputed on demand.
    pub fn set_owner(&self, owner: Option<&Owner>) {
        let mut slot = self
            .inner
            .owner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *slot, owner.cloned());

        tracing::debug!(
            pet_id = %self.inner.id,
            previous_owner = ?previous.as_ref().map(Owner::id),
            new_owner = ?owner.map(Owner::id),
            "assigned owner"
        );
    }

    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        self.inner
            .owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|current| current == owner)
    }

    pub fn snapshot(&self) -> PetSnapshot {
        let owner = self.get_owner();

        PetSnapshot {
            id: self.inner.id.clone(),
            name: self.inner.name.clone(),
            pet_type: self.inner.pet_type,
            owner_id: owner.as_ref().map(|o| o.id().to_string()),
            owner_name: owner.as_ref().map(|o| o.name().to_string()),
            registered_at: self.inner.registered_at,
        }
    }
}

impl PartialEq for Pet {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Pet {}

impl std::fmt::Display for Pet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let owner_name = self
            .get_owner()
            .map(|o| o.name().to_string())
            .unwrap_or_else(|| "No Owner".to_string());

        write!(
            f,
            "<Pet name={:?} type={:?} owner={:?}>",
            self.inner.name,
            self.inner.pet_type.as_str(),
            owner_name
        )
    }
}

// ============================================================================
// PET SNAPSHOT
// ============================================================================

/// Plain, serializable view of a pet at one point in time (diagnostics only).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSnapshot {
    pub id: String,
    pub name: String,
    pub pet_type: PetType,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl PetSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// PET REGISTRY
// ============================================================================

static GLOBAL_REGISTRY: Lazy<PetRegistry> = Lazy::new(PetRegistry::new);

/// Registry of all pets, append-only, in creation order.
///
/// One process-wide instance backs `Pet::new` and `Owner::pets`; separate
/// instances can be created with `PetRegistry::new`. Appends and scans share
/// one lock, so a scan never sees a half-registered pet.
pub struct PetRegistry {
    pets: Arc<RwLock<Vec<Pet>>>,
}

impl PetRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        PetRegistry {
            pets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static PetRegistry {
        &GLOBAL_REGISTRY
    }

    pub(crate) fn register(&self, pet: Pet) {
        let mut pets = self.pets.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            pet_id = %pet.id(),
            name = %pet.name(),
            pet_type = %pet.pet_type(),
            position = pets.len(),
            "registered pet"
        );
        pets.push(pet);
    }

    /// All pets in creation order
    pub fn all_pets(&self) -> Vec<Pet> {
        self.pets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.pets.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Drop every registered pet. Existing handles stay valid.
    pub fn clear(&self) {
        let mut pets = self.pets.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(removed = pets.len(), "cleared pet registry");
        pets.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<Pet> {
        let pets = self.pets.read().unwrap_or_else(PoisonError::into_inner);
        pets.iter().find(|p| p.id() == id).cloned()
    }

    pub fn by_type(&self, pet_type: PetType) -> Vec<Pet> {
        self.filtered(|p| p.pet_type() == pet_type)
    }

    /// Pets whose owner is `owner` (identity, not name), in creation order
    pub fn by_owner(&self, owner: &Owner) -> Vec<Pet> {
        self.filtered(|p| p.is_owned_by(owner))
    }

    pub fn unowned(&self) -> Vec<Pet> {
        self.filtered(|p| p.get_owner().is_none())
    }

    fn filtered<F>(&self, keep: F) -> Vec<Pet>
    where
        F: Fn(&Pet) -> bool,
    {
        let pets = self.pets.read().unwrap_or_else(PoisonError::into_inner);
        pets.iter().filter(|p| keep(p)).cloned().collect()
    }
}

impl Default for PetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================
