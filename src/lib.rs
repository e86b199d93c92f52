// Pet Registry - Core Library
// Owner ↔ Pet one-to-many model with validated attributes

pub mod validation;
pub mod entities;

// Re-export commonly used types
pub use validation::{ValidationError, ValidationResult};
pub use entities::{Owner, Pet, PetRegistry, PetSnapshot, PetType, PET_TYPES};
