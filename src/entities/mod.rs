// Entity Models
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Immutable name, trimmed and validated at construction
// - Pets live in a registry; owners find their pets by scanning it

pub mod owner;
pub mod pet;

pub use owner::Owner;
pub use pet::{Pet, PetRegistry, PetSnapshot, PetType, PET_TYPES};
