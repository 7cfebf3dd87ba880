//! Domain layer containing business entities, value objects, and
//! authorization policies.

pub mod entities;
pub mod policies;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use value_objects::*;
