//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row (or joined projection)
//! - A create DTO for inserts where the entity is writable

pub mod character;
pub mod collection;
pub mod quest;
pub mod rarity;
pub mod user;
