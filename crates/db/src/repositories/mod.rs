//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods that take `&PgPool` run standalone; methods that take
//! `&mut PgConnection` are meant to run inside a caller-owned transaction.

pub mod character_repo;
pub mod collection_repo;
pub mod quest_repo;
pub mod rarity_repo;
pub mod user_repo;

pub use character_repo::CharacterRepo;
pub use collection_repo::CollectionRepo;
pub use quest_repo::QuestRepo;
pub use rarity_repo::RarityRepo;
pub use user_repo::UserRepo;
