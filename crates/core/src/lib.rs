//! Domain logic for the gacha spin service.
//!
//! This crate performs no I/O. It holds the shared id/timestamp types, the
//! domain error type, and the pure pieces of the spin mechanic (cooldown
//! arithmetic, candidate eligibility, weighted draw) plus input validation
//! used by the API layer.

pub mod accounts;
pub mod catalog;
pub mod cooldown;
pub mod draw;
pub mod error;
pub mod quests;
pub mod types;
