//! Server-side game mechanics.
//!
//! - [`spin`] -- the transactional spin engine (cooldown, weighted draw, grant).

pub mod spin;
