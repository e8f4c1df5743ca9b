//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to `gacha_db` repositories (or the spin engine) and map
//! errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod collection;
pub mod spin;
