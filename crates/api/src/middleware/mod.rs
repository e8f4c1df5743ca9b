//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated principal from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires an admin principal.
//! - [`rbac::RequireAuth`] -- Requires any authenticated principal.

pub mod auth;
pub mod rbac;
