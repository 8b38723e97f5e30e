//! `stockwise-auth` — users, roles and permission checks.
//!
//! This crate is intentionally decoupled from HTTP, sessions and storage: the
//! acting user is always passed in explicitly.

pub mod authorize;
pub mod permissions;
pub mod roles;
pub mod user;

pub use authorize::{AuthorizationExplanation, AuthzError, authorize, explain_authorization};
pub use permissions::Permission;
pub use roles::Role;
pub use user::{User, UserStatus, find_user};
