use serde::Serialize;
use thiserror::Error;

use crate::{Permission, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("user '{0}' is suspended")]
    Suspended(String),

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Check that `user` may perform an action gated by `required`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(user: &User, required: Permission) -> Result<(), AuthzError> {
    if !user.is_active() {
        return Err(AuthzError::Suspended(user.username.clone()));
    }

    if user.has_permission(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision, suitable for logging.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    /// The permission that was being checked.
    pub required_permission: Permission,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Permissions the user holds, sorted.
    pub effective_permissions: Vec<Permission>,
}

/// Explain why an authorization decision was made (or would be made).
///
/// Always agrees with [`authorize`].
pub fn explain_authorization(user: &User, required: Permission) -> AuthorizationExplanation {
    let mut effective_permissions = user.permissions.clone();
    effective_permissions.sort();
    effective_permissions.dedup();

    let (granted, reason) = match authorize(user, required) {
        Ok(()) => (
            true,
            format!("user '{}' has permission '{}'", user.username, required),
        ),
        Err(AuthzError::Suspended(_)) => (
            false,
            format!("user '{}' is suspended", user.username),
        ),
        Err(AuthzError::Forbidden(_)) => (
            false,
            format!(
                "user '{}' (role {}) lacks permission '{}'",
                user.username, user.role, required
            ),
        ),
    };

    AuthorizationExplanation {
        required_permission: required,
        granted,
        reason,
        effective_permissions,
    }
}
