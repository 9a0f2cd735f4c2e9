//! Ownership and role policy.
//!
//! The acting user is passed into every service call; nothing here reads
//! request state.

use crate::error::DomainError;
use crate::ports::TokenClaims;

/// Roles allowed to write comments and likes.
pub const WRITER_ROLES: &[&str] = &["user", "premium", "admin"];

/// The user on whose behalf an operation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActingUser {
    pub id: Option<String>,
    pub roles: Vec<String>,
}

impl ActingUser {
    pub fn new(id: impl Into<String>, roles: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// An authenticated caller whose token carried no `Id` claim.
    pub fn without_id(roles: &[&str]) -> Self {
        Self {
            id: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, allowed: &[&str]) -> bool {
        allowed.iter().any(|role| self.has_role(role))
    }

    /// True only when the actor has an id and it equals `owner_id`.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.id.as_deref() == Some(owner_id)
    }

    pub fn require_writer(&self, resource: &'static str) -> Result<(), DomainError> {
        if self.has_any_role(WRITER_ROLES) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(resource))
        }
    }

    pub fn require_owner(&self, resource: &'static str, owner_id: &str) -> Result<(), DomainError> {
        if self.owns(owner_id) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(resource))
        }
    }

    pub fn require_id(&self) -> Result<&str, DomainError> {
        self.id.as_deref().ok_or(DomainError::Unauthorized)
    }
}

impl From<TokenClaims> for ActingUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.user_id,
            roles: claims.roles,
        }
    }
}
