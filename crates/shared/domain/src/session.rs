use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

impl CurrentUser {
    /// Builds a user from a raw role string, normalizing it at the boundary.
    pub fn new(id: impl Into<String>, role: &str) -> Self {
        Self { id: id.into(), name: None, role: Role::normalize(role) }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Read-only view of the session that the access guard consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_user: Option<CurrentUser>,
    pub loading: bool,
}

impl Session {
    /// Resolution still pending.
    #[must_use]
    pub const fn pending() -> Self {
        Self { current_user: None, loading: true }
    }

    /// Resolved with nobody signed in.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { current_user: None, loading: false }
    }

    #[must_use]
    pub const fn signed_in(user: CurrentUser) -> Self {
        Self { current_user: Some(user), loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|user| user.role)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}
