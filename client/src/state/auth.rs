//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by the app root and read by the
//! home page to pick the authenticated or anonymous branch.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Who is looking at the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Identity {
    #[must_use]
    pub fn from_user(user: Option<User>) -> Self {
        user.map_or(Self::Anonymous, Self::Authenticated)
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Authentication state tracking the current identity and loading status.
///
/// Serializable so the state rendered on the server is reused on hydrate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub identity: Identity,
    pub loading: bool,
}

impl AuthState {
    /// State while the first identity lookup is still running.
    #[must_use]
    pub fn loading() -> Self {
        Self { identity: Identity::Anonymous, loading: true }
    }

    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { identity: Identity::from_user(user), loading: false }
    }
}

/// Session owner the server resolved from the request cookie.
///
/// Provided as context during SSR only. Absent when the lookup failed, in
/// which case the browser resolves the identity itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser(pub Option<User>);
