//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate, so both sides serialize the same types.
//! The sign-up reply always carries both `user` and `error` keys, mirroring
//! the auth provider's `{ data, error }` convention.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Error code sent when the server has no auth provider configuration.
pub const ERROR_CODE_NOT_CONFIGURED: &str = "not_configured";
/// Error code sent when the provider rejected the request.
pub const ERROR_CODE_PROVIDER_REJECTED: &str = "provider_rejected";
/// Error code sent when the provider could not be reached or answered garbage.
pub const ERROR_CODE_UPSTREAM_UNAVAILABLE: &str = "upstream_unavailable";

/// An account as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned identifier (UUID string).
    pub id: String,
    /// Registered e-mail address.
    #[serde(default)]
    pub email: String,
    /// When the address was verified; `None` while confirmation is pending.
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Where the confirmation e-mail link should land.
    pub redirect_to: String,
}

/// Error half of a [`SignUpReply`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Provider text, when it gave one.
    #[serde(default)]
    pub message: Option<String>,
    /// One of the `ERROR_CODE_*` constants.
    pub code: String,
}

/// Reply of `POST /api/auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpReply {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

impl SignUpReply {
    #[must_use]
    pub fn success(user: Option<User>) -> Self {
        Self { user, error: None }
    }

    #[must_use]
    pub fn failure(code: &str, message: Option<String>) -> Self {
        Self { user: None, error: Some(ErrorBody { message, code: code.to_owned() }) }
    }
}
