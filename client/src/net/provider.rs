//! Auth provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted auth service is reached through the server's `/api/auth/*`
//! endpoints. Pages talk to it only through [`AuthProvider`], so the
//! registration flow can be driven by a scripted provider in tests.

use async_trait::async_trait;

use super::api;
use super::types::{SignUpRequest, User};

/// Why a provider call did not produce a result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider refused the request (duplicate e-mail, weak password, ...).
    #[error("sign up rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },
    /// Provider URL or key is missing on the server.
    #[error("auth provider is not configured")]
    NotConfigured,
    /// Network failure or an unreadable reply.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Operations the UI needs from the auth provider.
///
/// Futures are `?Send` because browser fetches are bound to the JS thread.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Register a new account.
    ///
    /// `Ok(None)` means the provider accepted the call but returned no user.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<User>, ProviderError>;

    /// The user bound to the current session, if any.
    async fn current_user(&self) -> Option<User>;
}

/// Provider backed by this application's own server endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerAuthProvider;

#[async_trait(?Send)]
impl AuthProvider for ServerAuthProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Option<User>, ProviderError> {
        api::sign_up(request).await
    }

    async fn current_user(&self) -> Option<User> {
        api::fetch_current_user().await
    }
}
