//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server seeds the identity during SSR when it could resolve the session
//! cookie. Otherwise the app root loads it once on hydrate. The sign-up flow
//! reloads it after a confirmed registration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::provider::AuthProvider;
use crate::state::auth::{AuthState, SessionUser};

/// Initial state for the app root: resolved when the server supplied the
/// session, loading otherwise.
#[must_use]
pub fn seed_auth_state(session: Option<SessionUser>) -> AuthState {
    session.map_or_else(AuthState::loading, |SessionUser(user)| AuthState::resolved(user))
}

/// Ask the provider who is signed in.
pub async fn resolve_identity<P>(provider: &P) -> AuthState
where
    P: AuthProvider + ?Sized,
{
    AuthState::resolved(provider.current_user().await)
}

/// Reload the cached identity in the background.
pub fn spawn_identity_refresh(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = resolve_identity(&crate::net::provider::ServerAuthProvider).await;
        auth.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}
