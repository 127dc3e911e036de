//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::provider::ProviderError;
use super::types::{SignUpRequest, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{
    ERROR_CODE_NOT_CONFIGURED, ERROR_CODE_UPSTREAM_UNAVAILABLE, ErrorBody, SignUpReply,
};

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign up failed: {status}")
}

/// Map a `/api/auth/signup` reply onto the provider result.
///
/// `reply` is `None` when the body could not be decoded.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_sign_up_reply(status: u16, reply: Option<SignUpReply>) -> Result<Option<User>, ProviderError> {
    let Some(reply) = reply else {
        return Err(ProviderError::Transport(sign_up_failed_message(status)));
    };
    match reply.error {
        Some(ErrorBody { code, .. }) if code == ERROR_CODE_NOT_CONFIGURED => Err(ProviderError::NotConfigured),
        Some(ErrorBody { code, message }) if code == ERROR_CODE_UPSTREAM_UNAVAILABLE => {
            Err(ProviderError::Transport(message.unwrap_or_else(|| sign_up_failed_message(status))))
        }
        Some(ErrorBody { message, .. }) => Err(ProviderError::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }),
        None if (200..300).contains(&status) => Ok(reply.user),
        None => Err(ProviderError::Transport(sign_up_failed_message(status))),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Register a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns [`ProviderError`] when the provider rejects the request, the server
/// has no provider configuration, or the request itself fails.
pub async fn sign_up(request: &SignUpRequest) -> Result<Option<User>, ProviderError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(request)
            .map_err(|e| ProviderError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        let status = resp.status();
        let reply = resp.json::<SignUpReply>().await.ok();
        interpret_sign_up_reply(status, reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ProviderError::Transport("not available on server".to_owned()))
    }
}
