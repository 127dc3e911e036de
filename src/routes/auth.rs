//! Auth routes — sign-up proxy, current user, confirmation callback, plus the
//! session lookup that seeds server-rendered pages.

use axum::extract::{FromRef, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{
    ERROR_CODE_NOT_CONFIGURED, ERROR_CODE_PROVIDER_REJECTED, ERROR_CODE_UPSTREAM_UNAVAILABLE, SignUpReply,
    SignUpRequest, User,
};
use client::state::auth::SessionUser;
use serde::Deserialize;
use time::Duration;

use crate::services::supabase::{Session, SupabaseError};
use crate::state::AppState;

pub(crate) const ACCESS_TOKEN_COOKIE: &str = "sb_access_token";
const NOT_CONFIGURED_TEXT: &str = "auth provider is not configured";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// User resolved from the access-token cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let Some(supabase) = &app_state.supabase else {
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        };
        let user = supabase
            .get_user(token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "access token lookup failed");
                StatusCode::BAD_GATEWAY
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Status and body for a failed sign-up.
pub(crate) fn failure_reply(error: &SupabaseError) -> (StatusCode, SignUpReply) {
    match error {
        SupabaseError::Rejected { status, message } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            SignUpReply::failure(ERROR_CODE_PROVIDER_REJECTED, message.clone()),
        ),
        SupabaseError::Transport(_) | SupabaseError::Decode(_) => {
            (StatusCode::BAD_GATEWAY, SignUpReply::failure(ERROR_CODE_UPSTREAM_UNAVAILABLE, None))
        }
    }
}

fn not_configured_reply() -> (StatusCode, Json<SignUpReply>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(SignUpReply::failure(ERROR_CODE_NOT_CONFIGURED, Some(NOT_CONFIGURED_TEXT.to_owned()))),
    )
}

/// HttpOnly cookie carrying the provider access token.
pub(crate) fn session_cookie(session: Session, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((ACCESS_TOKEN_COOKIE, session.access_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    if let Some(secs) = session.expires_in {
        cookie.set_max_age(Duration::seconds(secs));
    }
    cookie
}

#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    error: Option<String>,
    error_description: Option<String>,
}

/// Where the confirmation link should finally land.
pub(crate) fn callback_destination(params: &CallbackQuery) -> &'static str {
    if params.error.is_some() || params.error_description.is_some() {
        "/auth/signup"
    } else {
        "/"
    }
}

// =============================================================================
// SSR SESSION
// =============================================================================

/// Resolve the access-token cookie for page requests and stash the result as a
/// [`SessionUser`] request extension. A failed provider lookup leaves the
/// extension unset so the browser resolves the identity after hydrate.
pub async fn resolve_session(State(state): State<AppState>, jar: CookieJar, mut req: Request, next: Next) -> Response {
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value).unwrap_or_default();
    let session = match &state.supabase {
        Some(supabase) if !token.is_empty() => match supabase.get_user(token).await {
            Ok(user) => Some(SessionUser(user)),
            Err(e) => {
                tracing::warn!(error = %e, "session lookup for page render failed");
                None
            }
        },
        _ => Some(SessionUser(None)),
    };
    if let Some(session) = session {
        req.extensions_mut().insert(session);
    }
    next.run(req).await
}

/// Leptos additional context: expose the request's [`SessionUser`] to the app.
pub fn provide_session_user() {
    use leptos::prelude::{provide_context, use_context};

    let session = use_context::<axum::http::request::Parts>()
        .and_then(|parts| parts.extensions.get::<SessionUser>().cloned());
    if let Some(session) = session {
        provide_context(session);
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup` — register with GoTrue; set the session cookie when
/// the account is active immediately.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(req): Json<SignUpRequest>) -> Response {
    let Some(supabase) = &state.supabase else {
        tracing::warn!("sign up attempted without auth provider configuration");
        return not_configured_reply().into_response();
    };

    match supabase.sign_up(&req.email, &req.password, &req.redirect_to).await {
        Ok(result) => {
            let confirmed = result.user.as_ref().is_some_and(User::is_confirmed);
            tracing::info!(
                has_user = result.user.is_some(),
                confirmed,
                has_session = result.session.is_some(),
                "sign up accepted"
            );
            let jar = match result.session {
                Some(session) => jar.add(session_cookie(session, state.cookie_secure)),
                None => jar,
            };
            (jar, Json(SignUpReply::success(result.user))).into_response()
        }
        Err(e) => {
            match &e {
                SupabaseError::Rejected { status, .. } => tracing::warn!(%status, error = %e, "sign up rejected"),
                _ => tracing::error!(error = %e, "sign up request failed"),
            }
            let (status, reply) = failure_reply(&e);
            (status, Json(reply)).into_response()
        }
    }
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `GET /auth/callback` — landing for the confirmation e-mail link.
pub async fn callback(Query(params): Query<CallbackQuery>) -> Redirect {
    if let Some(error) = &params.error {
        tracing::warn!(
            %error,
            description = params.error_description.as_deref().unwrap_or_default(),
            "email confirmation failed"
        );
    }
    Redirect::temporary(callback_destination(&params))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
