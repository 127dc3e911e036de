//! Supabase GoTrue client — sign-up and session lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to GoTrue directly. `/api/auth/*` handlers call
//! this module, which forwards the anon key and decodes GoTrue's reply shapes
//! into the shared `client::net::types::User`.

use client::net::types::User;
use serde::Deserialize;

use crate::config::{ConfigError, required};

const URL_PLACEHOLDER: &str = "your-project-url";
const ANON_KEY_PLACEHOLDER: &str = "your-anon-key";

/// GoTrue connection settings loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without trailing slash.
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Load from `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is missing, blank, left at
    /// its placeholder, or the URL does not parse as `http(s)`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`SupabaseConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = required(&lookup, "SUPABASE_URL", URL_PLACEHOLDER)?;
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY", ANON_KEY_PLACEHOLDER)?;

        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| ConfigError::Invalid { var: "SUPABASE_URL", reason: e.to_string() })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                var: "SUPABASE_URL",
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key })
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("auth provider rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    #[error("auth provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected auth provider response: {0}")]
    Decode(String),
}

/// Session GoTrue issues when an account needs no e-mail confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    pub user: Option<User>,
    pub session: Option<Session>,
}

#[derive(Debug, Deserialize)]
struct GotrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
}

impl From<GotrueUser> for User {
    fn from(u: GotrueUser) -> Self {
        Self { id: u.id, email: u.email.unwrap_or_default(), email_confirmed_at: u.email_confirmed_at }
    }
}

#[derive(Debug, Deserialize)]
struct GotrueSession {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: GotrueUser,
}

#[derive(Debug, Default, Deserialize)]
struct GotrueErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Decode a successful `/signup` body.
///
/// GoTrue answers with a session (auto-confirmed account) or with the bare
/// user (confirmation pending). Anything else is a success without a user.
pub(crate) fn parse_sign_up_body(body: &str) -> Result<SignUpResult, SupabaseError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| SupabaseError::Decode(e.to_string()))?;

    if let Ok(session) = serde_json::from_value::<GotrueSession>(value.clone()) {
        return Ok(SignUpResult {
            user: Some(session.user.into()),
            session: Some(Session { access_token: session.access_token, expires_in: session.expires_in }),
        });
    }

    let user = serde_json::from_value::<GotrueUser>(value).ok().map(User::from);
    Ok(SignUpResult { user, session: None })
}

/// Pull the human-readable message out of a GoTrue error body.
pub(crate) fn provider_error_message(body: &str) -> Option<String> {
    let parsed: GotrueErrorBody = serde_json::from_str(body).unwrap_or_default();
    [parsed.msg, parsed.message, parsed.error_description, parsed.error]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
}

/// Authenticated handle on one GoTrue project.
#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    config: SupabaseConfig,
    http: reqwest::Client,
}

impl SupabaseAuth {
    #[must_use]
    pub fn new(config: SupabaseConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Register an account. `redirect_to` is where the confirmation link lands.
    ///
    /// # Errors
    ///
    /// [`SupabaseError::Rejected`] for non-2xx replies, [`SupabaseError::Transport`]
    /// when the request fails, [`SupabaseError::Decode`] for a non-JSON body.
    pub async fn sign_up(&self, email: &str, password: &str, redirect_to: &str) -> Result<SignUpResult, SupabaseError> {
        let mut request = self
            .http
            .post(self.config.endpoint("signup"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }));
        if !redirect_to.is_empty() {
            request = request.query(&[("redirect_to", redirect_to)]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::Rejected { status: status.as_u16(), message: provider_error_message(&body) });
        }
        parse_sign_up_body(&body)
    }

    /// Resolve an access token to its user. `Ok(None)` when GoTrue refuses the token.
    ///
    /// # Errors
    ///
    /// Same as [`SupabaseAuth::sign_up`], except 401/403 map to `Ok(None)`.
    pub async fn get_user(&self, access_token: &str) -> Result<Option<User>, SupabaseError> {
        let resp = self
            .http
            .get(self.config.endpoint("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::Rejected { status: status.as_u16(), message: provider_error_message(&body) });
        }
        let user: GotrueUser = serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))?;
        Ok(Some(user.into()))
    }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
pub(crate) mod tests;
