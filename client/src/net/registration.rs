//! Registration submitter.
//!
//! Sends already-validated credentials to the auth provider and classifies
//! the answer into a [`RegistrationOutcome`]. Validation happens before this
//! point and is not repeated here.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use super::provider::{AuthProvider, ProviderError};
use super::types::{SignUpRequest, User};
use crate::util::validation::Credentials;

/// Path the confirmation e-mail link returns to.
pub const CALLBACK_PATH: &str = "/auth/callback";

pub const PENDING_CONFIRMATION_MESSAGE: &str =
    "確認メールを送信しました。メール内のリンクをクリックしてアカウントを有効化してください。";
pub const REJECTED_FALLBACK_MESSAGE: &str = "登録に失敗しました";
pub const MISSING_USER_MESSAGE: &str = "ユーザー情報の取得に失敗しました";
pub const NOT_CONFIGURED_MESSAGE: &str = "認証サービスが設定されていません。管理者に連絡してください。";
pub const UNEXPECTED_MESSAGE: &str = "予期しないエラーが発生しました";

/// Result of one sign-up submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Account is active immediately.
    Confirmed(User),
    /// Account exists but waits for the e-mail link.
    PendingEmailConfirmation,
    Failed(FailureReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// Provider refused; carries its message when it sent one.
    Rejected(Option<String>),
    /// Provider accepted the call but returned no user.
    MissingUser,
    NotConfigured,
    Unexpected,
}

impl FailureReason {
    /// Text shown inline on the form.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(Some(message)) => message,
            Self::Rejected(None) => REJECTED_FALLBACK_MESSAGE,
            Self::MissingUser => MISSING_USER_MESSAGE,
            Self::NotConfigured => NOT_CONFIGURED_MESSAGE,
            Self::Unexpected => UNEXPECTED_MESSAGE,
        }
    }
}

/// Build the redirect target for a page served from `origin`.
#[must_use]
pub fn callback_url(origin: &str) -> String {
    format!("{}{CALLBACK_PATH}", origin.trim_end_matches('/'))
}

/// Submit credentials and classify the provider's answer.
pub async fn submit_registration<P>(provider: &P, credentials: &Credentials, redirect_to: &str) -> RegistrationOutcome
where
    P: AuthProvider + ?Sized,
{
    let request = SignUpRequest {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
        redirect_to: redirect_to.to_owned(),
    };
    classify(provider.sign_up(&request).await)
}

fn classify(result: Result<Option<User>, ProviderError>) -> RegistrationOutcome {
    match result {
        Ok(Some(user)) if user.is_confirmed() => RegistrationOutcome::Confirmed(user),
        Ok(Some(_)) => RegistrationOutcome::PendingEmailConfirmation,
        Ok(None) => RegistrationOutcome::Failed(FailureReason::MissingUser),
        Err(ProviderError::Rejected { message }) => RegistrationOutcome::Failed(FailureReason::Rejected(message)),
        Err(ProviderError::NotConfigured) => RegistrationOutcome::Failed(FailureReason::NotConfigured),
        Err(ProviderError::Transport(detail)) => {
            #[cfg(feature = "hydrate")]
            log::error!("sign up request failed: {detail}");
            #[cfg(not(feature = "hydrate"))]
            let _ = detail;
            RegistrationOutcome::Failed(FailureReason::Unexpected)
        }
    }
}
