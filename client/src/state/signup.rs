//! Sign-up form state.
//!
//! DESIGN
//! ======
//! The form moves `Idle -> Submitting -> (Idle with message | Redirecting)`.
//! The message lives inside `Idle`, so a busy form can never also show a
//! stale error, and a redirecting form cannot be submitted again.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::registration::{PENDING_CONFIRMATION_MESSAGE, RegistrationOutcome};
use crate::net::types::User;
use crate::util::validation::{Credentials, validate_credentials};

/// Where a confirmed registration lands.
pub const SIGNUP_SUCCESS_PATH: &str = "/?signup=success";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Error,
    Info,
}

/// Inline message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub tone: MessageTone,
    pub text: String,
}

impl FormMessage {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: MessageTone::Error, text: text.into() }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self { tone: MessageTone::Info, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpPhase {
    Idle { message: Option<FormMessage> },
    Submitting,
    Redirecting,
}

impl Default for SignUpPhase {
    fn default() -> Self {
        Self::Idle { message: None }
    }
}

/// What the page must do once a submission finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitEffect {
    Stay,
    /// Cache `user` as the identity, navigate to `path`, then reload the identity.
    NavigateAndRefresh { path: &'static str, user: User },
}

/// Field values plus submission phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    phase: SignUpPhase,
}

impl SignUpForm {
    #[must_use]
    pub fn phase(&self) -> &SignUpPhase {
        &self.phase
    }

    /// True only while the provider call is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SignUpPhase::Submitting)
    }

    #[must_use]
    pub fn message(&self) -> Option<&FormMessage> {
        match &self.phase {
            SignUpPhase::Idle { message } => message.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the credentials to send, or `None` when the form is already
    /// busy/redirecting or a rule failed (the failure becomes the message).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if matches!(self.phase, SignUpPhase::Submitting | SignUpPhase::Redirecting) {
            return None;
        }
        self.phase = SignUpPhase::Idle { message: None };
        let credentials = self.credentials();
        if let Err(e) = validate_credentials(&credentials) {
            self.phase = SignUpPhase::Idle { message: Some(FormMessage::error(e.to_string())) };
            return None;
        }
        self.phase = SignUpPhase::Submitting;
        Some(credentials)
    }

    /// Leave `Submitting` according to the provider outcome.
    pub fn finish_submit(&mut self, outcome: &RegistrationOutcome) -> SubmitEffect {
        match outcome {
            RegistrationOutcome::Confirmed(user) => {
                self.phase = SignUpPhase::Redirecting;
                SubmitEffect::NavigateAndRefresh { path: SIGNUP_SUCCESS_PATH, user: user.clone() }
            }
            RegistrationOutcome::PendingEmailConfirmation => {
                self.phase = SignUpPhase::Idle { message: Some(FormMessage::info(PENDING_CONFIRMATION_MESSAGE)) };
                SubmitEffect::Stay
            }
            RegistrationOutcome::Failed(reason) => {
                self.phase = SignUpPhase::Idle { message: Some(FormMessage::error(reason.message())) };
                SubmitEffect::Stay
            }
        }
    }
}
