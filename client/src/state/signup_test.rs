use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::provider::ProviderError;
use crate::net::registration::{FailureReason, REJECTED_FALLBACK_MESSAGE, UNEXPECTED_MESSAGE, submit_registration};
use crate::net::test_helpers::{MockProvider, confirmed_user, pending_user};

const REDIRECT: &str = "http://localhost:3000/auth/callback";

fn filled_form() -> SignUpForm {
    SignUpForm {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        ..SignUpForm::default()
    }
}

/// Drive one full submission, recording whether the form was busy while the
/// provider call ran.
fn run(provider_reply: Result<Option<crate::net::types::User>, ProviderError>) -> (SignUpForm, SubmitEffect, bool) {
    let form = Rc::new(RefCell::new(filled_form()));
    let busy_in_flight = Rc::new(Cell::new(false));

    let probe_form = Rc::clone(&form);
    let probe_busy = Rc::clone(&busy_in_flight);
    let provider =
        MockProvider::replying(provider_reply).with_probe(move || probe_busy.set(probe_form.borrow().is_busy()));

    assert!(!form.borrow().is_busy(), "not busy before submit");
    let credentials = form.borrow_mut().begin_submit().expect("valid form should submit");
    let outcome = block_on(submit_registration(&provider, &credentials, REDIRECT));
    let effect = form.borrow_mut().finish_submit(&outcome);

    let form = form.borrow().clone();
    (form, effect, busy_in_flight.get())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_idle_without_message() {
    let form = SignUpForm::default();
    assert_eq!(form.phase(), &SignUpPhase::Idle { message: None });
    assert!(!form.is_busy());
    assert!(form.message().is_none());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn invalid_form_stays_idle_with_validation_message() {
    let mut form = SignUpForm { email: "user".to_owned(), ..filled_form() };
    assert!(form.begin_submit().is_none());
    assert!(!form.is_busy());
    assert_eq!(form.message(), Some(&FormMessage::error("有効なメールアドレスを入力してください")));
}

#[test]
fn resubmitting_clears_previous_message() {
    let mut form = SignUpForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..filled_form() };
    assert!(form.begin_submit().is_none());
    assert!(form.message().is_some());

    form.password = "secret".to_owned();
    form.confirm_password = "secret".to_owned();
    assert!(form.begin_submit().is_some());
    assert!(form.message().is_none());
}

#[test]
fn valid_form_enters_submitting_and_returns_credentials() {
    let mut form = filled_form();
    let credentials = form.begin_submit().unwrap();
    assert_eq!(credentials.email, "a@b.com");
    assert!(form.is_busy());
}

#[test]
fn second_submit_while_busy_is_ignored() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.is_busy());
}

#[test]
fn submit_while_redirecting_is_ignored() {
    let mut form = filled_form();
    form.begin_submit();
    form.finish_submit(&RegistrationOutcome::Confirmed(confirmed_user()));
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase(), &SignUpPhase::Redirecting);
}

// =============================================================
// Full submissions
// =============================================================

#[test]
fn confirmed_user_navigates_to_success_and_refreshes() {
    let (form, effect, busy_in_flight) = run(Ok(Some(confirmed_user())));
    assert_eq!(effect, SubmitEffect::NavigateAndRefresh { path: "/?signup=success", user: confirmed_user() });
    assert_eq!(form.phase(), &SignUpPhase::Redirecting);
    assert!(busy_in_flight);
    assert!(!form.is_busy());
}

#[test]
fn unconfirmed_user_shows_pending_message_without_navigation() {
    let (form, effect, busy_in_flight) = run(Ok(Some(pending_user())));
    assert_eq!(effect, SubmitEffect::Stay);
    assert_eq!(form.message(), Some(&FormMessage::info(PENDING_CONFIRMATION_MESSAGE)));
    assert!(busy_in_flight);
    assert!(!form.is_busy());
}

#[test]
fn provider_error_shows_provider_message() {
    let (form, effect, busy_in_flight) =
        run(Err(ProviderError::Rejected { message: Some("User already registered".to_owned()) }));
    assert_eq!(effect, SubmitEffect::Stay);
    assert_eq!(form.message(), Some(&FormMessage::error("User already registered")));
    assert!(busy_in_flight);
    assert!(!form.is_busy());
}

#[test]
fn provider_error_without_message_shows_fallback() {
    let (form, effect, _) = run(Err(ProviderError::Rejected { message: None }));
    assert_eq!(effect, SubmitEffect::Stay);
    assert_eq!(form.message(), Some(&FormMessage::error(REJECTED_FALLBACK_MESSAGE)));
}

#[test]
fn transport_failure_releases_busy_and_shows_generic_message() {
    let (form, effect, busy_in_flight) = run(Err(ProviderError::Transport("offline".to_owned())));
    assert_eq!(effect, SubmitEffect::Stay);
    assert_eq!(form.message(), Some(&FormMessage::error(UNEXPECTED_MESSAGE)));
    assert!(busy_in_flight);
    assert!(!form.is_busy());
}

#[test]
fn missing_user_shows_failure_message() {
    let (form, _, _) = run(Ok(None));
    assert_eq!(form.message(), Some(&FormMessage::error(FailureReason::MissingUser.message())));
}

#[test]
fn not_configured_releases_busy() {
    let (form, effect, _) = run(Err(ProviderError::NotConfigured));
    assert_eq!(effect, SubmitEffect::Stay);
    assert!(!form.is_busy());
    assert_eq!(form.message().map(|m| m.tone), Some(MessageTone::Error));
}

#[test]
fn confirmed_effect_carries_identity_for_the_landing_page() {
    let (_, effect, _) = run(Ok(Some(confirmed_user())));
    let SubmitEffect::NavigateAndRefresh { user, .. } = effect else {
        panic!("expected navigation, got {effect:?}");
    };
    let state = crate::state::auth::AuthState::resolved(Some(user));
    assert!(!state.loading);
    assert_eq!(
        crate::state::banner::banner_text(&state.identity),
        "✅ 登録が完了しました！ようこそ、a@b.comさん"
    );
}
