use super::*;
use crate::net::types::ERROR_CODE_PROVIDER_REJECTED;

fn user(confirmed: bool) -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        email_confirmed_at: confirmed.then(|| "2024-01-01T00:00:00Z".to_owned()),
    }
}

#[test]
fn sign_up_failed_message_formats_status() {
    assert_eq!(sign_up_failed_message(500), "sign up failed: 500");
}

#[test]
fn ok_reply_yields_user() {
    let reply = SignUpReply::success(Some(user(true)));
    assert_eq!(interpret_sign_up_reply(200, Some(reply)), Ok(Some(user(true))));
}

#[test]
fn ok_reply_without_user_yields_none() {
    assert_eq!(interpret_sign_up_reply(200, Some(SignUpReply::success(None))), Ok(None));
}

#[test]
fn not_configured_code_maps_to_not_configured() {
    let reply = SignUpReply::failure(ERROR_CODE_NOT_CONFIGURED, Some("missing SUPABASE_URL".to_owned()));
    assert_eq!(interpret_sign_up_reply(503, Some(reply)), Err(ProviderError::NotConfigured));
}

#[test]
fn upstream_code_maps_to_transport() {
    let reply = SignUpReply::failure(ERROR_CODE_UPSTREAM_UNAVAILABLE, None);
    assert_eq!(
        interpret_sign_up_reply(502, Some(reply)),
        Err(ProviderError::Transport("sign up failed: 502".to_owned()))
    );
}

#[test]
fn provider_rejection_keeps_message() {
    let reply = SignUpReply::failure(ERROR_CODE_PROVIDER_REJECTED, Some("User already registered".to_owned()));
    assert_eq!(
        interpret_sign_up_reply(422, Some(reply)),
        Err(ProviderError::Rejected { message: Some("User already registered".to_owned()) })
    );
}

#[test]
fn blank_rejection_message_is_dropped() {
    let reply = SignUpReply::failure(ERROR_CODE_PROVIDER_REJECTED, Some("  ".to_owned()));
    assert_eq!(interpret_sign_up_reply(400, Some(reply)), Err(ProviderError::Rejected { message: None }));
}

#[test]
fn unreadable_body_is_transport_error() {
    assert_eq!(
        interpret_sign_up_reply(504, None),
        Err(ProviderError::Transport("sign up failed: 504".to_owned()))
    );
}

#[test]
fn error_status_without_error_body_is_transport_error() {
    assert_eq!(
        interpret_sign_up_reply(500, Some(SignUpReply::default())),
        Err(ProviderError::Transport("sign up failed: 500".to_owned()))
    );
}

#[test]
fn sign_up_unavailable_outside_browser() {
    let request = SignUpRequest {
        email: "a@b.com".to_owned(),
        password: "secret".to_owned(),
        redirect_to: "http://localhost:3000/auth/callback".to_owned(),
    };
    let result = futures::executor::block_on(sign_up(&request));
    assert!(matches!(result, Err(ProviderError::Transport(_))));
}
