use super::*;
use crate::net::test_helpers::confirmed_user;

#[test]
fn marker_success_shows_banner() {
    assert!(SignupBanner::from_marker(Some("success")).is_visible());
}

#[test]
fn other_marker_values_hide_banner() {
    assert!(!SignupBanner::from_marker(None).is_visible());
    assert!(!SignupBanner::from_marker(Some("")).is_visible());
    assert!(!SignupBanner::from_marker(Some("failed")).is_visible());
}

#[test]
fn banner_survives_until_delay_elapses() {
    let mut banner = SignupBanner::from_marker(Some("success"));
    assert!(!banner.tick(Duration::from_millis(4_999)));
    assert!(banner.is_visible());
}

#[test]
fn banner_gone_after_auto_dismiss_delay() {
    let mut banner = SignupBanner::from_marker(Some("success"));
    assert!(banner.tick(AUTO_DISMISS));
    assert!(!banner.is_visible());
    // Already hidden: later ticks report nothing new.
    assert!(!banner.tick(AUTO_DISMISS * 2));
}

#[test]
fn hidden_banner_tick_is_noop() {
    let mut banner = SignupBanner::default();
    assert!(!banner.tick(AUTO_DISMISS));
    assert!(!banner.is_visible());
}

#[test]
fn banner_text_greets_authenticated_user_by_email() {
    let text = banner_text(&Identity::Authenticated(confirmed_user()));
    assert!(text.contains("a@b.com"));
    assert!(text.starts_with("✅ 登録が完了しました！"));
}

#[test]
fn banner_text_prompts_anonymous_user_to_log_in() {
    assert_eq!(banner_text(&Identity::Anonymous), "✅ 登録が完了しました！ログインして学習を始めましょう");
}

// =============================================================
// DismissGuard
// =============================================================

#[test]
fn live_guard_dismisses_banner() {
    let guard = DismissGuard::default();
    let mut banner = SignupBanner::from_marker(Some("success"));
    assert!(guard.dismiss(&mut banner));
    assert!(!banner.is_visible());
}

#[test]
fn cancelled_guard_leaves_banner_untouched() {
    let guard = DismissGuard::default();
    let task_copy = guard.clone();
    guard.cancel();

    let mut banner = SignupBanner::from_marker(Some("success"));
    assert!(!task_copy.is_alive());
    assert!(!task_copy.dismiss(&mut banner));
    assert!(banner.is_visible());
}
