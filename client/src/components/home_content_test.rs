use super::*;
use crate::net::test_helpers::{confirmed_user, pending_user};

#[test]
fn greeting_includes_email() {
    assert_eq!(greeting("a@b.com"), "ようこそ、a@b.comさん");
}

// =============================================================
// HomeView::from_state
// =============================================================

#[test]
fn loading_state_renders_placeholder_card() {
    let home = HomeView::from_state(&AuthState::loading());
    assert_eq!(home, HomeView::Loading);
    assert!(home.links().is_empty());
}

#[test]
fn signed_in_user_gets_member_branch() {
    let home = HomeView::from_state(&AuthState::resolved(Some(confirmed_user())));
    assert_eq!(home, HomeView::Member { email: "a@b.com".to_owned() });
}

#[test]
fn unconfirmed_session_still_counts_as_member() {
    let home = HomeView::from_state(&AuthState::resolved(Some(pending_user())));
    assert!(matches!(home, HomeView::Member { .. }));
}

#[test]
fn no_session_gets_guest_branch() {
    assert_eq!(HomeView::from_state(&AuthState::resolved(None)), HomeView::Guest);
}

// =============================================================
// Links
// =============================================================

#[test]
fn member_links_start_learning_and_bookmarks() {
    let home = HomeView::Member { email: "a@b.com".to_owned() };
    let hrefs: Vec<&str> = home.links().iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/", "/bookmarks"]);
}

#[test]
fn guest_links_sign_up_then_log_in() {
    let hrefs: Vec<&str> = HomeView::Guest.links().iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/auth/signup", "/auth/login"]);
    assert_eq!(HomeView::Guest.links()[0].1, "新規登録");
}
