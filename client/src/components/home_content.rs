//! Home page body: success banner plus the authenticated or anonymous branch.

#[cfg(test)]
#[path = "home_content_test.rs"]
mod home_content_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::banner::{SignupBanner, banner_text};

/// `(href, label)` for a call-to-action button.
type NavLink = (&'static str, &'static str);

const MEMBER_LINKS: [NavLink; 2] = [("/", "学習を始める"), ("/bookmarks", "ブックマーク一覧")];
const GUEST_LINKS: [NavLink; 2] = [("/auth/signup", "新規登録"), ("/auth/login", "ログイン")];

/// Which branch the home card renders.
#[derive(Clone, Debug, PartialEq, Eq)]
enum HomeView {
    Loading,
    Member { email: String },
    Guest,
}

impl HomeView {
    fn from_state(state: &AuthState) -> Self {
        if state.loading {
            return Self::Loading;
        }
        state
            .identity
            .user()
            .map_or(Self::Guest, |user| Self::Member { email: user.email.clone() })
    }

    fn links(&self) -> &'static [NavLink] {
        match self {
            Self::Loading => &[],
            Self::Member { .. } => &MEMBER_LINKS,
            Self::Guest => &GUEST_LINKS,
        }
    }
}

fn greeting(email: &str) -> String {
    format!("ようこそ、{email}さん")
}

fn render_links(links: &'static [NavLink]) -> impl IntoView {
    links
        .iter()
        .enumerate()
        .map(|(i, (href, label))| {
            let class = if i == 0 { "home-button home-button--primary" } else { "home-button" };
            view! { <a href=*href class=class>{*label}</a> }
        })
        .collect_view()
}

#[component]
pub fn HomeContent(banner: RwSignal<SignupBanner>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let body = move || {
        let home = auth.with(HomeView::from_state);
        let links = home.links();
        match home {
            HomeView::Loading => view! { <div class="home-card home-card--loading"></div> }.into_any(),
            HomeView::Member { email } => view! {
                <div class="home-card">
                    <h2 class="home-greeting">{greeting(&email)}</h2>
                    <p class="home-subtitle">"英語学習を始めましょう"</p>
                    <div class="home-actions">{render_links(links)}</div>
                </div>
            }
            .into_any(),
            HomeView::Guest => view! {
                <div class="home-card">
                    <p class="home-subtitle">"英語学習を始めるには、アカウントが必要です"</p>
                    <div class="home-actions">{render_links(links)}</div>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="home-content">
            <Show when=move || banner.get().is_visible()>
                <div class="home-banner" role="alert">
                    <p>{move || auth.with(|state| banner_text(&state.identity))}</p>
                </div>
            </Show>
            {body}
        </div>
    }
}
