//! Home page branching on authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for everyone and the target of a confirmed sign-up
//! (`/?signup=success`). The success banner hides itself after
//! `AUTO_DISMISS` and strips the marker from the address bar.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::home_content::HomeContent;
use crate::state::banner::{SIGNUP_MARKER_KEY, SignupBanner};

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let marker = query.get_untracked().get(SIGNUP_MARKER_KEY);
    let banner = RwSignal::new(SignupBanner::from_marker(marker.as_deref()));

    #[cfg(feature = "hydrate")]
    if banner.get_untracked().is_visible() {
        use crate::state::banner::{AUTO_DISMISS, DismissGuard};

        let guard = DismissGuard::default();
        let task_guard = guard.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(AUTO_DISMISS).await;
            if !task_guard.is_alive() {
                return;
            }
            let hidden = banner.try_update(|b| task_guard.dismiss(b)).unwrap_or(false);
            if hidden {
                crate::util::browser::replace_url("/");
            }
        });
        on_cleanup(move || guard.cancel());
    }

    view! {
        <div class="page page--home">
            <div class="page-inner">
                <header class="page-header">
                    <h1 class="page-title">"英語学習チャット"</h1>
                    <p class="page-subtitle">"AIと一緒に英語を学ぼう"</p>
                </header>
                <HomeContent banner=banner/>
            </div>
        </div>
    }
}
