//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::server::SharedValue;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, signup::SignUpPage};
use crate::state::auth::SessionUser;
use crate::util::auth::{seed_auth_state, spawn_identity_refresh};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `AuthState` context, seeded from the server-resolved
/// session when there is one, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Computed during SSR, deserialized on hydrate so both render the same branch.
    let seeded = SharedValue::new(|| seed_auth_state(use_context::<SessionUser>()));
    let auth = RwSignal::new(seeded.into_inner());
    provide_context(auth);
    if auth.get_untracked().loading {
        spawn_identity_refresh(auth);
    }

    view! {
        <Title text="英語学習チャット"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignUpPage/>
            </Routes>
        </Router>
    }
}
