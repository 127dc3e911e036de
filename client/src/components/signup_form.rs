//! Sign-up form card: three fields, inline message, submit button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `SignUpForm` state signal and runs one registration per submit.
//! On a confirmed account it navigates to the success landing and reloads the
//! shared `AuthState` context.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::signup::{MessageTone, SignUpForm};

fn submit_label(busy: bool) -> &'static str {
    if busy { "登録中..." } else { "新規登録" }
}

fn message_class(tone: MessageTone) -> &'static str {
    match tone {
        MessageTone::Error => "signup-message signup-message--error",
        MessageTone::Info => "signup-message signup-message--info",
    }
}

#[component]
pub fn SignUpFormCard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignUpForm::default());
    let busy = move || form.with(SignUpForm::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(SignUpForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::provider::ServerAuthProvider;
            use crate::net::registration::{callback_url, submit_registration};
            use crate::state::signup::SubmitEffect;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let origin = crate::util::browser::location_origin().unwrap_or_default();
                let outcome = submit_registration(&ServerAuthProvider, &credentials, &callback_url(&origin)).await;
                let effect = form
                    .try_update(|f| f.finish_submit(&outcome))
                    .unwrap_or(SubmitEffect::Stay);
                if let SubmitEffect::NavigateAndRefresh { path, user } = effect {
                    auth.set(AuthState::resolved(Some(user)));
                    navigate(path, NavigateOptions::default());
                    crate::util::auth::spawn_identity_refresh(auth);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &navigate, auth);
    };

    view! {
        <div class="signup-card">
            <form class="signup-form" on:submit=on_submit>
                <div class="signup-field">
                    <label for="email" class="signup-label">"メールアドレス"</label>
                    <input
                        id="email"
                        class="signup-input"
                        type="email"
                        required
                        placeholder="example@email.com"
                        aria-label="メールアドレス"
                        disabled=busy
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="signup-field">
                    <label for="password" class="signup-label">"パスワード"</label>
                    <input
                        id="password"
                        class="signup-input"
                        type="password"
                        required
                        minlength="6"
                        placeholder="6文字以上"
                        aria-label="パスワード"
                        disabled=busy
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <div class="signup-field">
                    <label for="confirmPassword" class="signup-label">"パスワード（確認）"</label>
                    <input
                        id="confirmPassword"
                        class="signup-input"
                        type="password"
                        required
                        minlength="6"
                        placeholder="パスワードを再入力"
                        aria-label="パスワード確認"
                        disabled=busy
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </div>
                {move || {
                    form.with(|f| f.message().cloned())
                        .map(|message| {
                            view! {
                                <div class=message_class(message.tone) role="alert">
                                    <p>{message.text}</p>
                                </div>
                            }
                        })
                }}
                <button class="signup-button" type="submit" disabled=busy>
                    {move || submit_label(busy())}
                </button>
            </form>
            <p class="signup-footer">
                "すでにアカウントをお持ちですか？ "
                <a href="/auth/login" class="signup-link">"ログイン"</a>
            </p>
        </div>
    }
}
