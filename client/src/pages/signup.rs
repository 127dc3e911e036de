//! Sign-up page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::signup_form::SignUpFormCard;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <Title text="新規登録 | 英語学習チャット"/>
        <div class="page page--signup">
            <div class="page-inner">
                <header class="page-header">
                    <h1 class="page-title">"英語学習チャット"</h1>
                    <p class="page-subtitle">"新規アカウントを作成"</p>
                </header>
                <SignUpFormCard/>
            </div>
        </div>
    }
}
