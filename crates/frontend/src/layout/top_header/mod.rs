//! Top bar: sidebar toggle, current page title, sign-out

use crate::layout::global_context::{page_title, AppGlobalContext};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"Admin Panel"</span>
                <span class="top-header__page">{move || ctx.active.with(|key| page_title(key))}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=move |_| auth.sign_out() title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
