//! Sidebar: one item per page plus sign-out

use crate::layout::global_context::{AppGlobalContext, PAGES};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    view! {
        <div class="app-sidebar__content">
            {PAGES.iter().map(|&(key, label, icon_name)| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_page(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}

            <div
                class="app-sidebar__item app-sidebar__item--logout"
                style:padding-left="12px"
                on:click=move |_| auth.sign_out()
            >
                <div class="app-sidebar__item-content">
                    {icon("log-out")}
                    <span>"Logout"</span>
                </div>
            </div>
        </div>
    }
}
