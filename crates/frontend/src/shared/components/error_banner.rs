use crate::shared::icons::icon;
use leptos::prelude::*;

/// Store error shown above a list, with a dismiss button
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{text}</span>
                    <button class="button button--icon" on:click=move |_| on_dismiss.run(())>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}

/// Browser confirmation before a delete
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Delete this {}?", what))
                .ok()
        })
        .unwrap_or(false)
}
