use crate::shared::form_session::MediaSlot;
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Files chosen in an `<input type="file">`; the input is reset so the
/// same file can be picked again
pub fn files_from_event(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    let input: HtmlInputElement = event_target(ev);
    let files = match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    };
    input.set_value("");
    files
}

/// Thumbnails of existing and newly picked media, with a file input
#[component]
pub fn MediaPicker(
    #[prop(into)] label: String,
    #[prop(into)] slots: Signal<Vec<MediaSlot>>,
    #[prop(into)] notice: Signal<Option<String>>,
    on_select: Callback<Vec<web_sys::File>>,
    on_remove: Callback<usize>,
    #[prop(optional)] multiple: bool,
    #[prop(optional, into)] accept: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let accept = accept.unwrap_or_else(|| "image/*".to_string());

    view! {
        <div class="form-group media-picker">
            <label>{label}</label>
            <div class="media-picker__grid">
                <For
                    each=move || slots.get()
                    key=|slot| (slot.index, slot.url.clone(), slot.label.clone())
                    children=move |slot| {
                        let index = slot.index;
                        let preview = match slot.url.clone() {
                            Some(url) if !slot.label.ends_with(".pdf") => {
                                view! { <img src=url alt=slot.label.clone() class="media-picker__thumb"/> }.into_any()
                            }
                            _ => view! { <span class="media-picker__file">{icon("file")}</span> }.into_any(),
                        };
                        view! {
                            <div class="media-picker__tile" class:media-picker__tile--new=slot.is_new>
                                {preview}
                                <span class="media-picker__label">{slot.label.clone()}</span>
                                <button
                                    type="button"
                                    class="button button--icon media-picker__remove"
                                    on:click=move |_| on_remove.run(index)
                                    disabled=move || disabled.get()
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <input
                type="file"
                accept=accept
                multiple=multiple
                disabled=move || disabled.get()
                on:change=move |ev| {
                    let files = files_from_event(&ev);
                    if !files.is_empty() {
                        on_select.run(files);
                    }
                }
            />
            {move || notice.get().map(|text| view! { <div class="form-notice">{text}</div> })}
        </div>
    }
}
