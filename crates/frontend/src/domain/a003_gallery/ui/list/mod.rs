use crate::app::Services;
use crate::domain::a003_gallery::ui::details::GalleryDetails;
use crate::shared::components::error_banner::{confirm_delete, ErrorBanner};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_store::ListQuery;
use contracts::domain::a003_gallery::aggregate::GalleryItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
enum Dialog {
    Create,
    Edit(GalleryItem),
}

#[component]
#[allow(non_snake_case)]
pub fn GalleryList() -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let store = services.gallery.clone();
    let state = store.state();
    let subcategories = services.subcategories.clone();
    let subcategory_state = subcategories.state();
    let dialog = RwSignal::new(None::<Dialog>);
    // empty string means all subcategories
    let filter = RwSignal::new(String::new());

    let fetch = {
        let store = store.clone();
        move || {
            let store = store.clone();
            let query = ListQuery::all().with_filter("subcategory", filter.get_untracked());
            spawn_local(async move {
                let _ = store.fetch(&query).await;
            });
        }
    };

    spawn_local(async move {
        let _ = subcategories.fetch(&ListQuery::all()).await;
    });

    let subcategory_name = move |item: &GalleryItem| -> String {
        let Some(parent) = item.subcategory.as_ref() else {
            return "-".to_string();
        };
        if let Some(name) = parent.name() {
            return name.to_string();
        }
        subcategory_state
            .with(|s| s.find(parent.id()).map(|sub| sub.name.clone()))
            .unwrap_or_else(|| parent.id().to_string())
    };

    let delete = {
        let store = store.clone();
        move |item: GalleryItem| {
            if !confirm_delete("gallery item") {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                let _ = store.delete(&item.id).await;
            });
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Gallery"</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="header__filter"
                        prop:value=move || filter.get()
                        on:change={
                            let fetch = fetch.clone();
                            move |ev| {
                                filter.set(event_target_value(&ev));
                                fetch();
                            }
                        }
                    >
                        <option value="">"All subcategories"</option>
                        {move || subcategory_state.with(|s| {
                            s.items
                                .iter()
                                .map(|sub| view! { <option value=sub.id.clone()>{sub.name.clone()}</option> })
                                .collect_view()
                        })}
                    </select>
                    <button class="button button--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Add Item"
                    </button>
                    <button class="button button--secondary" on:click={
                        let fetch = fetch.clone();
                        move |_| fetch()
                    }>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
                on_dismiss=Callback::new({
                    let store = store.clone();
                    move |_| store.dismiss_error()
                })
            />

            <Show
                when=move || !state.with(|s| s.is_initial_loading())
                fallback=|| view! { <div class="spinner">"Loading..."</div> }
            >
                <div class="gallery-grid">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|g| (g.id.clone(), g.title.clone(), g.media().len(), g.subcategory_id().map(str::to_string))
                        children={
                            let delete = delete.clone();
                            move |item: GalleryItem| {
                                let for_edit = item.clone();
                                let for_delete = item.clone();
                                let delete = delete.clone();
                                let subcategory = subcategory_name(&item);
                                let media = item.media();
                                let count = media.len();
                                view! {
                                    <div class="gallery-card">
                                        <div class="gallery-card__image">
                                            {match media.first() {
                                                Some(m) => view! { <img src=m.url.clone() alt=item.title.clone()/> }.into_any(),
                                                None => view! { <div class="gallery-card__empty">{icon("image")}</div> }.into_any(),
                                            }}
                                            {(count > 1).then(|| view! { <span class="gallery-card__count">{count}</span> })}
                                        </div>
                                        <div class="gallery-card__body">
                                            <h3>{item.title.clone()}</h3>
                                            <p class="gallery-card__meta">{subcategory}</p>
                                            <p class="gallery-card__meta">{format_date(item.created_at)}</p>
                                        </div>
                                        <div class="gallery-card__actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| dialog.set(Some(Dialog::Edit(for_edit.clone())))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Delete"
                                                on:click=move |_| delete(for_delete.clone())>
                                                {icon("delete")}
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
                <Show when=move || state.with(|s| s.loaded && s.items.is_empty())>
                    <p class="empty">"No gallery items yet"</p>
                </Show>
            </Show>

            {move || dialog.get().map(|mode| {
                let (title, editing) = match mode {
                    Dialog::Create => ("Add Gallery Item", None),
                    Dialog::Edit(item) => ("Edit Gallery Item", Some(item)),
                };
                let current = Some(filter.get_untracked()).filter(|f| !f.is_empty());
                let close = Callback::new(move |_| dialog.set(None));
                view! {
                    <Modal title=title.to_string() on_close=close>
                        <GalleryDetails editing=editing subcategory_filter=current on_saved=close on_cancel=close/>
                    </Modal>
                }
            })}
        </div>
    }
}
