use crate::app::Services;
use crate::domain::a002_subcategory::ui::details::SubcategoryDetails;
use crate::shared::components::error_banner::{confirm_delete, ErrorBanner};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_store::ListQuery;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
enum Dialog {
    Create,
    Edit(Subcategory),
}

#[component]
#[allow(non_snake_case)]
pub fn SubcategoryList() -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let store = services.subcategories.clone();
    let state = store.state();
    let categories = services.categories.clone();
    let category_state = categories.state();
    let dialog = RwSignal::new(None::<Dialog>);

    let fetch = {
        let store = store.clone();
        move || {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.fetch(&ListQuery::all()).await;
            });
        }
    };

    // Names for the category column and options for the form
    spawn_local(async move {
        let _ = categories.fetch(&ListQuery::all()).await;
    });

    let category_name = move |sub: &Subcategory| -> String {
        let Some(parent) = sub.category.as_ref() else {
            return "-".to_string();
        };
        if let Some(name) = parent.name() {
            return name.to_string();
        }
        category_state
            .with(|s| s.find(parent.id()).map(|c| c.name.clone()))
            .unwrap_or_else(|| parent.id().to_string())
    };

    let delete = {
        let store = store.clone();
        move |sub: Subcategory| {
            if !confirm_delete("subcategory") {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                let _ = store.delete(&sub.id).await;
            });
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Subcategories"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Add Subcategory"
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
                <div class="table-container">
                    <table class="table__data">
                        <thead>
                            <tr>
                                <th>"Images"</th>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Status"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|s| (s.id.clone(), s.name.clone(), s.images.len(), s.category_id().map(str::to_string))
                                children={
                                    let delete = delete.clone();
                                    move |sub: Subcategory| {
                                        let for_edit = sub.clone();
                                        let for_delete = sub.clone();
                                        let delete = delete.clone();
                                        let category = category_name(&sub);
                                        let media = sub.media();
                                        let extra = media.len().saturating_sub(1);
                                        view! {
                                            <tr>
                                                <td>
                                                    {media.first().map(|m| view! {
                                                        <img class="table__thumb" src=m.url.clone() alt=sub.name.clone()/>
                                                    })}
                                                    {(extra > 0).then(|| view! { <span class="table__more">{format!("+{}", extra)}</span> })}
                                                </td>
                                                <td>{sub.name.clone()}</td>
                                                <td>{category}</td>
                                                <td>
                                                    <span class="badge">{sub.status.as_str()}</span>
                                                </td>
                                                <td>{format_date(sub.created_at)}</td>
                                                <td class="table__actions">
                                                    <button class="button button--icon" title="Edit"
                                                        on:click=move |_| dialog.set(Some(Dialog::Edit(for_edit.clone())))>
                                                        {icon("edit")}
                                                    </button>
                                                    <button class="button button--icon" title="Delete"
                                                        on:click=move |_| delete(for_delete.clone())>
                                                        {icon("delete")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            {move || dialog.get().map(|mode| {
                let (title, editing) = match mode {
                    Dialog::Create => ("Add New Subcategory", None),
                    Dialog::Edit(sub) => ("Edit Subcategory", Some(sub)),
                };
                let close = Callback::new(move |_| dialog.set(None));
                view! {
                    <Modal title=title.to_string() on_close=close>
                        <SubcategoryDetails editing=editing on_saved=close on_cancel=close/>
                    </Modal>
                }
            })}
        </div>
    }
}
