use crate::app::Services;
use crate::domain::a004_catalog::ui::details::CatalogDetails;
use crate::shared::components::error_banner::{confirm_delete, ErrorBanner};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_store::ListQuery;
use contracts::domain::a004_catalog::aggregate::CatalogItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
enum Dialog {
    Create,
    Edit(CatalogItem),
}

#[component]
#[allow(non_snake_case)]
pub fn CatalogList() -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let store = services.catalog.clone();
    let state = store.state();
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

    let delete = {
        let store = store.clone();
        move |item: CatalogItem| {
            if !confirm_delete("catalog") {
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
                    <h1 class="header__title">"Catalog"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Add Catalog"
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
                                <th>"Cover"</th>
                                <th>"Title"</th>
                                <th>"File"</th>
                                <th>"Files"</th>
                                <th>"Size (KB)"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|c| (c.id.clone(), c.title.clone(), c.cover_image_url.clone(), c.files.len())
                                children={
                                    let delete = delete.clone();
                                    move |item: CatalogItem| {
                                        let for_edit = item.clone();
                                        let for_delete = item.clone();
                                        let delete = delete.clone();
                                        let first_file = item
                                            .files
                                            .first()
                                            .map(|f| f.file_name().to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>
                                                    {item.cover_image_url.clone().map(|url| view! {
                                                        <img class="table__thumb" src=url alt=item.title.clone()/>
                                                    })}
                                                </td>
                                                <td>{item.title.clone()}</td>
                                                <td>{first_file}</td>
                                                <td>{item.files.len()}</td>
                                                <td>{item.total_size_kb()}</td>
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
                    Dialog::Create => ("Add Catalog", None),
                    Dialog::Edit(item) => ("Edit Catalog", Some(item)),
                };
                let close = Callback::new(move |_| dialog.set(None));
                view! {
                    <Modal title=title.to_string() on_close=close>
                        <CatalogDetails editing=editing on_saved=close on_cancel=close/>
                    </Modal>
                }
            })}
        </div>
    }
}
