use crate::app::Services;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::error_banner::{confirm_delete, ErrorBanner};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::resource_store::ListQuery;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone)]
enum Dialog {
    Create,
    Edit(Category),
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let store = services.categories.clone();
    let state = store.state();
    let page_size = services.config.pagination.category_page_size;
    let page = RwSignal::new(1u32);
    let dialog = RwSignal::new(None::<Dialog>);

    let fetch = {
        let store = store.clone();
        move || {
            let store = store.clone();
            let query = ListQuery::page(page.get_untracked(), page_size);
            spawn_local(async move {
                let _ = store.fetch(&query).await;
            });
        }
    };

    let delete = {
        let store = store.clone();
        move |category: Category| {
            if !confirm_delete("category") {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                let _ = store.delete(&category.id).await;
            });
        }
    };

    let on_page_change = {
        let fetch = fetch.clone();
        Callback::new(move |next: u32| {
            page.set(next);
            fetch();
        })
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Categories"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| dialog.set(Some(Dialog::Create))>
                        {icon("plus")}
                        "Add Category"
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
                                <th>"Name"</th>
                                <th>"Description"</th>
                                <th>"Created"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|c| (c.id.clone(), c.name.clone(), c.cover().map(|m| m.url.clone()))
                                children={
                                    let delete = delete.clone();
                                    move |category: Category| {
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
                                        let delete = delete.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    {category.cover().map(|m| view! {
                                                        <img class="table__thumb" src=m.url.clone() alt=category.name.clone()/>
                                                    })}
                                                </td>
                                                <td>{category.name.clone()}</td>
                                                <td>{category.description.clone().unwrap_or_default()}</td>
                                                <td>{format_date(category.created_at)}</td>
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
                <PaginationControls
                    pagination=Signal::derive(move || state.with(|s| s.pagination))
                    on_page_change=on_page_change
                />
            </Show>

            {move || dialog.get().map(|mode| {
                let (title, editing) = match mode {
                    Dialog::Create => ("Add New Category", None),
                    Dialog::Edit(category) => ("Edit Category", Some(category)),
                };
                let close = Callback::new(move |_| dialog.set(None));
                view! {
                    <Modal title=title.to_string() on_close=close>
                        <CategoryDetails editing=editing on_saved=close on_cancel=close/>
                    </Modal>
                }
            })}
        </div>
    }
}
