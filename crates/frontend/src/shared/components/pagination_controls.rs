use crate::shared::icons::icon;
use contracts::domain::common::Pagination;
use leptos::prelude::*;

/// PaginationControls component - previous/next over server pages
///
/// Pages are 1-based, as sent by the API.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Option<Pagination>>,
    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let page = move || pagination.get().map(|p| p.page).unwrap_or(1);
    let has_prev = move || pagination.get().map(|p| p.has_prev()).unwrap_or(false);
    let has_next = move || pagination.get().map(|p| p.has_next()).unwrap_or(false);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page().saturating_sub(1).max(1))
                disabled=move || !has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || match pagination.get() {
                    Some(p) => format!("{} / {} ({})", p.page, p.total_pages.max(1), p.total_items),
                    None => "1 / 1".to_string(),
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page() + 1)
                disabled=move || !has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
