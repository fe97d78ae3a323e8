use crate::app::Services;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::stat_card::StatCard;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Dashboard with category and subcategory counters
#[component]
pub fn TaxonomyMetricsDashboard() -> impl IntoView {
    let services = use_context::<Services>().expect("Services not found in context");
    let store = services.metrics.clone();
    let state = store.state();

    let load = move || {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.fetch().await;
        });
    };
    load();

    let loading = Signal::derive(move || state.with(|s| s.tracker.is_loading()));
    let categories = Signal::derive(move || state.with(|s| s.metrics.map(|m| m.total_categories)));
    let subcategories =
        Signal::derive(move || state.with(|s| s.metrics.map(|m| m.total_subcategories)));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>
            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.tracker.error.clone()))
                on_dismiss=Callback::new(move |_| state.update(|s| s.tracker.dismiss_error()))
            />
            <div class="stat-grid">
                <StatCard label="Categories" icon_name="folder" value=categories loading=loading/>
                <StatCard label="Subcategories" icon_name="layers" value=subcategories loading=loading/>
            </div>
        </div>
    }
}
