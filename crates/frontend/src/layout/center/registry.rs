//! Page key to view mapping

use crate::dashboards::TaxonomyMetricsDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_subcategory::ui::list::SubcategoryList;
use crate::domain::a003_gallery::ui::list::GalleryList;
use crate::domain::a004_catalog::ui::list::CatalogList;
use leptos::prelude::*;

/// Unknown keys render the dashboard
pub fn render_page(key: &str) -> AnyView {
    match key {
        "categories" => view! { <CategoryList /> }.into_any(),
        "subcategories" => view! { <SubcategoryList /> }.into_any(),
        "gallery" => view! { <GalleryList /> }.into_any(),
        "catalog" => view! { <CatalogList /> }.into_any(),
        _ => view! { <TaxonomyMetricsDashboard /> }.into_any(),
    }
}
