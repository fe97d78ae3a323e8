use crate::app_shell::AppShell;
use crate::dashboards::d400_taxonomy_metrics::api::MetricsStore;
use crate::domain::a001_category::CategoryResource;
use crate::domain::a002_subcategory::SubcategoryResource;
use crate::domain::a003_gallery::GalleryResource;
use crate::domain::a004_catalog::CatalogResource;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::{load_config, Config};
use crate::shared::http::{ApiClient, GlooTransport};
use crate::shared::resource_store::ResourceStore;
use crate::shared::upload_session::UploadSession;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Stores and clients shared by every page, built once the config is loaded
#[derive(Clone)]
pub struct Services {
    pub config: Config,
    pub client: ApiClient<GlooTransport>,
    pub categories: ResourceStore<CategoryResource, GlooTransport>,
    pub subcategories: ResourceStore<SubcategoryResource, GlooTransport>,
    pub gallery: ResourceStore<GalleryResource, GlooTransport>,
    pub catalog: ResourceStore<CatalogResource, GlooTransport>,
    pub metrics: MetricsStore<GlooTransport>,
    pub uploads: UploadSession<GlooTransport>,
}

impl Services {
    pub fn new(config: Config, auth: AuthContext) -> Self {
        let client = ApiClient::new(GlooTransport).with_token(auth.token);
        Self {
            categories: ResourceStore::new(client.clone(), &config),
            subcategories: ResourceStore::new(client.clone(), &config),
            gallery: ResourceStore::new(client.clone(), &config),
            catalog: ResourceStore::new(client.clone(), &config),
            metrics: MetricsStore::new(client.clone(), &config),
            uploads: UploadSession::new(client.clone(), &config),
            client,
            config,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::restore();
    provide_context(auth);
    provide_context(AppGlobalContext::new());

    let services = RwSignal::new(None::<Services>);
    spawn_local(async move {
        let config = load_config().await;
        services.set(Some(Services::new(config, auth)));
    });

    view! {
        {move || match services.get() {
            Some(services) => {
                provide_context(services);
                view! { <AppShell /> }.into_any()
            }
            None => view! { <div class="spinner">"Loading..."</div> }.into_any(),
        }}
    }
}
