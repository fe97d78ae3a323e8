use crate::shared::config::Config;
use crate::shared::http::{ApiClient, ApiError, HttpTransport};
use crate::shared::resource_store::{RequestStatus, RequestTracker};
use contracts::shared::metrics::DashboardMetrics;
use leptos::prelude::*;

pub const METRICS_PATH: &str = "/admin/metrics";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsState {
    pub metrics: Option<DashboardMetrics>,
    pub tracker: RequestTracker,
}

/// Counters for the dashboard, same request lifecycle as a resource store
#[derive(Clone)]
pub struct MetricsStore<T: HttpTransport> {
    state: RwSignal<MetricsState>,
    client: ApiClient<T>,
    url: String,
}

impl<T: HttpTransport> MetricsStore<T> {
    pub fn new(client: ApiClient<T>, config: &Config) -> Self {
        Self::with_url(client, config.endpoint("metrics", METRICS_PATH))
    }

    pub fn with_url(client: ApiClient<T>, url: impl Into<String>) -> Self {
        Self {
            state: RwSignal::new(MetricsState::default()),
            client,
            url: url.into(),
        }
    }

    pub fn state(&self) -> RwSignal<MetricsState> {
        self.state
    }

    pub fn status(&self) -> RequestStatus {
        self.state.with_untracked(|s| s.tracker.status)
    }

    /// Loads category and subcategory totals
    pub async fn fetch(&self) -> Result<DashboardMetrics, ApiError> {
        let ticket = self.state.try_update(|s| s.tracker.begin());
        let result = self.client.get::<DashboardMetrics>(&self.url, Vec::new()).await;

        let Some(ticket) = ticket else {
            return result;
        };
        match &result {
            Ok(metrics) => {
                let metrics = metrics.clone();
                self.state.try_update(|s| {
                    if s.tracker.succeed(ticket) {
                        s.metrics = Some(metrics);
                    }
                });
            }
            Err(e) => {
                let message = e.message_or("Failed to fetch metrics");
                log::warn!("Failed to fetch metrics: {}", e);
                self.state.try_update(|s| s.tracker.fail(ticket, message));
            }
        }
        result
    }
}
