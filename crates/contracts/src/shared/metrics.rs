use serde::{Deserialize, Serialize};

/// Dashboard counters from `GET /admin/metrics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_categories: u64,
    #[serde(default)]
    pub total_subcategories: u64,
}
