mod dashboard;

pub use dashboard::TaxonomyMetricsDashboard;
