pub mod d400_taxonomy_metrics;

pub use d400_taxonomy_metrics::ui::TaxonomyMetricsDashboard;
