//! Response envelopes
//!
//! Some endpoints wrap results in `{ data, pagination }`, others return the
//! bare payload. Both are accepted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        match self {
            ListEnvelope::Paged { data, pagination } => (data, pagination),
            ListEnvelope::Bare(items) => (items, None),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SingleEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> SingleEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            SingleEnvelope::Wrapped { data } => data,
            SingleEnvelope::Bare(value) => value,
        }
    }
}
