use crate::shared::http::Payload;
use contracts::domain::common::Entity;
use contracts::shared::validation::{RequiredField, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Categories,
    Subcategories,
    Gallery,
    Catalog,
}

impl ResourceKind {
    /// Key under `[api.overrides]` in config.toml
    pub fn config_key(&self) -> &'static str {
        match self {
            ResourceKind::Categories => "categories",
            ResourceKind::Subcategories => "subcategories",
            ResourceKind::Gallery => "gallery",
            ResourceKind::Catalog => "catalog",
        }
    }
}

/// Where `create` puts the server-returned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Append,
    Prepend,
}

/// Static description of one entity collection
pub trait Resource: 'static {
    type Entity: Entity;

    const KIND: ResourceKind;
    const COLLECTION_PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    const REQUIRED: &'static [RequiredField];
    const INSERT_AT: InsertPosition = InsertPosition::Append;
    /// Whether `fetch` sends `page`/`limit` and keeps the returned pagination
    const PAGINATED: bool = false;

    /// Required-field check run before any write
    fn validate<F>(payload: &Payload<F>) -> Result<(), ValidationError> {
        for rule in Self::REQUIRED {
            rule.check(payload.text(rule.field).as_deref())?;
        }
        Ok(())
    }
}

/// Arguments of `fetch`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: Vec<(String, String)>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            filter: Vec::new(),
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Adds a filter; empty values are not sent
    pub fn with_filter(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.filter.push((key.to_string(), value));
        }
        self
    }

    pub fn to_pairs(&self, paginated: bool) -> Vec<(String, String)> {
        let mut pairs = self.filter.clone();
        if paginated {
            if let Some(page) = self.page {
                pairs.push(("page".to_string(), page.to_string()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit".to_string(), limit.to_string()));
            }
        }
        pairs
    }
}
