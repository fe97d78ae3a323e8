//! Catalogs: downloadable file bundles. Files go straight to storage through
//! the upload session; the API only ever sees their metadata.

pub mod draft;
pub mod ui;

use crate::shared::resource_store::{InsertPosition, Resource, ResourceKind};
use contracts::domain::a004_catalog::aggregate::{self, CatalogItem};
use contracts::shared::validation::RequiredField;

pub struct CatalogResource;

impl Resource for CatalogResource {
    type Entity = CatalogItem;

    const KIND: ResourceKind = ResourceKind::Catalog;
    const COLLECTION_PATH: &'static str = "/api/catalog";
    const SINGULAR: &'static str = "catalog";
    const PLURAL: &'static str = "catalogs";
    const REQUIRED: &'static [RequiredField] = aggregate::REQUIRED;
    const INSERT_AT: InsertPosition = InsertPosition::Prepend;
}
