//! Gallery items: titled image sets, optionally filed under a subcategory.

pub mod draft;
pub mod ui;

use crate::shared::resource_store::{Resource, ResourceKind};
use contracts::domain::a003_gallery::aggregate::{self, GalleryItem};
use contracts::shared::validation::RequiredField;

pub struct GalleryResource;

impl Resource for GalleryResource {
    type Entity = GalleryItem;

    const KIND: ResourceKind = ResourceKind::Gallery;
    const COLLECTION_PATH: &'static str = "/api/gallery";
    const SINGULAR: &'static str = "gallery item";
    const PLURAL: &'static str = "gallery items";
    const REQUIRED: &'static [RequiredField] = aggregate::REQUIRED;
}
