pub mod draft;
pub mod ui;

use crate::shared::resource_store::{Resource, ResourceKind};
use contracts::domain::a002_subcategory::aggregate::{self, Subcategory};
use contracts::shared::validation::RequiredField;

pub struct SubcategoryResource;

impl Resource for SubcategoryResource {
    type Entity = Subcategory;

    const KIND: ResourceKind = ResourceKind::Subcategories;
    const COLLECTION_PATH: &'static str = "/api/subcategories";
    const SINGULAR: &'static str = "subcategory";
    const PLURAL: &'static str = "subcategories";
    const REQUIRED: &'static [RequiredField] = aggregate::REQUIRED;
}
