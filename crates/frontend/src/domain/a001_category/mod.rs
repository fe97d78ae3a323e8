//! Categories: top level of the taxonomy, one optional cover image each.

pub mod draft;
pub mod ui;

use crate::shared::resource_store::{Resource, ResourceKind};
use contracts::domain::a001_category::aggregate::{self, Category};
use contracts::shared::validation::RequiredField;

pub struct CategoryResource;

impl Resource for CategoryResource {
    type Entity = Category;

    const KIND: ResourceKind = ResourceKind::Categories;
    const COLLECTION_PATH: &'static str = "/api/categories";
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const REQUIRED: &'static [RequiredField] = aggregate::REQUIRED;
    const PAGINATED: bool = true;
}
