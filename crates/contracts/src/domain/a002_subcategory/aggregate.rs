use crate::domain::common::media_ref::non_empty;
use crate::domain::common::{Entity, MediaRef, ParentRef};
use crate::shared::validation::RequiredField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubcategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl SubcategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubcategoryStatus::Active => "Active",
            SubcategoryStatus::Inactive => "Inactive",
        }
    }
}

/// Subcategory; `category` is `None` when the parent was deleted or not yet assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<ParentRef>,
    #[serde(default)]
    pub cover_image: Option<MediaRef>,
    #[serde(default)]
    pub images: Vec<MediaRef>,
    #[serde(default)]
    pub status: SubcategoryStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Subcategory {
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(ParentRef::id)
    }

    pub fn media(&self) -> Vec<MediaRef> {
        non_empty(self.images.clone())
    }
}

impl Entity for Subcategory {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CATEGORY: &str = "category";
    pub const IMAGES: &str = "images";
    pub const KEEP_EXISTING: &str = "keepExistingImages";
    pub const EXISTING_TO_KEEP: &str = "existingImagesToKeep";
}

pub const REQUIRED: &[RequiredField] = &[
    RequiredField::new(fields::NAME, "Name is required"),
    RequiredField::new(fields::CATEGORY, "Please select a category"),
];
