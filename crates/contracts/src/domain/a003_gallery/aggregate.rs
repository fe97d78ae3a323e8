use crate::domain::common::media_ref::non_empty;
use crate::domain::common::{Entity, MediaRef, ParentRef};
use crate::shared::validation::RequiredField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gallery entry with one or more images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subcategory: Option<ParentRef>,
    #[serde(default)]
    pub images: Vec<MediaRef>,
    /// Single-image records written before galleries held several images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GalleryItem {
    /// All images, the legacy `imageUrl` first when present
    pub fn media(&self) -> Vec<MediaRef> {
        let mut all = Vec::with_capacity(self.images.len() + 1);
        if let Some(url) = &self.image_url {
            if !self.images.iter().any(|m| &m.url == url) {
                all.push(MediaRef::from_url(url.clone()));
            }
        }
        all.extend(self.images.iter().cloned());
        non_empty(all)
    }

    pub fn subcategory_id(&self) -> Option<&str> {
        self.subcategory.as_ref().map(ParentRef::id)
    }
}

impl Entity for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const IMAGES: &str = "images";
    pub const EXISTING_TO_KEEP: &str = "existingImagesToKeep";
}

pub const REQUIRED: &[RequiredField] = &[RequiredField::new(fields::TITLE, "Title is required")];
