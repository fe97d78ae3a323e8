use crate::domain::common::{Entity, MediaRef};
use crate::shared::validation::RequiredField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<MediaRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Cover image, `None` when absent or sent as an empty string
    pub fn cover(&self) -> Option<&MediaRef> {
        self.cover_image.as_ref().filter(|m| !m.is_empty())
    }
}

impl Entity for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Multipart field names of the category form
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const COVER_IMAGE: &str = "coverImage";
}

pub const REQUIRED: &[RequiredField] = &[RequiredField::new(
    fields::NAME,
    "Category name is required",
)];
