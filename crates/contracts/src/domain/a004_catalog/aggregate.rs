use crate::domain::common::Entity;
use crate::shared::validation::RequiredField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog file already uploaded to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub path: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
}

impl CatalogFile {
    /// Last path segment, shown in the list
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub files: Vec<CatalogFile>,
    #[serde(default)]
    pub total_size: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CatalogItem {
    pub fn total_size_kb(&self) -> u64 {
        (self.total_size + 512) / 1024
    }
}

impl Entity for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

/// Metadata of one transferred file, sent on create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFileMeta {
    pub path: String,
    pub size: u64,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCatalogDto {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_path: Option<String>,
    pub files: Vec<CatalogFileMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCatalogDto {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_path: Option<String>,
}

pub mod fields {
    pub const TITLE: &str = "title";
}

pub const REQUIRED: &[RequiredField] = &[RequiredField::new(fields::TITLE, "Title is required")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_wire_shape() {
        let dto = CreateCatalogDto {
            title: "Spring".into(),
            cover_image_path: None,
            files: vec![CatalogFileMeta {
                path: "catalogs/1/a.pdf".into(),
                size: 10,
                content_type: "application/pdf".into(),
            }],
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["files"][0]["contentType"], "application/pdf");
        assert!(json.get("coverImagePath").is_none());
    }

    #[test]
    fn file_name_is_last_segment() {
        let f = CatalogFile {
            path: "catalogs/17/brochure.pdf".into(),
            url: String::new(),
            size: 0,
            content_type: String::new(),
        };
        assert_eq!(f.file_name(), "brochure.pdf");
    }
}
