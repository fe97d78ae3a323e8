//! Media references
//!
//! The API returns images either as bare URL strings or as records carrying a
//! storage path and size. Both are normalized on read, so every `MediaRef` in
//! memory exposes a `url`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireMediaRef")]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl MediaRef {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: None,
            size: None,
            content_type: None,
        }
    }

    /// Empty URLs are what the API sends for "no image"
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireMediaRef {
    Url(String),
    Record {
        #[serde(default)]
        url: String,
        #[serde(default, alias = "publicId", alias = "public_id")]
        path: Option<String>,
        #[serde(default)]
        size: Option<u64>,
        #[serde(default, rename = "contentType", alias = "content_type")]
        content_type: Option<String>,
    },
}

impl From<WireMediaRef> for MediaRef {
    fn from(wire: WireMediaRef) -> Self {
        match wire {
            WireMediaRef::Url(url) => MediaRef::from_url(url),
            WireMediaRef::Record {
                url,
                path,
                size,
                content_type,
            } => MediaRef {
                url,
                path,
                size,
                content_type,
            },
        }
    }
}

/// Drop entries the API sent without a usable URL
pub fn non_empty(refs: Vec<MediaRef>) -> Vec<MediaRef> {
    refs.into_iter().filter(|m| !m.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_and_record_normalize_to_same_shape() {
        let refs: Vec<MediaRef> = serde_json::from_str(
            r#"["https://cdn/a.jpg", {"url": "https://cdn/b.jpg", "publicId": "sub/b", "size": 12}]"#,
        )
        .unwrap();

        assert_eq!(refs[0], MediaRef::from_url("https://cdn/a.jpg"));
        assert_eq!(refs[1].url, "https://cdn/b.jpg");
        assert_eq!(refs[1].path.as_deref(), Some("sub/b"));
        assert_eq!(refs[1].size, Some(12));
    }

    #[test]
    fn record_without_url_is_empty() {
        let r: MediaRef = serde_json::from_str(r#"{"path": "x"}"#).unwrap();
        assert!(r.is_empty());
        assert!(non_empty(vec![r]).is_empty());
    }
}
