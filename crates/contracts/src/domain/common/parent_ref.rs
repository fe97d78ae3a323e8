use serde::{Deserialize, Serialize};

/// Reference to a parent record (Subcategory → Category, Gallery → Subcategory).
///
/// Populated endpoints embed the parent, others send only its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Embedded {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default)]
        name: String,
    },
    Id(String),
}

impl ParentRef {
    pub fn id(&self) -> &str {
        match self {
            ParentRef::Embedded { id, .. } => id,
            ParentRef::Id(id) => id,
        }
    }

    /// Name when the parent was embedded
    pub fn name(&self) -> Option<&str> {
        match self {
            ParentRef::Embedded { name, .. } if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_shapes() {
        let embedded: ParentRef =
            serde_json::from_str(r#"{"_id": "c1", "name": "Electronics"}"#).unwrap();
        assert_eq!(embedded.id(), "c1");
        assert_eq!(embedded.name(), Some("Electronics"));

        let plain: ParentRef = serde_json::from_str(r#""c2""#).unwrap();
        assert_eq!(plain.id(), "c2");
        assert_eq!(plain.name(), None);
    }
}
