use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Any record managed by the admin panel.
///
/// Identifiers are opaque server strings, unique within one collection.
pub trait Entity: Clone + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Server identifier (`_id` on the wire)
    fn id(&self) -> &str;

    /// Human readable label used in confirmations and logs
    fn display_name(&self) -> &str;
}
