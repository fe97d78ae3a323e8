//! Form/Preview Session
//!
//! Transient state of an open create/edit dialog. Local previews are owned
//! here and released when the session (or the file) is dropped.

mod media;
mod preview;
mod selection;

pub use media::{MediaSet, MediaSlot};
pub use preview::{BrowserPreviews, PreviewFactory, PreviewHandle};
pub use selection::{check_selection, screen_selection, Screened};

#[cfg(test)]
pub use preview::testing;

use crate::shared::http::{ApiError, HttpTransport, Payload};
use crate::shared::resource_store::{Resource, ResourceStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shown when a failed save carries no message of its own
pub const SAVE_FALLBACK: &str = "An error occurred while saving";

/// Draft of one entity dialog
pub trait FormSession {
    type File;

    /// `Some(id)` when editing an existing entity
    fn editing_id(&self) -> Option<String>;

    /// Multipart (or JSON) body merging fields, new files and retained media
    fn to_payload(&self) -> Payload<Self::File>;
}

/// Update when editing, create otherwise
pub async fn save<R, T>(
    store: &ResourceStore<R, T>,
    editing_id: Option<String>,
    payload: Payload<T::File>,
) -> Result<R::Entity, ApiError>
where
    R: Resource,
    T: HttpTransport,
{
    match editing_id {
        Some(id) => store.update(&id, payload).await,
        None => store.create(payload).await,
    }
}

/// Saving flag and message shown under the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitState {
    pub saving: bool,
    pub error: Option<String>,
}

impl SubmitState {
    pub fn start(&mut self) {
        self.saving = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        self.saving = false;
        self.error = result.err();
    }
}

/// Saves in the background; the form is re-enabled on failure and
/// `on_saved` runs on success. A dialog closed meanwhile is left alone.
pub fn submit_draft<R, T>(
    store: ResourceStore<R, T>,
    editing_id: Option<String>,
    payload: Payload<T::File>,
    submit: RwSignal<SubmitState>,
    on_saved: Callback<()>,
) where
    R: Resource,
    T: HttpTransport,
{
    submit.update(SubmitState::start);
    spawn_local(async move {
        match save(&store, editing_id, payload).await {
            Ok(_) => {
                submit.try_update(|s| s.finish(Ok(())));
                on_saved.run(());
            }
            Err(e) => {
                submit.try_update(|s| s.finish(Err(e.message_or(SAVE_FALLBACK))));
            }
        }
    });
}
