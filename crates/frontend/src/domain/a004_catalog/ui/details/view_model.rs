use crate::domain::a004_catalog::draft::{save_catalog, CatalogDraft, SAVE_FALLBACK};
use crate::domain::a004_catalog::CatalogResource;
use crate::shared::form_session::{BrowserPreviews, MediaSlot, SubmitState};
use crate::shared::http::GlooTransport;
use crate::shared::resource_store::ResourceStore;
use crate::shared::upload_session::UploadSession;
use chrono::Utc;
use contracts::domain::a004_catalog::aggregate::{CatalogFile, CatalogItem};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CatalogDetailsViewModel {
    pub draft: RwSignal<CatalogDraft<BrowserPreviews>, LocalStorage>,
    pub submit: RwSignal<SubmitState>,
}

impl CatalogDetailsViewModel {
    pub fn new(editing: Option<CatalogItem>) -> Self {
        let factory = Rc::new(BrowserPreviews);
        let draft = match &editing {
            Some(item) => CatalogDraft::edit(factory, item),
            None => CatalogDraft::new(factory),
        };
        Self {
            draft: RwSignal::new_local(draft),
            submit: RwSignal::new(SubmitState::default()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.with_untracked(|d| d.id.is_some())
    }

    pub fn cover_slots(&self) -> Vec<MediaSlot> {
        self.draft.with(|d| d.cover.slots())
    }

    pub fn file_slots(&self) -> Vec<MediaSlot> {
        self.draft.with(|d| d.files.slots())
    }

    pub fn stored_files(&self) -> Vec<CatalogFile> {
        self.draft.with(|d| d.stored_files.clone())
    }

    pub fn cover_notice(&self) -> Option<String> {
        self.draft.with(|d| d.cover.notice().map(ToString::to_string))
    }

    pub fn files_notice(&self) -> Option<String> {
        self.draft.with(|d| d.files.notice().map(ToString::to_string))
    }

    /// Uploads the files to storage, then writes the metadata
    pub fn save_command(
        &self,
        store: ResourceStore<CatalogResource, GlooTransport>,
        uploads: UploadSession<GlooTransport>,
        on_saved: Callback<()>,
    ) {
        let submission = self.draft.with_untracked(|d| d.submission());
        let submit = self.submit;
        submit.update(SubmitState::start);
        spawn_local(async move {
            match save_catalog(&store, &uploads, submission, Utc::now()).await {
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
}
