use crate::domain::a003_gallery::draft::GalleryDraft;
use crate::domain::a003_gallery::GalleryResource;
use crate::shared::form_session::{submit_draft, BrowserPreviews, FormSession, MediaSlot, SubmitState};
use crate::shared::http::GlooTransport;
use crate::shared::resource_store::ResourceStore;
use contracts::domain::a003_gallery::aggregate::GalleryItem;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct GalleryDetailsViewModel {
    pub draft: RwSignal<GalleryDraft<BrowserPreviews>, LocalStorage>,
    pub submit: RwSignal<SubmitState>,
}

impl GalleryDetailsViewModel {
    pub fn new(editing: Option<GalleryItem>, subcategory_filter: Option<String>) -> Self {
        let factory = Rc::new(BrowserPreviews);
        let draft = match &editing {
            Some(item) => GalleryDraft::edit(factory, item),
            None => GalleryDraft::new(factory, subcategory_filter),
        };
        Self {
            draft: RwSignal::new_local(draft),
            submit: RwSignal::new(SubmitState::default()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.with_untracked(|d| d.id.is_some())
    }

    pub fn image_slots(&self) -> Vec<MediaSlot> {
        self.draft.with(|d| d.images.slots())
    }

    pub fn image_notice(&self) -> Option<String> {
        self.draft.with(|d| d.images.notice().map(ToString::to_string))
    }

    pub fn select_images(&self, files: Vec<web_sys::File>) {
        self.draft.update(|d| d.images.select(files));
    }

    pub fn remove_image(&self, index: usize) {
        self.draft.update(|d| d.images.remove(index));
    }

    pub fn save_command(
        &self,
        store: ResourceStore<GalleryResource, GlooTransport>,
        on_saved: Callback<()>,
    ) {
        let (id, payload) = self
            .draft
            .with_untracked(|d| (d.editing_id(), d.to_payload()));
        submit_draft(store, id, payload, self.submit, on_saved);
    }
}
