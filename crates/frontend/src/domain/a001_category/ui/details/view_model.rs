use crate::domain::a001_category::draft::CategoryDraft;
use crate::domain::a001_category::CategoryResource;
use crate::shared::form_session::{submit_draft, BrowserPreviews, FormSession, MediaSlot, SubmitState};
use crate::shared::http::GlooTransport;
use crate::shared::resource_store::ResourceStore;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Category details form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub draft: RwSignal<CategoryDraft<BrowserPreviews>, LocalStorage>,
    pub submit: RwSignal<SubmitState>,
}

impl CategoryDetailsViewModel {
    pub fn new(editing: Option<Category>) -> Self {
        let factory = Rc::new(BrowserPreviews);
        let draft = match &editing {
            Some(category) => CategoryDraft::edit(factory, category),
            None => CategoryDraft::new(factory),
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

    pub fn cover_notice(&self) -> Option<String> {
        self.draft.with(|d| d.cover.notice().map(ToString::to_string))
    }

    pub fn select_cover(&self, files: Vec<web_sys::File>) {
        self.draft.update(|d| d.cover.select(files));
    }

    pub fn remove_cover(&self, index: usize) {
        self.draft.update(|d| d.cover.remove(index));
    }

    /// Save form data to server
    pub fn save_command(
        &self,
        store: ResourceStore<CategoryResource, GlooTransport>,
        on_saved: Callback<()>,
    ) {
        let (id, payload) = self
            .draft
            .with_untracked(|d| (d.editing_id(), d.to_payload()));
        submit_draft(store, id, payload, self.submit, on_saved);
    }
}
