use crate::shared::form_session::{FormSession, MediaSet, PreviewFactory};
use crate::shared::http::{Multipart, Payload};
use contracts::domain::a002_subcategory::aggregate::{fields, Subcategory};
use contracts::shared::limits::SUBCATEGORY_IMAGES;
use std::rc::Rc;

pub struct SubcategoryDraft<P: PreviewFactory> {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub images: MediaSet<P>,
}

impl<P: PreviewFactory> SubcategoryDraft<P> {
    pub fn new(factory: Rc<P>) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category_id: String::new(),
            images: MediaSet::new(factory, SUBCATEGORY_IMAGES),
        }
    }

    pub fn edit(factory: Rc<P>, subcategory: &Subcategory) -> Self {
        Self {
            id: Some(subcategory.id.clone()),
            name: subcategory.name.clone(),
            description: subcategory.description.clone().unwrap_or_default(),
            category_id: subcategory.category_id().unwrap_or_default().to_string(),
            images: MediaSet::new(factory, SUBCATEGORY_IMAGES).with_existing(subcategory.media()),
        }
    }
}

impl<P: PreviewFactory> FormSession for SubcategoryDraft<P> {
    type File = P::File;

    fn editing_id(&self) -> Option<String> {
        self.id.clone()
    }

    /// On update the server drops every prior image not listed in
    /// `existingImagesToKeep`; `keepExistingImages` is "true" while none
    /// was removed.
    fn to_payload(&self) -> Payload<P::File> {
        let mut form = Multipart::new()
            .text(fields::NAME, self.name.trim())
            .text(fields::DESCRIPTION, self.description.trim());
        if !self.category_id.is_empty() {
            form.push_text(fields::CATEGORY, self.category_id.as_str());
        }
        if self.id.is_some() {
            let keep_all = !self.images.dropped_existing();
            form.push_text(fields::KEEP_EXISTING, keep_all.to_string());
            for media in self.images.retained() {
                form.push_text(fields::EXISTING_TO_KEEP, media.url.as_str());
            }
        }
        for file in self.images.pending_files() {
            form.push_file(fields::IMAGES, file);
        }
        Payload::Multipart(form)
    }
}
