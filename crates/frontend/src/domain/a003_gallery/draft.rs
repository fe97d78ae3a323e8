use crate::shared::form_session::{FormSession, MediaSet, PreviewFactory};
use crate::shared::http::{Multipart, Payload};
use contracts::domain::a003_gallery::aggregate::{fields, GalleryItem};
use contracts::shared::limits::GALLERY_IMAGES;
use std::rc::Rc;

pub struct GalleryDraft<P: PreviewFactory> {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub subcategory_id: String,
    pub images: MediaSet<P>,
}

impl<P: PreviewFactory> GalleryDraft<P> {
    /// `subcategory_id` preselects the list filter, if any
    pub fn new(factory: Rc<P>, subcategory_id: Option<String>) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            subcategory_id: subcategory_id.unwrap_or_default(),
            images: MediaSet::new(factory, GALLERY_IMAGES),
        }
    }

    pub fn edit(factory: Rc<P>, item: &GalleryItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
            subcategory_id: item.subcategory_id().unwrap_or_default().to_string(),
            images: MediaSet::new(factory, GALLERY_IMAGES).with_existing(item.media()),
        }
    }
}

impl<P: PreviewFactory> FormSession for GalleryDraft<P> {
    type File = P::File;

    fn editing_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn to_payload(&self) -> Payload<P::File> {
        let mut form = Multipart::new()
            .text(fields::TITLE, self.title.trim())
            .text(fields::DESCRIPTION, self.description.trim());
        if !self.subcategory_id.is_empty() {
            form.push_text(fields::SUBCATEGORY, self.subcategory_id.as_str());
        }
        if self.id.is_some() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use crate::domain::a003_gallery::GalleryResource;
    use crate::shared::form_session::{save, testing::CountingPreviews};
    use crate::shared::http::testing::{FakeTransport, TestFile};
    use crate::shared::http::{ApiClient, Method};
    use crate::shared::resource_store::{ListQuery, ResourceStore, RequestStatus};
    use futures::executor::block_on;
    use serde_json::json;

    fn store(transport: &FakeTransport) -> ResourceStore<GalleryResource, FakeTransport> {
        ResourceStore::with_url(ApiClient::new(transport.clone()), "http://api/api/gallery")
    }

    fn legacy_item() -> GalleryItem {
        serde_json::from_value(json!({
            "_id": "g1",
            "title": "Summer",
            "subcategory": "s1",
            "imageUrl": "https://cdn/old.jpg",
            "images": [{"url": "https://cdn/a.jpg"}, {"url": "https://cdn/b.jpg"}]
        }))
        .unwrap()
    }

    #[test]
    fn blank_title_is_rejected_locally() {
        let transport = FakeTransport::new();
        let mut draft = GalleryDraft::new(Rc::new(CountingPreviews::default()), None);
        draft.title = "  ".into();
        let err = block_on(save(&store(&transport), None, draft.to_payload())).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn new_item_inherits_the_list_filter() {
        let draft = GalleryDraft::new(Rc::new(CountingPreviews::default()), Some("s9".into()));
        let Payload::Multipart(form) = draft.to_payload() else {
            panic!("expected multipart");
        };
        assert_eq!(form.text_value(fields::SUBCATEGORY), Some("s9"));
        assert!(form.text_values(fields::EXISTING_TO_KEEP).is_empty());
    }

    #[test]
    fn edit_keeps_legacy_image_until_removed() {
        let factory = Rc::new(CountingPreviews::default());
        let mut draft = GalleryDraft::edit(factory.clone(), &legacy_item());
        assert_eq!(draft.images.len(), 3);
        assert_eq!(draft.subcategory_id, "s1");

        draft.images.remove(0);
        draft.images.select(vec![TestFile::new("c.jpg", 10)]);
        let Payload::Multipart(form) = draft.to_payload() else {
            panic!("expected multipart");
        };
        assert_eq!(
            form.text_values(fields::EXISTING_TO_KEEP),
            vec!["https://cdn/a.jpg", "https://cdn/b.jpg"]
        );
        assert_eq!(form.files(fields::IMAGES).len(), 1);
        assert_eq!(factory.live(), 1);
    }

    #[test]
    fn more_than_fifteen_images_are_capped() {
        let mut draft = GalleryDraft::new(Rc::new(CountingPreviews::default()), None);
        let files: Vec<_> = (0..18).map(|i| TestFile::new(&format!("{}.jpg", i), 10)).collect();
        draft.images.select(files);
        assert_eq!(draft.images.pending_files().len(), 15);
        assert_eq!(
            draft.images.notice().map(|n| n.to_string()).as_deref(),
            Some("You can upload up to 15 images per gallery item.")
        );
    }

    #[test]
    fn filtered_fetch_then_update_replaces_item() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!([legacy_item()]));
        transport.reply_json(200, json!({"_id": "g1", "title": "Summer 2024", "images": []}));
        let store = store(&transport);

        block_on(store.fetch(&ListQuery::all().with_filter("subcategory", "s1"))).unwrap();
        assert_eq!(transport.requests()[0].query_value("subcategory"), Some("s1"));

        let mut draft = GalleryDraft::edit(Rc::new(CountingPreviews::default()), &legacy_item());
        draft.title = "Summer 2024".into();
        block_on(save(&store, draft.editing_id(), draft.to_payload())).unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api/api/gallery/g1");
        let state = store.state().get_untracked();
        assert_eq!(state.items[0].title, "Summer 2024");
        assert_eq!(state.status(), RequestStatus::Succeeded);
    }
}
