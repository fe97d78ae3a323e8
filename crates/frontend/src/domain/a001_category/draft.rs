use crate::shared::form_session::{FormSession, MediaSet, PreviewFactory};
use crate::shared::http::{Multipart, Payload};
use contracts::domain::a001_category::aggregate::{fields, Category};
use contracts::shared::limits::CATEGORY_COVER;
use std::rc::Rc;

/// Category form draft
pub struct CategoryDraft<P: PreviewFactory> {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub cover: MediaSet<P>,
}

impl<P: PreviewFactory> CategoryDraft<P> {
    pub fn new(factory: Rc<P>) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            cover: MediaSet::single(factory, CATEGORY_COVER),
        }
    }

    pub fn edit(factory: Rc<P>, category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            cover: MediaSet::single(factory, CATEGORY_COVER).with_existing(category.cover().cloned()),
        }
    }
}

impl<P: PreviewFactory> FormSession for CategoryDraft<P> {
    type File = P::File;

    fn editing_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn to_payload(&self) -> Payload<P::File> {
        let mut form = Multipart::new()
            .text(fields::NAME, self.name.trim())
            .text(fields::DESCRIPTION, self.description.trim());
        if let Some(file) = self.cover.pending_files().into_iter().next() {
            form.push_file(fields::COVER_IMAGE, file);
        }
        Payload::Multipart(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use crate::domain::a001_category::CategoryResource;
    use crate::shared::form_session::{save, testing::CountingPreviews};
    use crate::shared::http::testing::{FakeTransport, TestFile};
    use crate::shared::http::ApiClient;
    use crate::shared::resource_store::{ListQuery, RequestStatus, ResourceStore};
    use futures::executor::block_on;
    use serde_json::json;

    fn store(transport: &FakeTransport) -> ResourceStore<CategoryResource, FakeTransport> {
        ResourceStore::with_url(ApiClient::new(transport.clone()), "http://api/api/categories")
    }

    #[test]
    fn adding_electronics_without_image() {
        let transport = FakeTransport::new();
        transport.reply_json(201, json!({"_id": "c1", "name": "Electronics", "description": ""}));
        let categories = store(&transport);

        let mut draft = CategoryDraft::new(Rc::new(CountingPreviews::default()));
        draft.name = "Electronics".into();
        let created = block_on(save(&categories, draft.editing_id(), draft.to_payload())).unwrap();

        assert_eq!(created.name, "Electronics");
        let state = categories.state().get_untracked();
        assert_eq!(state.status(), RequestStatus::Succeeded);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Electronics");
        assert!(state.items[0].cover().is_none());

        let sent = transport.last_request().unwrap();
        assert!(sent.form_values(fields::COVER_IMAGE).is_empty());
    }

    #[test]
    fn blank_name_is_rejected_locally() {
        let transport = FakeTransport::new();
        let categories = store(&transport);

        let mut draft = CategoryDraft::new(Rc::new(CountingPreviews::default()));
        draft.name = "   ".into();
        let err = block_on(save(&categories, None, draft.to_payload())).unwrap_err();

        assert_eq!(err.to_string(), "Category name is required");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn edit_sends_put_with_new_cover() {
        let transport = FakeTransport::new();
        transport.reply_json(
            200,
            json!({
                "data": [{"_id": "c1", "name": "Books", "coverImage": "https://cdn/old.png"}],
                "pagination": {"page": 1, "limit": 8, "totalItems": 1, "totalPages": 1}
            }),
        );
        transport.reply_json(200, json!({"_id": "c1", "name": "Books", "coverImage": "https://cdn/new.png"}));
        let categories = store(&transport);
        block_on(categories.fetch(&ListQuery::page(1, 8))).unwrap();

        let existing = categories.state().get_untracked().items[0].clone();
        let factory = Rc::new(CountingPreviews::default());
        let mut draft = CategoryDraft::edit(factory.clone(), &existing);
        assert_eq!(draft.cover.slots().len(), 1);
        draft.cover.select(vec![TestFile::new("new.png", 1024)]);

        block_on(save(&categories, draft.editing_id(), draft.to_payload())).unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api/api/categories/c1");
        assert_eq!(sent.form_values(fields::COVER_IMAGE), vec!["file:new.png"]);
        assert_eq!(
            categories.state().get_untracked().items[0].cover().map(|m| m.url.as_str()),
            Some("https://cdn/new.png")
        );

        drop(draft);
        assert_eq!(factory.live(), 0);
    }
}
