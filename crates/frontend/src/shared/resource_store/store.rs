use super::resource::{ListQuery, Resource};
use super::state::{CollectionState, RequestTicket};
use crate::shared::api_utils::join_url;
use crate::shared::config::Config;
use crate::shared::http::{ApiClient, ApiError, HttpTransport, Method, Payload};
use contracts::domain::common::{Entity, ListEnvelope, SingleEnvelope};
use leptos::prelude::*;
use std::marker::PhantomData;

/// Single source of truth for one entity collection.
///
/// Views read `state()`; only the success/failure handlers below write it.
/// Results arriving after the owning view is gone are dropped silently.
pub struct ResourceStore<R: Resource, T: HttpTransport> {
    state: RwSignal<CollectionState<R::Entity>>,
    client: ApiClient<T>,
    collection_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: HttpTransport> Clone for ResourceStore<R, T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            client: self.client.clone(),
            collection_url: self.collection_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T: HttpTransport> ResourceStore<R, T> {
    pub fn new(client: ApiClient<T>, config: &Config) -> Self {
        let collection_url = config.endpoint(R::KIND.config_key(), R::COLLECTION_PATH);
        Self::with_url(client, collection_url)
    }

    pub fn with_url(client: ApiClient<T>, collection_url: impl Into<String>) -> Self {
        Self {
            state: RwSignal::new(CollectionState::default()),
            client,
            collection_url: collection_url.into(),
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> RwSignal<CollectionState<R::Entity>> {
        self.state
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &str) -> String {
        join_url(&self.collection_url, &urlencoding::encode(id))
    }

    fn begin(&self) -> Option<RequestTicket> {
        self.state.try_update(CollectionState::begin)
    }

    fn settle(
        &self,
        ticket: Option<RequestTicket>,
        apply: impl FnOnce(&mut CollectionState<R::Entity>, RequestTicket) -> bool,
    ) {
        let Some(ticket) = ticket else { return };
        if self.state.try_update(|s| apply(s, ticket)).is_none() {
            log::debug!("{} store disposed, result #{} ignored", R::PLURAL, ticket.seq());
        }
    }

    fn fail(&self, ticket: Option<RequestTicket>, error: &ApiError, fallback: String) {
        let message = error.message_or(&fallback);
        log::warn!("{}: {}", fallback, error);
        self.settle(ticket, |s, t| s.apply_failure(t, message));
    }

    /// Replaces `items` with the server's list
    pub async fn fetch(&self, query: &ListQuery) -> Result<(), ApiError> {
        let ticket = self.begin();
        let result = self
            .client
            .get::<ListEnvelope<R::Entity>>(&self.collection_url, query.to_pairs(R::PAGINATED))
            .await;

        match result {
            Ok(envelope) => {
                let (items, pagination) = envelope.into_parts();
                log::debug!("fetched {} {}", items.len(), R::PLURAL);
                let pagination = if R::PAGINATED { pagination } else { None };
                self.settle(ticket, |s, t| s.apply_fetch(t, items, pagination));
                Ok(())
            }
            Err(e) => {
                self.fail(ticket, &e, format!("Failed to fetch {}", R::PLURAL));
                Err(e)
            }
        }
    }

    pub async fn create(&self, payload: Payload<T::File>) -> Result<R::Entity, ApiError> {
        R::validate(&payload)?;

        let ticket = self.begin();
        let result = self
            .client
            .send_payload::<SingleEnvelope<R::Entity>>(Method::Post, &self.collection_url, payload)
            .await;

        match result {
            Ok(envelope) => {
                let entity = envelope.into_inner();
                log::info!("{} created: {}", R::SINGULAR, entity.display_name());
                let stored = entity.clone();
                self.settle(ticket, |s, t| s.apply_created(t, stored, R::INSERT_AT));
                Ok(entity)
            }
            Err(e) => {
                self.fail(ticket, &e, format!("Failed to add {}", R::SINGULAR));
                Err(e)
            }
        }
    }

    pub async fn update(&self, id: &str, payload: Payload<T::File>) -> Result<R::Entity, ApiError> {
        R::validate(&payload)?;

        let ticket = self.begin();
        let result = self
            .client
            .send_payload::<SingleEnvelope<R::Entity>>(Method::Put, &self.item_url(id), payload)
            .await;

        match result {
            Ok(envelope) => {
                let entity = envelope.into_inner();
                log::info!("{} updated: {}", R::SINGULAR, entity.id());
                let stored = entity.clone();
                self.settle(ticket, |s, t| s.apply_updated(t, stored));
                Ok(entity)
            }
            Err(e) => {
                self.fail(ticket, &e, format!("Failed to update {}", R::SINGULAR));
                Err(e)
            }
        }
    }

    /// Confirmation is the caller's job
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let ticket = self.begin();
        match self.client.delete(&self.item_url(id)).await {
            Ok(()) => {
                log::info!("{} deleted: {}", R::SINGULAR, id);
                self.settle(ticket, |s, t| s.apply_deleted(t, id));
                Ok(())
            }
            Err(e) => {
                self.fail(ticket, &e, format!("Failed to delete {}", R::SINGULAR));
                Err(e)
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.try_update(|s| s.tracker.dismiss_error());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{FakeTransport, RecordedBody, TestFile};
    use crate::shared::http::Multipart;
    use crate::shared::resource_store::{InsertPosition, RequestStatus, ResourceKind};
    use contracts::shared::validation::RequiredField;
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Tag {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    impl Entity for Tag {
        fn id(&self) -> &str {
            &self.id
        }
        fn display_name(&self) -> &str {
            &self.name
        }
    }

    struct Tags;

    impl Resource for Tags {
        type Entity = Tag;
        const KIND: ResourceKind = ResourceKind::Categories;
        const COLLECTION_PATH: &'static str = "/api/tags";
        const SINGULAR: &'static str = "tag";
        const PLURAL: &'static str = "tags";
        const REQUIRED: &'static [RequiredField] = &[RequiredField::new("name", "Name is required")];
    }

    struct PagedTags;

    impl Resource for PagedTags {
        type Entity = Tag;
        const KIND: ResourceKind = ResourceKind::Categories;
        const COLLECTION_PATH: &'static str = "/api/tags";
        const SINGULAR: &'static str = "tag";
        const PLURAL: &'static str = "tags";
        const REQUIRED: &'static [RequiredField] = &[];
        const INSERT_AT: InsertPosition = InsertPosition::Prepend;
        const PAGINATED: bool = true;
    }

    fn store<R: Resource>(transport: &FakeTransport) -> ResourceStore<R, FakeTransport> {
        ResourceStore::with_url(ApiClient::new(transport.clone()), "http://api/api/tags")
    }

    fn named(name: &str) -> Payload<TestFile> {
        Payload::Multipart(Multipart::new().text("name", name))
    }

    #[test]
    fn create_appends_server_entity() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!([{"_id": "1", "name": "Sale"}]));
        transport.reply_json(201, json!({"_id": "2", "name": "New"}));
        let tags = store::<Tags>(&transport);

        block_on(tags.fetch(&ListQuery::all())).unwrap();
        let created = block_on(tags.create(named("New"))).unwrap();
        assert_eq!(created.name, "New");

        let state = tags.state().get_untracked();
        assert_eq!(state.status(), RequestStatus::Succeeded);
        assert_eq!(state.items.last().map(|t| t.id.as_str()), Some("2"));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body, RecordedBody::Multipart(vec![("name".into(), "New".into())]));
    }

    #[test]
    fn blank_required_field_never_reaches_network() {
        let transport = FakeTransport::new();
        let tags = store::<Tags>(&transport);

        let err = block_on(tags.create(named("  "))).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Name is required");
        assert!(transport.requests().is_empty());
        assert_eq!(tags.state().get_untracked().status(), RequestStatus::Idle);
    }

    #[test]
    fn failed_fetch_keeps_items_and_reports_message() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"data": [{"_id": "1", "name": "Sale"}]}));
        transport.reply_json(500, json!({"message": "Database unavailable"}));
        transport.fail_network("offline");
        let tags = store::<Tags>(&transport);

        block_on(tags.fetch(&ListQuery::all())).unwrap();
        assert!(block_on(tags.fetch(&ListQuery::all())).is_err());
        let state = tags.state().get_untracked();
        assert_eq!(state.status(), RequestStatus::Failed);
        assert_eq!(state.error(), Some("Database unavailable"));
        assert_eq!(state.items.len(), 1);

        assert!(block_on(tags.fetch(&ListQuery::all())).is_err());
        assert_eq!(
            tags.state().get_untracked().error(),
            Some("Failed to fetch tags")
        );

        tags.dismiss_error();
        assert_eq!(tags.state().get_untracked().error(), None);
    }

    #[test]
    fn paginated_fetch_sends_page_and_keeps_pagination() {
        let transport = FakeTransport::new();
        transport.reply_json(
            200,
            json!({
                "data": [{"_id": "9", "name": "Nine"}],
                "pagination": {"page": 2, "limit": 8, "totalItems": 9, "totalPages": 2}
            }),
        );
        let tags = store::<PagedTags>(&transport);

        block_on(tags.fetch(&ListQuery::page(2, 8))).unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_value("page"), Some("2"));
        assert_eq!(sent.query_value("limit"), Some("8"));

        let state = tags.state().get_untracked();
        let pagination = state.pagination.unwrap();
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next());
    }

    #[test]
    fn unpaginated_resource_ignores_page_arguments() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!([]));
        let tags = store::<Tags>(&transport);

        block_on(tags.fetch(&ListQuery::page(3, 8))).unwrap();
        assert!(transport.last_request().unwrap().query.is_empty());
    }

    #[test]
    fn update_and_delete_target_item_url() {
        let transport = FakeTransport::new();
        transport.reply_json(
            200,
            json!([{"_id": "a/1", "name": "A"}, {"_id": "b", "name": "B"}]),
        );
        transport.reply_json(200, json!({"data": {"_id": "b", "name": "B2"}}));
        transport.reply_json(200, json!({"message": "deleted"}));
        let tags = store::<Tags>(&transport);

        block_on(tags.fetch(&ListQuery::all())).unwrap();
        block_on(tags.update("b", named("B2"))).unwrap();
        assert_eq!(transport.last_request().unwrap().url, "http://api/api/tags/b");
        assert_eq!(transport.last_request().unwrap().method, Method::Put);

        block_on(tags.delete("a/1")).unwrap();
        assert_eq!(transport.last_request().unwrap().url, "http://api/api/tags/a%2F1");

        let state = tags.state().get_untracked();
        assert_eq!(
            state.items,
            vec![Tag {
                id: "b".into(),
                name: "B2".into()
            }]
        );
    }

    #[test]
    fn failed_delete_leaves_item() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!([{"_id": "1", "name": "A"}]));
        transport.reply_json(404, json!({}));
        let tags = store::<Tags>(&transport);

        block_on(tags.fetch(&ListQuery::all())).unwrap();
        assert!(block_on(tags.delete("1")).is_err());
        let state = tags.state().get_untracked();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.error(), Some("Failed to delete tag"));
    }

    #[test]
    fn prepend_resources_insert_at_front() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"data": [{"_id": "1", "name": "Old"}]}));
        transport.reply_json(201, json!({"_id": "2", "name": "New"}));
        let tags = store::<PagedTags>(&transport);

        block_on(tags.fetch(&ListQuery::all())).unwrap();
        block_on(tags.create(named("New"))).unwrap();
        let ids: Vec<_> = tags
            .state()
            .get_untracked()
            .items
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn results_after_owner_disposed_are_ignored() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!([{"_id": "1", "name": "Sale"}]));
        transport.reply_json(404, json!({}));
        let owner = Owner::new();
        let tags = owner.with(|| store::<Tags>(&transport));
        owner.cleanup();
        drop(owner);

        assert!(tags.state().try_get_untracked().is_none());
        assert!(block_on(tags.fetch(&ListQuery::all())).is_ok());
        assert!(block_on(tags.delete("1")).is_err());
        assert_eq!(transport.requests().len(), 2);
    }
}
