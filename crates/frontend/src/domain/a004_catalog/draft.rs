use super::CatalogResource;
use crate::shared::form_session::{check_selection, MediaSet, PreviewFactory};
use crate::shared::http::{ApiError, HttpTransport, Payload};
use crate::shared::resource_store::ResourceStore;
use crate::shared::upload_session::{upload_prefix, UploadSession};
use chrono::{DateTime, Utc};
use contracts::domain::a004_catalog::aggregate::{
    self, CatalogFile, CatalogItem, CreateCatalogDto, UpdateCatalogDto,
};
use contracts::domain::common::MediaRef;
use contracts::shared::limits::{CATALOG_COVER, CATALOG_FILES};
use serde::Serialize;
use std::rc::Rc;

pub const SAVE_FALLBACK: &str = "Failed to save catalog";

pub struct CatalogDraft<P: PreviewFactory> {
    pub id: Option<String>,
    pub title: String,
    pub cover: MediaSet<P>,
    pub files: MediaSet<P>,
    /// Already stored files, listed read-only while editing
    pub stored_files: Vec<CatalogFile>,
}

/// Everything needed to save, detached from the dialog
pub struct CatalogSubmission<F> {
    pub id: Option<String>,
    pub title: String,
    pub cover: Option<F>,
    pub files: Vec<F>,
}

impl<P: PreviewFactory> CatalogDraft<P> {
    pub fn new(factory: Rc<P>) -> Self {
        Self {
            id: None,
            title: String::new(),
            cover: MediaSet::single(factory.clone(), CATALOG_COVER),
            files: MediaSet::new(factory, CATALOG_FILES),
            stored_files: Vec::new(),
        }
    }

    pub fn edit(factory: Rc<P>, item: &CatalogItem) -> Self {
        let cover = item.cover_image_url.clone().map(MediaRef::from_url);
        Self {
            id: Some(item.id.clone()),
            title: item.title.clone(),
            cover: MediaSet::single(factory.clone(), CATALOG_COVER).with_existing(cover),
            files: MediaSet::new(factory, CATALOG_FILES),
            stored_files: item.files.clone(),
        }
    }

    pub fn submission(&self) -> CatalogSubmission<P::File> {
        CatalogSubmission {
            id: self.id.clone(),
            title: self.title.clone(),
            cover: self.cover.pending_files().into_iter().next(),
            files: if self.id.is_some() {
                Vec::new()
            } else {
                self.files.pending_files()
            },
        }
    }
}

fn json_payload<F>(dto: &impl Serialize) -> Result<Payload<F>, ApiError> {
    serde_json::to_value(dto)
        .map(Payload::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create: cover and files are transferred first, then the metadata record
/// is written. Edit: title plus an optional replacement cover.
///
/// Nothing is sent when the title is blank or the selection breaks the limits.
pub async fn save_catalog<T: HttpTransport>(
    store: &ResourceStore<CatalogResource, T>,
    uploads: &UploadSession<T>,
    submission: CatalogSubmission<T::File>,
    now: DateTime<Utc>,
) -> Result<CatalogItem, ApiError> {
    let title = submission.title.trim().to_string();
    for required in aggregate::REQUIRED {
        required.check(Some(title.as_str()))?;
    }
    if let Some(cover) = &submission.cover {
        check_selection(std::slice::from_ref(cover), &CATALOG_COVER)?;
    }
    check_selection(&submission.files, &CATALOG_FILES)?;

    let prefix = upload_prefix(now);
    let cover_image_path = match submission.cover {
        Some(file) => Some(uploads.upload_cover(&prefix, file, &CATALOG_COVER).await?.path),
        None => None,
    };

    match submission.id {
        Some(id) => {
            let dto = UpdateCatalogDto {
                title,
                cover_image_path,
            };
            store.update(&id, json_payload(&dto)?).await
        }
        None => {
            let files = uploads
                .upload_all(&prefix, submission.files, &CATALOG_FILES)
                .await?;
            let dto = CreateCatalogDto {
                title,
                cover_image_path,
                files,
            };
            store.create(json_payload(&dto)?).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use crate::shared::config::parse_config;
    use crate::shared::form_session::testing::CountingPreviews;
    use crate::shared::http::testing::{FakeTransport, RecordedBody, TestFile};
    use crate::shared::http::{ApiClient, Method};
    use crate::shared::resource_store::ListQuery;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use serde_json::json;

    struct Harness {
        transport: FakeTransport,
        store: ResourceStore<CatalogResource, FakeTransport>,
        uploads: UploadSession<FakeTransport>,
    }

    fn harness() -> Harness {
        let config = parse_config(
            r#"
            [api]
            base_url = "http://api"
            [storage]
            base_url = "http://store"
            "#,
        )
        .unwrap();
        let transport = FakeTransport::new();
        let client = ApiClient::new(transport.clone());
        Harness {
            store: ResourceStore::new(client.clone(), &config),
            uploads: UploadSession::new(client, &config),
            transport,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    fn signed(transport: &FakeTransport, path: &str) {
        transport.reply_json(200, json!({"path": path, "token": "t"}));
        transport.reply_text(200, "");
    }

    #[test]
    fn create_uploads_then_writes_metadata_newest_first() {
        let h = harness();
        h.transport.reply_json(200, json!([{"_id": "old", "title": "Winter"}]));
        block_on(h.store.fetch(&ListQuery::all())).unwrap();

        signed(&h.transport, "catalogs/1700000000000/cover-c.png");
        signed(&h.transport, "catalogs/1700000000000/a.pdf");
        h.transport.reply_json(
            201,
            json!({"_id": "new", "title": "Spring", "files": [{"path": "catalogs/1700000000000/a.pdf", "size": 2048}], "totalSize": 2048}),
        );

        let mut draft = CatalogDraft::new(Rc::new(CountingPreviews::default()));
        draft.title = " Spring ".into();
        draft.cover.select(vec![TestFile::new("c.png", 10).with_mime("image/png")]);
        draft.files.select(vec![TestFile::new("a.pdf", 2048).with_mime("application/pdf")]);

        let item = block_on(save_catalog(&h.store, &h.uploads, draft.submission(), now())).unwrap();
        assert_eq!(item.total_size_kb(), 2);

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 6);
        assert_eq!(
            requests[1].body,
            RecordedBody::Json(json!({"path": "catalogs/1700000000000/cover-c.png"}))
        );
        let create = &requests[5];
        assert_eq!(create.method, Method::Post);
        assert_eq!(create.url, "http://api/api/catalog");
        assert_eq!(
            create.body,
            RecordedBody::Json(json!({
                "title": "Spring",
                "coverImagePath": "catalogs/1700000000000/cover-c.png",
                "files": [{"path": "catalogs/1700000000000/a.pdf", "size": 2048, "contentType": "application/pdf"}]
            }))
        );

        let ids: Vec<_> = h.store.state().get_untracked().items.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn blank_title_uploads_nothing() {
        let h = harness();
        let mut draft = CatalogDraft::new(Rc::new(CountingPreviews::default()));
        draft.files.select(vec![TestFile::new("a.pdf", 1)]);

        let err = block_on(save_catalog(&h.store, &h.uploads, draft.submission(), now())).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn failed_transfer_skips_metadata_write() {
        let h = harness();
        h.transport.reply_json(200, json!({"path": "catalogs/1700000000000/a.pdf", "token": "t"}));
        h.transport.reply_text(403, "denied");

        let mut draft = CatalogDraft::new(Rc::new(CountingPreviews::default()));
        draft.title = "Spring".into();
        draft.files.select(vec![TestFile::new("a.pdf", 1), TestFile::new("b.pdf", 1)]);

        let err = block_on(save_catalog(&h.store, &h.uploads, draft.submission(), now())).unwrap_err();
        assert_eq!(err.message_or(SAVE_FALLBACK), "Upload failed: catalogs/1700000000000/a.pdf");
        assert_eq!(h.transport.requests().len(), 2);
        assert!(h.store.state().get_untracked().items.is_empty());
    }

    #[test]
    fn seven_files_keep_the_first_five() {
        let mut draft = CatalogDraft::new(Rc::new(CountingPreviews::default()));
        let files: Vec<_> = (1..=7).map(|i| TestFile::new(&format!("{}.pdf", i), 1)).collect();
        draft.files.select(files);

        let names: Vec<_> = draft.submission().files.iter().map(|f| f.name.clone()).collect();
        assert_eq!(names, vec!["1.pdf", "2.pdf", "3.pdf", "4.pdf", "5.pdf"]);
        assert_eq!(
            draft.files.notice().map(|n| n.to_string()).as_deref(),
            Some("You can upload up to 5 files per catalog.")
        );
    }

    #[test]
    fn edit_sends_title_only_without_new_cover() {
        let h = harness();
        let existing: CatalogItem = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Winter",
            "coverImageUrl": "https://cdn/cover.png",
            "files": [{"path": "catalogs/1/a.pdf"}]
        }))
        .unwrap();
        h.transport.reply_json(200, json!([existing]));
        h.transport.reply_json(200, json!({"_id": "c1", "title": "Winter 2025"}));
        block_on(h.store.fetch(&ListQuery::all())).unwrap();

        let mut draft = CatalogDraft::edit(Rc::new(CountingPreviews::default()), &existing);
        assert_eq!(draft.cover.retained_count(), 1);
        assert_eq!(draft.stored_files.len(), 1);
        draft.title = "Winter 2025".into();

        block_on(save_catalog(&h.store, &h.uploads, draft.submission(), now())).unwrap();
        let sent = h.transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api/api/catalog/c1");
        assert_eq!(sent.body, RecordedBody::Json(json!({"title": "Winter 2025"})));
        assert_eq!(h.store.state().get_untracked().items[0].title, "Winter 2025");
    }

    #[test]
    fn edit_with_new_cover_uploads_it_first() {
        let h = harness();
        let existing: CatalogItem =
            serde_json::from_value(json!({"_id": "c1", "title": "Winter"})).unwrap();
        signed(&h.transport, "catalogs/1700000000000/cover-n.png");
        h.transport.reply_json(200, json!({"_id": "c1", "title": "Winter"}));

        let mut draft = CatalogDraft::edit(Rc::new(CountingPreviews::default()), &existing);
        draft.cover.select(vec![TestFile::new("n.png", 10)]);
        block_on(save_catalog(&h.store, &h.uploads, draft.submission(), now())).unwrap();

        assert_eq!(
            h.transport.last_request().unwrap().body,
            RecordedBody::Json(json!({"title": "Winter", "coverImagePath": "catalogs/1700000000000/cover-n.png"}))
        );
    }
}
