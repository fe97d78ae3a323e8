//! Direct-to-storage uploads
//!
//! 1. `POST {catalog}/api/catalog/sign-upload {path}` -> `{path, token}`
//! 2. `PUT` the raw bytes to the signed storage URL
//! 3. the caller writes the metadata record once every transfer succeeded
//!
//! A failed transfer is not resumed; the file starts again from step 1.

use crate::shared::config::Config;
use crate::shared::form_session::check_selection;
use crate::shared::http::{ApiClient, ApiError, HttpTransport, LocalFile};
use chrono::{DateTime, Utc};
use contracts::domain::a004_catalog::aggregate::CatalogFileMeta;
use contracts::domain::a004_catalog::upload::{SignUploadRequest, SignedUpload};
use contracts::shared::limits::FileLimits;

pub const SIGN_UPLOAD_PATH: &str = "/api/catalog/sign-upload";

/// Storage folder for one catalog, unique per submission
pub fn upload_prefix(now: DateTime<Utc>) -> String {
    format!("catalogs/{}", now.timestamp_millis())
}

pub fn file_path(prefix: &str, file_name: &str) -> String {
    format!("{}/{}", prefix, file_name)
}

pub fn cover_path(prefix: &str, file_name: &str) -> String {
    format!("{}/cover-{}", prefix, file_name)
}

#[derive(Clone)]
pub struct UploadSession<T: HttpTransport> {
    client: ApiClient<T>,
    sign_url: String,
    config: Config,
}

impl<T: HttpTransport> UploadSession<T> {
    pub fn new(client: ApiClient<T>, config: &Config) -> Self {
        Self {
            client,
            sign_url: config.endpoint("catalog", SIGN_UPLOAD_PATH),
            config: config.clone(),
        }
    }

    /// Requests a signed destination for `path`
    pub async fn sign(&self, path: &str) -> Result<SignedUpload, ApiError> {
        let request = SignUploadRequest {
            path: path.to_string(),
        };
        self.client
            .post_json::<_, SignedUpload>(&self.sign_url, &request)
            .await
            .map_err(|e| {
                log::warn!("sign-upload for {} failed: {}", path, e);
                match e {
                    ApiError::Transport { message, .. } => ApiError::Signing { message },
                    _ => ApiError::Signing { message: None },
                }
            })
    }

    /// PUTs the file bytes with their declared content type
    pub async fn transfer(&self, signed: &SignedUpload, file: T::File) -> Result<(), ApiError> {
        let url = self.config.signed_upload_url(signed);
        let content_type = file.content_type();
        match self.client.put_file(&url, file, content_type).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                log::warn!("upload of {} -> HTTP {}", signed.path, response.status);
                Err(ApiError::Transfer {
                    path: signed.path.clone(),
                    status: Some(response.status),
                })
            }
            Err(_) => Err(ApiError::Transfer {
                path: signed.path.clone(),
                status: None,
            }),
        }
    }

    /// Sign + transfer; returns the metadata for the catalog record
    pub async fn upload(&self, path: &str, file: T::File) -> Result<CatalogFileMeta, ApiError> {
        let size = file.byte_size();
        let content_type = file.content_type();
        let signed = self.sign(path).await?;
        self.transfer(&signed, file).await?;
        log::info!("uploaded {} ({} bytes)", signed.path, size);
        Ok(CatalogFileMeta {
            path: signed.path,
            size,
            content_type,
        })
    }

    /// Uploads every file under `prefix`, one after another.
    /// The batch is checked against `limits` before anything is sent.
    pub async fn upload_all(
        &self,
        prefix: &str,
        files: Vec<T::File>,
        limits: &FileLimits,
    ) -> Result<Vec<CatalogFileMeta>, ApiError> {
        check_selection(&files, limits)?;
        let mut uploaded = Vec::with_capacity(files.len());
        for file in files {
            let path = file_path(prefix, &file.file_name());
            uploaded.push(self.upload(&path, file).await?);
        }
        Ok(uploaded)
    }

    pub async fn upload_cover(
        &self,
        prefix: &str,
        file: T::File,
        limits: &FileLimits,
    ) -> Result<CatalogFileMeta, ApiError> {
        check_selection(std::slice::from_ref(&file), limits)?;
        let path = cover_path(prefix, &file.file_name());
        self.upload(&path, file).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use crate::shared::http::testing::{FakeTransport, RecordedBody, TestFile};
    use crate::shared::http::Method;
    use chrono::TimeZone;
    use contracts::shared::limits::{CATALOG_COVER, CATALOG_FILES};
    use futures::executor::block_on;
    use serde_json::json;

    fn session(transport: &FakeTransport) -> UploadSession<FakeTransport> {
        let config = parse_config(
            r#"
            [api]
            base_url = "http://api"
            [storage]
            base_url = "http://store"
            bucket = "catalog"
            "#,
        )
        .unwrap();
        UploadSession::new(ApiClient::new(transport.clone()), &config)
    }

    #[test]
    fn prefix_uses_millis() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(upload_prefix(now), "catalogs/1710460800000");
        assert_eq!(cover_path("catalogs/1", "c.png"), "catalogs/1/cover-c.png");
    }

    #[test]
    fn upload_signs_then_puts_with_content_type() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"path": "catalogs/1/a.pdf", "token": "tok"}));
        transport.reply_text(200, "");
        let uploads = session(&transport);

        let meta = block_on(uploads.upload(
            "catalogs/1/a.pdf",
            TestFile::new("a.pdf", 42).with_mime("application/pdf"),
        ))
        .unwrap();
        assert_eq!(meta.size, 42);
        assert_eq!(meta.content_type, "application/pdf");

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api/api/catalog/sign-upload");
        assert_eq!(requests[0].body, RecordedBody::Json(json!({"path": "catalogs/1/a.pdf"})));
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(
            requests[1].url,
            "http://store/storage/v1/object/upload/sign/catalog/catalogs/1/a.pdf?token=tok"
        );
        assert_eq!(requests[1].header("Authorization"), None);
    }

    #[test]
    fn missing_mime_defaults_to_octet_stream() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"path": "p/x", "token": "t"}));
        transport.reply_text(200, "");
        let uploads = session(&transport);

        block_on(uploads.upload("p/x", TestFile::new("x", 1))).unwrap();
        assert_eq!(
            transport.last_request().unwrap().body,
            RecordedBody::File {
                name: "x".into(),
                content_type: "application/octet-stream".into()
            }
        );
    }

    #[test]
    fn rejected_signing_is_signing_error() {
        let transport = FakeTransport::new();
        transport.reply_json(403, json!({"error": "Unauthorized"}));
        let uploads = session(&transport);

        let err = block_on(uploads.sign("catalogs/1/a.pdf")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Signing {
                message: Some("Unauthorized".into())
            }
        );
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn non_success_put_is_transfer_error() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"path": "catalogs/1/a.pdf", "token": "t"}));
        transport.reply_text(400, "bad");
        let uploads = session(&transport);

        let err = block_on(uploads.upload("catalogs/1/a.pdf", TestFile::new("a.pdf", 1))).unwrap_err();
        assert_eq!(
            err,
            ApiError::Transfer {
                path: "catalogs/1/a.pdf".into(),
                status: Some(400)
            }
        );
    }

    #[test]
    fn oversized_batch_is_rejected_before_network() {
        let transport = FakeTransport::new();
        let uploads = session(&transport);
        let files: Vec<_> = (0..6).map(|i| TestFile::new(&format!("{}.pdf", i), 1)).collect();

        let err = block_on(uploads.upload_all("catalogs/1", files, &CATALOG_FILES)).unwrap_err();
        assert!(err.is_validation());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn upload_all_stops_at_first_failure() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"path": "catalogs/1/a.pdf", "token": "t"}));
        transport.reply_text(200, "");
        transport.reply_json(500, json!({}));
        let uploads = session(&transport);
        let files = vec![TestFile::new("a.pdf", 1), TestFile::new("b.pdf", 1), TestFile::new("c.pdf", 1)];

        let err = block_on(uploads.upload_all("catalogs/1", files, &CATALOG_FILES)).unwrap_err();
        assert_eq!(err.message_or("x"), "Failed to sign upload");
        assert_eq!(transport.requests().len(), 3);
    }

    #[test]
    fn cover_goes_under_cover_prefix() {
        let transport = FakeTransport::new();
        transport.reply_json(200, json!({"path": "catalogs/1/cover-c.png", "token": "t"}));
        transport.reply_text(200, "");
        let uploads = session(&transport);

        let meta =
            block_on(uploads.upload_cover("catalogs/1", TestFile::new("c.png", 1), &CATALOG_COVER)).unwrap();
        assert_eq!(meta.path, "catalogs/1/cover-c.png");
        assert_eq!(
            transport.requests()[0].body,
            RecordedBody::Json(json!({"path": "catalogs/1/cover-c.png"}))
        );
    }
}
