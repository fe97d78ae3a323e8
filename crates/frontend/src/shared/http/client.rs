use super::error::ApiError;
use super::transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, Payload, RequestBody,
};
use contracts::shared::error_payload::ErrorPayload;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outbound request adapter shared by every store.
///
/// Attaches `Accept` and the bearer token, encodes bodies, and turns non-2xx
/// responses into `ApiError::Transport` carrying the server's `{message}` or
/// `{error}`.
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    token: Option<RwSignal<Option<String>>>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    /// Reads the bearer token from `token` on every request
    pub fn with_token(mut self, token: RwSignal<Option<String>>) -> Self {
        self.token = Some(token);
        self
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest::new(Method::Get, url).query(query);
        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Sends a create/update payload, multipart or JSON
    pub async fn send_payload<R: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        payload: Payload<T::File>,
    ) -> Result<R, ApiError> {
        let body = match payload {
            Payload::Multipart(form) => RequestBody::Multipart(form),
            Payload::Json(value) => RequestBody::Json(value.to_string()),
        };
        let response = self
            .execute(ApiRequest::new(method, url).body(body))
            .await?;
        decode(&response)
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .execute(ApiRequest::new(Method::Post, url).body(RequestBody::Json(json)))
            .await?;
        decode(&response)
    }

    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::Delete, url)).await?;
        Ok(())
    }

    /// Direct storage transfer. No auth header: the signed URL carries its own
    /// token. Status codes are left to the caller.
    pub async fn put_file(
        &self,
        url: &str,
        file: T::File,
        content_type: String,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::Put, url)
            .body(RequestBody::File { file, content_type });
        self.transport
            .send(request)
            .await
            .map_err(|e| {
                log::warn!("PUT {} failed: {}", url, e);
                ApiError::Transport {
                    status: None,
                    message: None,
                }
            })
    }

    async fn execute(&self, request: ApiRequest<T::File>) -> Result<ApiResponse, ApiError> {
        let mut request = request.header("Accept", "application/json");
        if let Some(token) = self.token.and_then(|t| t.try_get_untracked().flatten()) {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let method = request.method;
        let url = request.url.clone();
        log::debug!("{} {}", method.as_str(), url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), url, e);
            ApiError::Transport {
                status: None,
                message: None,
            }
        })?;

        if !response.is_success() {
            log::warn!("{} {} -> HTTP {}", method.as_str(), url, response.status);
            return Err(ApiError::Transport {
                status: Some(response.status),
                message: ErrorPayload::message_from_body(&response.body),
            });
        }
        Ok(response)
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
