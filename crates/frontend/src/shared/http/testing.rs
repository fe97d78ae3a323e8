//! In-memory transport for tests

use super::transport::{
    ApiRequest, ApiResponse, HttpTransport, LocalFile, Method, NetworkFailure, Part, RequestBody,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl TestFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
            mime: String::new(),
        }
    }

    pub fn with_mime(mut self, mime: &str) -> Self {
        self.mime = mime.to_string();
        self
    }
}

impl LocalFile for TestFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn byte_size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBody {
    Empty,
    Json(serde_json::Value),
    /// Text parts as values, file parts as `file:<name>`
    Multipart(Vec<(String, String)>),
    File { name: String, content_type: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RecordedBody,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn form_values(&self, name: &str) -> Vec<String> {
        match &self.body {
            RecordedBody::Multipart(parts) => parts
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, v)| v.clone())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Replays queued replies in order and records every request
#[derive(Clone, Default)]
pub struct FakeTransport {
    requests: Rc<RefCell<Vec<RecordedRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, NetworkFailure>>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn reply_text(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail_network(&self, reason: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(NetworkFailure(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpTransport for FakeTransport {
    type File = TestFile;

    async fn send(&self, request: ApiRequest<TestFile>) -> Result<ApiResponse, NetworkFailure> {
        let body = match request.body {
            RequestBody::Empty => RecordedBody::Empty,
            RequestBody::Json(json) => {
                RecordedBody::Json(serde_json::from_str(&json).unwrap_or(serde_json::Value::Null))
            }
            RequestBody::Multipart(form) => RecordedBody::Multipart(
                form.parts()
                    .iter()
                    .map(|part| match part {
                        Part::Text { name, value } => (name.clone(), value.clone()),
                        Part::File { name, file } => (name.clone(), format!("file:{}", file.name)),
                    })
                    .collect(),
            ),
            RequestBody::File { file, content_type } => RecordedBody::File {
                name: file.name,
                content_type,
            },
        };
        self.requests.borrow_mut().push(RecordedRequest {
            method: request.method,
            url: request.url,
            query: request.query,
            headers: request.headers,
            body,
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkFailure("no reply queued".to_string())))
    }
}
