use thiserror::Error;

/// Content type used when the browser could not tell what a file is
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A file picked by the user that has not been uploaded yet
pub trait LocalFile: Clone + 'static {
    fn file_name(&self) -> String;

    fn byte_size(&self) -> u64;

    /// Declared MIME type, empty when unknown
    fn mime_type(&self) -> String;

    fn content_type(&self) -> String {
        let mime = self.mime_type();
        if mime.trim().is_empty() {
            DEFAULT_CONTENT_TYPE.to_string()
        } else {
            mime
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

/// Ordered multipart form, converted to `FormData` by the browser transport
#[derive(Debug, Clone, PartialEq)]
pub struct Multipart<F> {
    parts: Vec<Part<F>>,
}

impl<F> Default for Multipart<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F> Multipart<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn push_text(&mut self, name: &str, value: impl Into<String>) {
        self.parts.push(Part::Text {
            name: name.to_string(),
            value: value.into(),
        });
    }

    pub fn push_file(&mut self, name: &str, file: F) {
        self.parts.push(Part::File {
            name: name.to_string(),
            file,
        });
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    /// First text value of a field
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn files(&self, name: &str) -> Vec<&F> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::File { name: n, file } if n == name => Some(file),
                _ => None,
            })
            .collect()
    }
}

/// Body of a create/update write
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<F> {
    Multipart(Multipart<F>),
    Json(serde_json::Value),
}

impl<F> Payload<F> {
    /// Text value of a top-level field, whatever the encoding
    pub fn text(&self, field: &str) -> Option<String> {
        match self {
            Payload::Multipart(form) => form.text_value(field).map(str::to_string),
            Payload::Json(value) => value.get(field).and_then(|v| v.as_str()).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Empty,
    Json(String),
    Multipart(Multipart<F>),
    /// Raw bytes of a local file with its declared content type
    File { file: F, content_type: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<F> {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody<F>,
}

impl<F> ApiRequest<F> {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn body(mut self, body: RequestBody<F>) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("network error: {0}")]
pub struct NetworkFailure(pub String);

/// Sends one request. Implementations do not interpret status codes.
#[allow(async_fn_in_trait)]
pub trait HttpTransport: Clone + 'static {
    type File: LocalFile;

    async fn send(&self, request: ApiRequest<Self::File>) -> Result<ApiResponse, NetworkFailure>;
}
