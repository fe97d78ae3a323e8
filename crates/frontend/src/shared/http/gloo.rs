use super::transport::{
    ApiRequest, ApiResponse, HttpTransport, LocalFile, Method, Multipart, NetworkFailure, Part,
    RequestBody,
};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Browser transport (fetch via gloo-net)
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    type File = web_sys::File;

    async fn send(&self, request: ApiRequest<web_sys::File>) -> Result<ApiResponse, NetworkFailure> {
        let ApiRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        // Multipart bodies get their boundary from the browser; no Content-Type here
        let request = match body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            RequestBody::Multipart(form) => builder.body(to_form_data(&form)?),
            RequestBody::File { file, content_type } => {
                builder.header("Content-Type", &content_type).body(file)
            }
        }
        .map_err(|e| NetworkFailure(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| NetworkFailure(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

fn to_form_data(form: &Multipart<web_sys::File>) -> Result<FormData, NetworkFailure> {
    let data = FormData::new().map_err(js_failure)?;
    for part in form.parts() {
        match part {
            Part::Text { name, value } => data.append_with_str(name, value),
            Part::File { name, file } => {
                data.append_with_blob_and_filename(name, file, &file.file_name())
            }
        }
        .map_err(js_failure)?;
    }
    Ok(data)
}

fn js_failure(e: JsValue) -> NetworkFailure {
    NetworkFailure(format!("{:?}", e))
}

impl LocalFile for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }

    fn byte_size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        web_sys::Blob::type_(self)
    }
}
