//! Browser transport backed by `gloo-net`.
//!
//! Client-side (csr): real HTTP calls through `fetch`.
//! Native builds: every call fails with a transport error, since the
//! endpoints are only reachable from the served page.

use super::api::{ApiError, Header, HttpReply, RequestBody, Transport};
#[cfg(feature = "csr")]
use crate::util::upload::{FileUpload, UPLOAD_FIELD};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_reply(resp).await
    }

    async fn post(&self, url: &str, headers: &[Header], body: RequestBody<'_>) -> Result<HttpReply, ApiError> {
        let mut builder = gloo_net::http::Request::post(url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let sent = match body {
            RequestBody::Empty => builder.send().await,
            RequestBody::Json(value) => builder.json(&value).map_err(transport_error)?.send().await,
            RequestBody::File(upload) => builder.body(form_data(upload)?).map_err(transport_error)?.send().await,
        };
        read_reply(sent.map_err(transport_error)?).await
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(not(feature = "csr"))]
impl Transport for BrowserTransport {
    async fn get(&self, _url: &str) -> Result<HttpReply, ApiError> {
        Err(unavailable())
    }

    async fn post(&self, _url: &str, _headers: &[Header], _body: RequestBody<'_>) -> Result<HttpReply, ApiError> {
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

#[cfg(feature = "csr")]
async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(HttpReply { status, body })
}

#[cfg(feature = "csr")]
fn form_data(upload: &FileUpload) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &upload.content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &upload.file_name)
        .map_err(js_error)?;
    Ok(form)
}

/// Read a file picked in an `<input type="file">` into memory.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the browser fails to read the file.
#[cfg(feature = "csr")]
pub async fn read_file(file: web_sys::File) -> Result<FileUpload, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(FileUpload { file_name: file.name(), content_type, bytes })
}
