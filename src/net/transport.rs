//! Raw HTTP transport beneath the gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway builds a fully resolved [`HttpRequest`] and hands it to a
//! [`Transport`]. In the browser that is `gloo-net`; elsewhere the transport
//! reports [`TransportError::Unavailable`] the same way the rest of the client
//! stubs out browser-only calls. Tests substitute a scripted transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One part of a multipart form body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, filename: String, content_type: String, data: Vec<u8> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Form(Vec<FormPart>),
}

impl RequestBody {
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Form(_))
    }
}

/// A request with its final URL and merged headers.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues HTTP requests. Futures are `!Send` because browser fetch is.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the status plus raw body text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no HTTP status was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed transport for hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            send_with_gloo(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_gloo(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => {
            let text = serde_json::to_string(&value).map_err(|e| TransportError::Encode(e.to_string()))?;
            builder.body(text)
        }
        RequestBody::Form(parts) => builder.body(build_form_data(&parts)?),
    }
    .map_err(|e| TransportError::Encode(e.to_string()))?;

    let resp = built.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    response_from_parts(status, resp.text().await)
}

/// A response whose body could not be read is a network failure, not an
/// empty body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn response_from_parts<E: std::fmt::Display>(
    status: u16,
    body: Result<String, E>,
) -> Result<HttpResponse, TransportError> {
    let body = body.map_err(|e| TransportError::Network(format!("reading response body: {e}")))?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "hydrate")]
fn build_form_data(parts: &[FormPart]) -> Result<web_sys::FormData, TransportError> {
    let encode_err = |e: wasm_bindgen::JsValue| TransportError::Encode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(encode_err)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(encode_err)?,
            FormPart::File { name, filename, content_type, data } => {
                let bytes = js_sys::Uint8Array::from(data.as_slice());
                let chunks = js_sys::Array::of1(&bytes);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(content_type);
                let blob =
                    web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options).map_err(encode_err)?;
                form.append_with_blob_and_filename(name, &blob, filename).map_err(encode_err)?;
            }
        }
    }
    Ok(form)
}
