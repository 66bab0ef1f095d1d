//! HTTP request/response values and the blocking transport.
//!
//! # Design
//! Requests are described as plain data first: `DictionaryClient::build_*`
//! methods produce `HttpRequest` values without touching the network, which
//! keeps URL and query construction deterministic and easy to test. `execute`
//! then performs the single blocking GET for a request. Query pairs are
//! stored unencoded and percent-encoded only when the final URL is rendered.

use std::fmt;

use crate::error::ApiError;

/// An HTTP GET request described as plain data.
///
/// `url` is the absolute URL without a query string. `query` holds logical
/// key/value pairs, each logical parameter supplied at most once; values stay
/// unencoded until [`HttpRequest::full_url`] renders them.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(url: String) -> Self {
        Self {
            url,
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Append one query parameter. The value is captured via `Display`, so
    /// enums such as [`Format`](crate::types::Format) render their lowercase
    /// wire form.
    pub fn query(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Render the full URL with every query key and value percent-encoded.
    /// A request without parameters renders no `?`.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let params: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.url, params.join("&"))
    }
}

/// An HTTP response reduced to the parts the client consumes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Execute a request with one blocking GET and read the full body as text.
///
/// Status-code-as-error handling is disabled so 4xx/5xx responses come back
/// as data; the service reports failures inside the JSON body and the parsing
/// layer decides. Each call builds its own agent and owns its own connection.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let url = request.full_url();
    log::debug!("GET {url}");

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(&url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call().map_err(ApiError::Transport)?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(ApiError::Transport)?;
    log::debug!("{status} ({} bytes) from {url}", body.len());

    Ok(HttpResponse { status, body })
}
