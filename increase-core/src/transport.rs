//! HTTP transport abstraction and the reqwest-backed implementation.

use core::fmt;

use async_trait::async_trait;
use increase_types::{IncreaseError, QueryPair, Resource, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read.
    Get,
    /// Create or act.
    Post,
    /// Partial update.
    Patch,
    /// Remove.
    Delete,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request path relative to the base URL, kept as unescaped segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath {
    segments: Vec<String>,
}

impl RequestPath {
    /// Path of a resource collection, e.g. `/accounts`.
    #[must_use]
    pub fn collection(resource: Resource) -> Self {
        Self {
            segments: resource.segments().iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Path of a single object, e.g. `/accounts/{account_id}`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `id` is empty.
    pub fn item(resource: Resource, id: &str) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(IncreaseError::invalid_arg(format!(
                "missing required {resource} id"
            )));
        }
        let mut path = Self::collection(resource);
        path.segments.push(id.to_string());
        Ok(path)
    }

    /// Append an action segment, e.g. `/accounts/{account_id}/close`.
    #[must_use]
    pub fn action(mut self, action: &str) -> Self {
        self.segments.push(action.to_string());
        self
    }

    /// Unescaped segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            write!(f, "/{s}")?;
        }
        Ok(())
    }
}

/// A fully described HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Scheme, host and optional path prefix.
    pub base_url: String,
    /// Path below `base_url`.
    pub path: RequestPath,
    /// Unescaped query pairs.
    pub query: Vec<QueryPair>,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Request with no query, headers, or body.
    #[must_use]
    pub const fn new(method: Method, path: RequestPath) -> Self {
        Self {
            method,
            base_url: String::new(),
            path,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set the query pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<QueryPair>) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// First header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a header, replacing any existing header of the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }

    /// Absolute URL with escaped path segments and query.
    ///
    /// # Errors
    /// Returns `Config` when `base_url` is not an absolute http(s) URL.
    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| IncreaseError::Config(format!("invalid base URL `{}`: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| {
                IncreaseError::Config(format!("base URL `{}` cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(self.path.segments());
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Header pairs with lower-case names.
    pub headers: Vec<(String, String)>,
    /// Body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with no headers.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body,
        }
    }

    /// Response carrying `value` as its JSON body.
    #[must_use]
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string().into_bytes())
            .with_header("content-type", "application/json")
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    /// First header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one HTTP request and returns the raw response.
///
/// Implementations perform exactly one attempt; retries, timeouts, and
/// decoding belong to the executor.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Send `req` once.
    ///
    /// Only failures to obtain a response are errors; any status code is `Ok`.
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with a default `reqwest::Client`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport reusing an existing `reqwest::Client` (connection pool, proxies, TLS).
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

const fn reqwest_method(m: Method) -> reqwest::Method {
    match m {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| IncreaseError::invalid_arg(format!("invalid header name {name:?}")))?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            IncreaseError::invalid_arg(format!("invalid value for header {name:?}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse> {
        let url = req.url()?;
        let headers = header_map(&req.headers)?;
        let mut builder = self
            .client
            .request(reqwest_method(req.method), url)
            .headers(headers);
        if let Some(body) = &req.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| IncreaseError::transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| IncreaseError::transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
