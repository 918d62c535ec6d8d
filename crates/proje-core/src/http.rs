//! HTTP Client
//!
//! Thin JSON wrapper over a pluggable transport. One attempt per call,
//! no retries and no timeouts; the caller decides what a failure means.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

// ========================
// Transport Seam
// ========================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
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
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves bytes. `Err` means no response was received at all.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Production transport. reqwest maps to `fetch` on wasm32.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
}

// ========================
// Request Options
// ========================

/// Method, body and extra headers for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let text = serde_json::to_string(body)
            .map_err(|e| ApiError::MalformedBody(format!("Request body could not be encoded: {}", e)))?;
        self.body = Some(text);
        Ok(self)
    }

    /// Add or override a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

// ========================
// API Client
// ========================

/// JSON client bound to one backend base URL
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue one call against `{base_url}{endpoint}` and decode the JSON reply.
    ///
    /// `Content-Type: application/json` is always sent unless the caller
    /// overrides it. Failures are logged before being returned.
    pub async fn request<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<R> {
        let method = options.method;
        let result = self.dispatch(endpoint, options).await;
        if let Err(err) = &result {
            log::error!("API request error: {} {} failed: {}", method.as_str(), endpoint, err);
        }
        result
    }

    async fn dispatch<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<R> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in options.headers {
            match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
                Some(slot) => slot.1 = value,
                None => headers.push((name, value)),
            }
        }

        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: options.body,
        };

        let response = self.transport.send(request).await.map_err(ApiError::Transport)?;
        if !response.is_success() {
            return Err(backend_error(&response));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::MalformedBody(format!("Invalid response body: {}", e)))
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<R> {
        self.request(endpoint, RequestOptions::new(Method::Get)).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, endpoint: &str, body: &B) -> ApiResult<R> {
        self.request(endpoint, RequestOptions::new(Method::Post).json(body)?).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, endpoint: &str, body: &B) -> ApiResult<R> {
        self.request(endpoint, RequestOptions::new(Method::Put).json(body)?).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<R> {
        self.request(endpoint, RequestOptions::new(Method::Delete)).await
    }
}

/// Prefer the server's `error` field; fall back to the status line when the
/// body is missing, not JSON, or has no message.
fn backend_error(response: &HttpResponse) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", response.status));

    ApiError::Backend {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replies with a canned result and remembers what it was sent
    struct CannedTransport {
        reply: Result<HttpResponse, String>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(reply: Result<HttpResponse, String>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for CannedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
            self.seen.borrow_mut().push(request);
            self.reply.clone()
        }
    }

    fn client(reply: Result<HttpResponse, String>) -> ApiClient<CannedTransport> {
        ApiClient::new(CannedTransport::new(reply), &ClientConfig::default())
    }

    #[tokio::test]
    async fn test_success_parses_json_body() {
        let api = client(Ok(HttpResponse::new(200, r#"{"message":"ok"}"#)));
        let value: serde_json::Value = api.get("/health").await.unwrap();
        assert_eq!(value["message"], "ok");

        let seen = api.transport().seen.borrow();
        assert_eq!(seen[0].url, "http://localhost:5000/api/health");
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].body, None);
    }

    #[tokio::test]
    async fn test_json_content_type_is_attached_by_default() {
        let api = client(Ok(HttpResponse::new(201, "{}")));
        let _: serde_json::Value = api.post("/projeler", &serde_json::json!({"ProjeAdi": "X"})).await.unwrap();

        let seen = api.transport().seen.borrow();
        assert!(seen[0]
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
        assert_eq!(seen[0].body.as_deref(), Some(r#"{"ProjeAdi":"X"}"#));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let api = client(Ok(HttpResponse::new(200, "{}")));
        let options = RequestOptions::new(Method::Get)
            .header("content-type", "text/plain")
            .header("X-Trace", "1");
        let _: serde_json::Value = api.request("/x", options).await.unwrap();

        let seen = api.transport().seen.borrow();
        assert_eq!(seen[0].headers.len(), 2);
        assert_eq!(seen[0].headers[0].1, "text/plain");
    }

    #[tokio::test]
    async fn test_backend_error_uses_server_message() {
        let api = client(Ok(HttpResponse::new(400, r#"{"error":"Bu proje kullanımda"}"#)));
        let err = api.delete::<serde_json::Value>("/projeler/1").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                message: "Bu proje kullanımda".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_backend_error_without_message_uses_status() {
        let api = client(Ok(HttpResponse::new(502, "<html>Bad Gateway</html>")));
        let err = api.get::<serde_json::Value>("/projeler").await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let api = client(Err("Failed to fetch".to_string()));
        let err = api.get::<serde_json::Value>("/projeler").await.unwrap_err();
        assert_eq!(err, ApiError::Transport("Failed to fetch".to_string()));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let api = client(Ok(HttpResponse::new(200, "not json")));
        let err = api.get::<Vec<serde_json::Value>>("/projeler").await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }
}
