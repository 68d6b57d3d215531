//! API client and endpoint caller.
//!
//! [`Client`] owns the HTTP transport, the configuration and the credentials.
//! Resource services such as [`RegistrarService`] borrow it and turn their
//! arguments into a versioned path plus an optional JSON body.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::registrar::RegistrarService;
use crate::response::{Envelope, Response};

pub const DEFAULT_BASE_URL: &str = "https://api.dnsimple.com";
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com";

const API_VERSION: &str = "v2";
const MEDIA_TYPE_JSON: &str = "application/json";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the API, without the version segment.
    pub base_url: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("dnsimple-rust/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the sandbox environment.
    pub fn sandbox() -> Self {
        Self {
            base_url: SANDBOX_BASE_URL.to_string(),
            ..Self::default()
        }
    }
}

/// DNSimple API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    credentials: Arc<dyn Credentials>,
}

impl Client {
    /// Creates a client against the production API.
    pub fn new(credentials: impl Credentials + 'static) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    pub fn with_config(credentials: impl Credentials + 'static, config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Self::with_http_client(http, credentials, config)
    }

    /// Creates a client that sends its requests through `http`.
    ///
    /// `config.timeout` is ignored here; configure it on `http` instead.
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: impl Credentials + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| Error::Url(format!("{}: {}", config.base_url, e)))?;
        Ok(Self {
            http,
            config,
            credentials: Arc::new(credentials),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Registrar endpoints.
    pub fn registrar(&self) -> RegistrarService<'_> {
        RegistrarService::new(self)
    }

    /// Sends a GET to `path` (already versioned) and decodes the envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.call(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, Some(encode(body)?)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::PUT, path, Some(encode(body)?)).await
    }

    /// Sends a DELETE to `path`. The response body, if any, is not decoded.
    pub async fn delete(&self, path: &str) -> Result<Response<()>> {
        let response = self.send(Method::DELETE, path, None).await?;
        let status = response.status();
        let headers = response.headers().clone();
        Ok(Response::new((), None, status, headers))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Response<T>> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
        Ok(Response::new(envelope.data, envelope.pagination, status, headers))
    }

    /// Performs the round trip and turns non-2xx statuses into [`Error::Api`].
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        let (auth_name, auth_value) = self.credentials.header_field();

        tracing::debug!(method = %method, path, "Sending API request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(auth_name, auth_value)
            .header(ACCEPT, MEDIA_TYPE_JSON)
            .header(USER_AGENT, &self.config.user_agent);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, MEDIA_TYPE_JSON).body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(method = %method, path, status = status.as_u16(), "Received response");
            return Ok(response);
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v["message"].as_str().map(String::from));
        tracing::warn!(method = %method, path, status = status.as_u16(), "API request failed");

        Err(Error::Api {
            status: status.as_u16(),
            message,
            body,
        })
    }
}

/// Prefixes `path` with the API version segment.
pub(crate) fn versioned(path: &str) -> String {
    format!("/{}{}", API_VERSION, path)
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(Error::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::OauthTokenCredentials;

    #[test]
    fn versioned_path() {
        assert_eq!(
            versioned("/1010/registrar/domains/example.com/delegation"),
            "/v2/1010/registrar/domains/example.com/delegation"
        );
    }

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("dnsimple-rust/"));
        assert!(config.timeout.is_none());
        assert_eq!(ClientConfig::sandbox().base_url, SANDBOX_BASE_URL);
    }

    #[test]
    fn rejects_unparsable_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        let result = Client::with_config(OauthTokenCredentials::new("token"), config);
        assert!(matches!(result, Err(Error::Url(_))));
    }

    #[test]
    fn debug_does_not_leak_credentials() {
        let client = Client::new(OauthTokenCredentials::new("very-secret")).expect("client");
        assert!(!format!("{:?}", client).contains("very-secret"));
    }
}
