/*
[INPUT]:  Connection options (host, port, pair, CA, timeouts) and API key credentials
[OUTPUT]: Configured client and the shared request-dispatch routine
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_CHARSET, HeaderMap, HeaderValue};
use reqwest::{Certificate, Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{BitxError, Result, is_rate_limit_code};
use super::rate::CallRateTracker;

const DEFAULT_HOSTNAME: &str = "api.luno.com";
const DEFAULT_PORT: u16 = 443;
const DEFAULT_PAIR: &str = "XBTZAR";

const USER_AGENT: &str = concat!("bitx-rs v", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub hostname: String,
    pub port: u16,
    /// Currency pair used when a call does not name one
    pub pair: String,
    /// Extra PEM root certificate to trust
    pub ca_pem: Option<Vec<u8>>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            pair: DEFAULT_PAIR.to_string(),
            ca_pem: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the `BITX_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `BITX_HOSTNAME`, `BITX_PORT`, `BITX_PAIR` and `BITX_CA_FILE`.
    ///
    /// Unset or blank variables leave the current value alone.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(hostname) = env_var("BITX_HOSTNAME") {
            self.hostname = hostname;
        }
        if let Some(port) = env_var("BITX_PORT") {
            self.port = port
                .parse()
                .map_err(|e| BitxError::Config(format!("invalid BITX_PORT {port:?}: {e}")))?;
        }
        if let Some(pair) = env_var("BITX_PAIR") {
            self.pair = pair;
        }
        if let Some(path) = env_var("BITX_CA_FILE") {
            self.ca_pem = Some(std::fs::read(path)?);
        }
        Ok(())
    }

    /// `https://{hostname}:{port}`
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&format!("https://{}:{}", self.hostname, self.port))?)
    }
}

/// API key used for HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Read `BITX_KEY_ID` and `BITX_KEY_SECRET`; `None` unless both are set
    pub fn from_env() -> Option<Self> {
        Some(Self::new(env_var("BITX_KEY_ID")?, env_var("BITX_KEY_SECRET")?))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Luno (BitX) API
#[derive(Debug, Clone)]
pub struct BitxClient {
    http_client: Client,
    base_url: Url,
    pair: String,
    credentials: Option<Credentials>,
    rate: Arc<CallRateTracker>,
}

impl BitxClient {
    /// Create an unauthenticated client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create an unauthenticated client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        Self::build(config, base_url)
    }

    /// Create an authenticated client
    pub fn with_credentials(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.set_credentials(credentials);
        Ok(client)
    }

    /// Create a client talking to an explicit base URL instead of `https://host:port`
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Self::build(config, base_url)
    }

    fn build(config: ClientConfig, base_url: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(pem) = config.ca_pem.as_deref() {
            builder = builder.add_root_certificate(Certificate::from_pem(pem)?);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
            pair: config.pair,
            credentials: None,
            rate: Arc::new(CallRateTracker::default()),
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Default currency pair
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Caller's pair, or the client default when unset
    pub(crate) fn pair_or_default(&self, pair: Option<&str>) -> String {
        pair.unwrap_or(&self.pair).to_string()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Requests dispatched in the last 60 seconds, throttled ones excluded.
    ///
    /// Shared between clones of this client.
    pub fn api_call_rate(&self) -> usize {
        self.rate.count()
    }

    /// Resolve an absolute API path against the base URL
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Resolve `path` and append `id` as one percent-encoded segment
    pub(crate) fn url_with_id(&self, path: &str, id: &str) -> Result<Url> {
        let mut url = self.url(path)?;
        let base = self.base_url.as_str();
        url.path_segments_mut()
            .map_err(|_| BitxError::Config(format!("base URL cannot hold a path: {base}")))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Issue a request without parameters
    pub(crate) async fn send<T: DeserializeOwned>(&self, method: Method, url: Url) -> Result<T> {
        self.request::<T, ()>(method, url, None).await
    }

    /// Shared dispatch routine for every endpoint.
    ///
    /// GET and DELETE carry `params` in the query string, POST as a form body.
    pub(crate) async fn request<T, P>(&self, method: Method, url: Url, params: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        tracing::debug!(method = %method, path = url.path(), "dispatching request");

        let mut builder = self.http_client.request(method.clone(), url);
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.key_id, Some(&credentials.key_secret));
        }
        if let Some(params) = params {
            builder = match method {
                Method::POST => builder.form(params),
                Method::GET | Method::DELETE => builder.query(params),
                _ => builder,
            };
        }

        let stamp = self.rate.record();
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let err = status_error(status, body);
            if err.error_code().is_some_and(is_rate_limit_code) {
                self.rate.forget(stamp);
                tracing::warn!(status = status.as_u16(), "request throttled by exchange");
            }
            return Err(err);
        }

        let value: Value = serde_json::from_str(&body)?;
        if let Some(message) = rejection_message(&value) {
            return Err(BitxError::Rejected { message });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Classify a non-200 response body
fn status_error(status: StatusCode, body: String) -> BitxError {
    let structured = serde_json::from_str::<Value>(&body).ok().and_then(|value| {
        let code = value.get("error_code")?.as_str()?.to_string();
        let message = match value.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Some((code, message))
    });

    match structured {
        Some((code, message)) => BitxError::api_error(status, code, message),
        None => BitxError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

/// Message of a truthy top-level `error` field in a 200 response
fn rejection_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
