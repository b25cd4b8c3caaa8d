//! Remote server HTTP client
//!
//! Blocking client for the facts server JSON REST interface. One call
//! per request, no retries; the transport's default timeouts apply.

use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::{Config, Credentials};
use crate::error::{Error, Result};

/// HTTP client for a remote facts server
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl RestClient {
    /// Create new client from config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.uri(), config.credentials())
    }

    /// Create new client with explicit parameters
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid server URI: {}", base_url))?;

        let client = Client::builder()
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// GET a relative path with query parameters.
    pub fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Option<Value>> {
        let url = self.url(path)?;
        debug!(%url, ?params, "GET");

        let resp = self
            .authed(self.client.get(url))
            .query(params)
            .send()?;
        self.decode(resp)
    }

    /// POST a JSON body to a relative path.
    pub fn post(&self, path: &str, body: &Value) -> Result<Option<Value>> {
        let url = self.url(path)?;
        debug!(%url, %body, "POST");

        let resp = self.authed(self.client.post(url)).json(body).send()?;
        self.decode(resp)
    }

    /// PUT a JSON body to a relative path.
    pub fn put(&self, path: &str, body: &Value) -> Result<Option<Value>> {
        let url = self.url(path)?;
        debug!(%url, %body, "PUT");

        let resp = self.authed(self.client.put(url)).json(body).send()?;
        self.decode(resp)
    }

    /// DELETE a relative path.
    pub fn delete(&self, path: &str) -> Result<Option<Value>> {
        let url = self.url(path)?;
        debug!(%url, "DELETE");

        let resp = self.authed(self.client.delete(url)).send()?;
        self.decode(resp)
    }

    /// Build a URL for an endpoint
    fn url(&self, path: &str) -> Result<Url> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path: {}", path))?;
        Ok(url)
    }

    /// Attach basic auth when credentials are configured.
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(creds) => builder.basic_auth(&creds.user, Some(&creds.password)),
            None => builder,
        }
    }

    /// Map the status, then parse the body.
    fn decode(&self, resp: Response) -> Result<Option<Value>> {
        check_status(resp.status())?;
        let text = resp.text()?;
        parse_body(&text)
    }
}

/// Translate a non-success HTTP status into its error kind.
fn check_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
        StatusCode::UNPROCESSABLE_ENTITY => Err(Error::UnprocessableEntity),
        StatusCode::INTERNAL_SERVER_ERROR => Err(Error::InternalServer),
        s if !s.is_success() => Err(Error::UnexpectedStatus(s)),
        _ => Ok(()),
    }
}

/// An empty or whitespace-only body is "no content", not an error.
fn parse_body(text: &str) -> Result<Option<Value>> {
    if text.trim().is_empty() {
        debug!("response = <empty>");
        return Ok(None);
    }
    debug!(response = %text);
    serde_json::from_str(text).map(Some).map_err(Error::JsonParse)
}
