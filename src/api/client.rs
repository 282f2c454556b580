//! HTTP client for the Foody API
//!
//! Every request carries the bearer token and user agent set at construction.
//! Non-2xx statuses are returned as replies, not errors; only transport
//! failures surface as `Err`.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Url};
use tracing::debug;

use crate::common::{Config, Error, Result};

use super::types::{ApiReply, CreateRequest, EditOperation};

const USER_AGENT: &str = "foody-e2e";

/// Client bound to one base URL and one bearer credential
#[derive(Debug, Clone)]
pub struct FoodClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FoodClient {
    /// Build a client from resolved configuration
    ///
    /// Fails if no token is configured or the base URL cannot be used.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.require_token()?;
        Self::new(&config.api.base_url, token, config.timeouts.request())
    }

    pub fn new(base_url: &str, token: &str, timeout: Option<std::time::Duration>) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| Error::Config("API token contains characters not allowed in a header".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /api/Food/Create`
    pub async fn create(&self, request: &CreateRequest) -> Result<ApiReply> {
        let url = self.endpoint(&["api", "Food", "Create"])?;
        self.send(self.request(Method::POST, url).json(request)).await
    }

    /// `PATCH /api/Food/Edit/{id}`
    pub async fn edit(&self, id: &str, ops: &[EditOperation]) -> Result<ApiReply> {
        let url = self.endpoint(&["api", "Food", "Edit", id])?;
        self.send(self.request(Method::PATCH, url).json(ops)).await
    }

    /// `GET /api/Food/All`
    pub async fn list(&self) -> Result<ApiReply> {
        let url = self.endpoint(&["api", "Food", "All"])?;
        self.send(self.request(Method::GET, url)).await
    }

    /// `DELETE /api/Food/Delete/{id}`
    pub async fn delete(&self, id: &str) -> Result<ApiReply> {
        let url = self.endpoint(&["api", "Food", "Delete", id])?;
        self.send(self.request(Method::DELETE, url)).await
    }

    /// Resolve path segments against the base URL, percent-encoding each one
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_base_url(self.base_url.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "Sending request");
        self.http.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiReply> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Received response");
        Ok(ApiReply { status, body })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::invalid_base_url(raw, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_base_url(raw, "scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(Error::invalid_base_url(raw, "cannot be a base"));
    }
    Ok(url)
}
