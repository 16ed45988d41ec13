//! Shared HTTP client for the analysis backend

use crate::config::ApiConfig;
use crate::constants::{BEARER_PREFIX, CONTENT_TYPE_JSON, USER_AGENT};
use crate::error_ext::ErrorContext;
use crate::http::response::HttpResponseUtils;
use medrep_domain::error::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Backend client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    request_timeout: Duration,
    upload_timeout: Duration,
    http_client: Client,
}

impl ApiClient {
    /// Build a client with its own connection pool
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .network_context("Failed to build HTTP client")?;
        Ok(Self::with_client(config, http_client))
    }

    /// Use an existing reqwest client
    pub fn with_client(config: &ApiConfig, http_client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout(),
            upload_timeout: config.upload_timeout(),
            http_client,
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// `GET` an endpoint
    pub async fn get_json(&self, endpoint: &str, token: Option<&str>) -> Result<Value> {
        let request = self.http_client.get(self.url(endpoint));
        self.send(request, token, self.request_timeout).await
    }

    /// `POST` a JSON body, or nothing
    pub async fn post_json<B>(&self, endpoint: &str, token: Option<&str>, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http_client
            .post(self.url(endpoint))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request, token, self.request_timeout).await
    }

    /// `PUT` a JSON body
    pub async fn put_json<B>(&self, endpoint: &str, token: Option<&str>, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http_client.put(self.url(endpoint)).json(body);
        self.send(request, token, self.request_timeout).await
    }

    /// `DELETE` an endpoint
    pub async fn delete(&self, endpoint: &str, token: Option<&str>) -> Result<Value> {
        let request = self.http_client.delete(self.url(endpoint));
        self.send(request, token, self.request_timeout).await
    }

    /// `POST` a multipart form with the upload timeout
    pub async fn post_multipart(&self, endpoint: &str, token: Option<&str>, form: Form) -> Result<Value> {
        let request = self.http_client.post(self.url(endpoint)).multipart(form);
        self.send(request, token, self.upload_timeout).await
    }

    async fn send(&self, request: RequestBuilder, token: Option<&str>, timeout: Duration) -> Result<Value> {
        let mut request = request.timeout(timeout);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("{BEARER_PREFIX}{token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(e, timeout))?;
        debug!(url = %response.url(), status = response.status().as_u16(), "Backend responded");

        HttpResponseUtils::check_and_parse(response).await
    }
}
